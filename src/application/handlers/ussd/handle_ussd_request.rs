//! HandleUssdRequestHandler - the menu dispatcher.
//!
//! Every gateway callback carries the whole session's input, so each request
//! is handled from scratch: resolve the caller, replay the selections
//! through [`MenuState`], re-validate whatever property and room they name,
//! and render the next screen.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, Money, PhoneNumber};
use crate::domain::tenancy::{MaintenanceTicket, Property, Tenant};
use crate::domain::ussd::{messages, Flow, MenuInput, MenuState, Rejection, UssdResponse};
use crate::ports::{
    DeliveryOutcome, MaintenanceTicketRepository, Notifier, PropertyRepository, RentLedger,
    TenantRepository,
};

/// Display name given to the development bypass caller.
pub const DEV_BYPASS_TENANT_NAME: &str = "Developer";

/// Command carrying the four logical fields of a gateway callback.
#[derive(Debug, Clone, Default)]
pub struct HandleUssdRequestCommand {
    pub session_id: Option<String>,
    pub service_code: Option<String>,
    pub phone_number: Option<String>,
    pub text: String,
}

/// Runtime knobs for the dispatcher.
#[derive(Debug, Clone)]
pub struct UssdSettings {
    /// When set, requests for any other service code are refused.
    pub expected_service_code: Option<String>,
    /// Digits substituted for a national `0` trunk prefix.
    pub default_country_code: String,
    /// Currency used when no balance has been recorded.
    pub currency: String,
    /// Unregistered number auto-provisioned as a throwaway tenant.
    /// Only populated when explicitly enabled in configuration.
    pub dev_bypass: Option<PhoneNumber>,
}

impl Default for UssdSettings {
    fn default() -> Self {
        Self {
            expected_service_code: None,
            default_country_code: "254".to_string(),
            currency: "KES".to_string(),
            dev_bypass: None,
        }
    }
}

/// What the menu produced for a registered caller.
enum Outcome {
    /// Keep the session open with this prompt.
    Prompt(String),
    /// Close the session with a confirmation that is also sent by SMS.
    Completed(String),
}

/// Why the menu stopped before producing an [`Outcome`].
enum Halt {
    Rejected(Rejection),
    Failed(DomainError),
}

impl From<Rejection> for Halt {
    fn from(rejection: Rejection) -> Self {
        Halt::Rejected(rejection)
    }
}

impl From<DomainError> for Halt {
    fn from(err: DomainError) -> Self {
        Halt::Failed(err)
    }
}

/// Handler for USSD gateway callbacks.
pub struct HandleUssdRequestHandler {
    tenants: Arc<dyn TenantRepository>,
    properties: Arc<dyn PropertyRepository>,
    ledger: Arc<dyn RentLedger>,
    tickets: Arc<dyn MaintenanceTicketRepository>,
    notifier: Arc<dyn Notifier>,
    settings: UssdSettings,
}

impl HandleUssdRequestHandler {
    pub fn new(
        tenants: Arc<dyn TenantRepository>,
        properties: Arc<dyn PropertyRepository>,
        ledger: Arc<dyn RentLedger>,
        tickets: Arc<dyn MaintenanceTicketRepository>,
        notifier: Arc<dyn Notifier>,
        settings: UssdSettings,
    ) -> Self {
        Self {
            tenants,
            properties,
            ledger,
            tickets,
            notifier,
            settings,
        }
    }

    /// Produces the next screen. Never fails: internal errors are logged and
    /// rendered as a generic apology.
    pub async fn handle(&self, cmd: HandleUssdRequestCommand) -> UssdResponse {
        if !self.service_code_accepted(cmd.service_code.as_deref()) {
            tracing::warn!(
                session_id = ?cmd.session_id,
                service_code = ?cmd.service_code,
                "Rejected request for unexpected service code"
            );
            return UssdResponse::end(messages::INVALID_SERVICE_CODE);
        }

        match self.dispatch(&cmd).await {
            Ok(response) => response,
            Err(err) => {
                tracing::error!(
                    session_id = ?cmd.session_id,
                    phone = ?cmd.phone_number,
                    error = %err,
                    "Error handling USSD request"
                );
                UssdResponse::end(messages::GENERIC_ERROR)
            }
        }
    }

    fn service_code_accepted(&self, service_code: Option<&str>) -> bool {
        match &self.settings.expected_service_code {
            Some(expected) => service_code.map(str::trim) == Some(expected.as_str()),
            None => true,
        }
    }

    async fn dispatch(&self, cmd: &HandleUssdRequestCommand) -> Result<UssdResponse, DomainError> {
        let raw_phone = cmd.phone_number.as_deref().unwrap_or_default();
        let phone = match PhoneNumber::parse(raw_phone, &self.settings.default_country_code) {
            Ok(phone) => phone,
            Err(err) => {
                // No deliverable destination, so no SMS.
                tracing::warn!(
                    session_id = ?cmd.session_id,
                    phone = raw_phone,
                    error = %err,
                    "Unusable caller phone number"
                );
                return Ok(UssdResponse::end(Rejection::UnregisteredNumber.message()));
            }
        };

        let Some(tenant) = self.resolve_tenant(&phone).await? else {
            tracing::info!(phone = %phone, "Request from unregistered number");
            return Ok(self.reject(&phone, Rejection::UnregisteredNumber).await);
        };

        let state = MenuInput::parse(&cmd.text).state();
        tracing::debug!(
            session_id = ?cmd.session_id,
            tenant_id = %tenant.id,
            state = ?state,
            "Menu state resolved"
        );

        match self.advance(&tenant, state).await {
            Ok(Outcome::Prompt(text)) => Ok(UssdResponse::Continue(text)),
            Ok(Outcome::Completed(text)) => {
                self.notify(&phone, &text).await;
                Ok(UssdResponse::End(text))
            }
            Err(Halt::Rejected(rejection)) => Ok(self.reject(&phone, rejection).await),
            Err(Halt::Failed(err)) => Err(err),
        }
    }

    /// Looks the caller up, provisioning the development bypass number when
    /// it is configured and not yet stored.
    async fn resolve_tenant(&self, phone: &PhoneNumber) -> Result<Option<Tenant>, DomainError> {
        if let Some(tenant) = self.tenants.find_by_phone(phone).await? {
            return Ok(Some(tenant));
        }

        if self.settings.dev_bypass.as_ref() != Some(phone) {
            return Ok(None);
        }

        let tenant = Tenant::new(DEV_BYPASS_TENANT_NAME, phone.clone())?;
        match self.tenants.create(&tenant).await {
            Ok(()) => {}
            // A concurrent request registered the number first.
            Err(err) if err.code == ErrorCode::ValidationFailed => {
                return self.tenants.find_by_phone(phone).await;
            }
            Err(err) => return Err(err),
        }
        tracing::info!(phone = %phone, tenant_id = %tenant.id, "Provisioned development bypass tenant");
        Ok(Some(tenant))
    }

    async fn advance(&self, tenant: &Tenant, state: MenuState) -> Result<Outcome, Halt> {
        match state {
            MenuState::MainMenu => Ok(Outcome::Prompt(messages::main_menu(&tenant.name))),

            MenuState::PropertyPrompt { .. } => {
                Ok(Outcome::Prompt(messages::ENTER_PROPERTY.to_string()))
            }

            MenuState::PropertyEntered { property, .. } => {
                self.find_property(tenant, &property).await?;
                Ok(Outcome::Prompt(messages::ENTER_ROOM.to_string()))
            }

            MenuState::RoomEntered {
                flow: Flow::RentBalance,
                property,
                room,
            } => {
                let property = self.find_room(tenant, &property, &room).await?;
                let balance = match self.ledger.balance(&tenant.id, &property.id, &room).await? {
                    Some(balance) => balance,
                    None => Money::zero(self.settings.currency.as_str()).map_err(DomainError::from)?,
                };
                Ok(Outcome::Completed(messages::rent_balance(
                    &property.name,
                    &room,
                    &balance,
                )))
            }

            MenuState::RoomEntered {
                flow: Flow::Maintenance,
                property,
                room,
            } => {
                self.find_room(tenant, &property, &room).await?;
                Ok(Outcome::Prompt(messages::DESCRIBE_ISSUE.to_string()))
            }

            MenuState::DescriptionEntered {
                property,
                room,
                description,
            } => {
                let property = self.find_room(tenant, &property, &room).await?;
                let ticket = MaintenanceTicket::new(tenant.id, property.id, room, &description)
                    .map_err(|_| Rejection::InvalidSelection)?;
                self.tickets.create(&ticket).await?;

                tracing::info!(
                    ticket_id = %ticket.id,
                    tenant_id = %tenant.id,
                    property = %property.name,
                    room = %ticket.room,
                    "Maintenance ticket created"
                );

                Ok(Outcome::Completed(messages::ticket_submitted(
                    &ticket.reference(),
                    &property.name,
                    &ticket.room,
                )))
            }

            MenuState::Invalid => Err(Rejection::InvalidSelection.into()),
        }
    }

    async fn find_property(&self, tenant: &Tenant, name: &str) -> Result<Property, Halt> {
        self.properties
            .find_for_tenant(&tenant.id, name)
            .await?
            .ok_or_else(|| Rejection::unknown_property(name).into())
    }

    async fn find_room(&self, tenant: &Tenant, name: &str, room: &str) -> Result<Property, Halt> {
        let property = self.find_property(tenant, name).await?;
        if !property.has_room(room) {
            return Err(Rejection::unknown_room(property.name, room).into());
        }
        Ok(property)
    }

    async fn reject(&self, phone: &PhoneNumber, rejection: Rejection) -> UssdResponse {
        let message = rejection.message();
        if rejection.notifies_caller() {
            self.notify(phone, &message).await;
        }
        UssdResponse::End(message)
    }

    async fn notify(&self, phone: &PhoneNumber, screen_text: &str) {
        match self.notifier.send(phone, &messages::sms(screen_text)).await {
            DeliveryOutcome::Delivered(receipt) => {
                tracing::debug!(
                    phone = %phone,
                    message_id = ?receipt.message_id,
                    "SMS notification delivered"
                );
            }
            DeliveryOutcome::Failed { reason } => {
                tracing::warn!(phone = %phone, reason = %reason, "SMS notification failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryTenancyStore;
    use crate::adapters::sms::RecordingNotifier;
    use crate::domain::foundation::TenantId;
    use std::sync::atomic::{AtomicBool, Ordering};
    use async_trait::async_trait;

    // ════════════════════════════════════════════════════════════════════════════
    // Test Helpers
    // ════════════════════════════════════════════════════════════════════════════

    const JANE: &str = "+254712345678";
    const STRANGER: &str = "+254799999999";
    const BYPASS: &str = "+254700000000";

    fn phone(raw: &str) -> PhoneNumber {
        PhoneNumber::parse(raw, "254").unwrap()
    }

    struct Fixture {
        store: Arc<InMemoryTenancyStore>,
        notifier: Arc<RecordingNotifier>,
        jane: Tenant,
    }

    impl Fixture {
        async fn new() -> Self {
            let store = Arc::new(InMemoryTenancyStore::new());
            let jane = Tenant::new("Jane", phone(JANE)).unwrap();
            store.insert_tenant(jane.clone()).await;

            let sunrise = Property::new("Sunrise Court", ["1A", "1B"])
                .unwrap()
                .with_tenant(jane.id);
            store.insert_property(sunrise.clone()).await;
            store
                .set_balance(jane.id, sunrise.id, "1A", Money::new(1_200_000, "KES").unwrap())
                .await;

            Self {
                store,
                notifier: Arc::new(RecordingNotifier::new()),
                jane,
            }
        }

        fn handler(&self, settings: UssdSettings) -> HandleUssdRequestHandler {
            HandleUssdRequestHandler::new(
                self.store.clone(),
                self.store.clone(),
                self.store.clone(),
                self.store.clone(),
                self.notifier.clone(),
                settings,
            )
        }

        async fn dial(&self, phone: &str, text: &str) -> UssdResponse {
            self.handler(UssdSettings::default())
                .handle(command(phone, text))
                .await
        }
    }

    fn command(phone: &str, text: &str) -> HandleUssdRequestCommand {
        HandleUssdRequestCommand {
            session_id: Some("ATUid_test".to_string()),
            service_code: Some("*384*135477#".to_string()),
            phone_number: Some(phone.to_string()),
            text: text.to_string(),
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Caller Resolution
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn unregistered_number_ends_with_one_notification() {
        let fx = Fixture::new().await;

        let response = fx.dial(STRANGER, "").await;

        assert_eq!(response, UssdResponse::end(Rejection::UnregisteredNumber.message()));
        let sent = fx.notifier.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, phone(STRANGER));
    }

    #[tokio::test]
    async fn unregistered_check_precedes_menu_parsing() {
        let fx = Fixture::new().await;

        let response = fx.dial(STRANGER, "1*A*B*C").await;

        assert_eq!(response, UssdResponse::end(Rejection::UnregisteredNumber.message()));
        assert_eq!(fx.notifier.sent().len(), 1);
    }

    #[tokio::test]
    async fn national_format_resolves_registered_tenant() {
        let fx = Fixture::new().await;

        let response = fx.dial("0712345678", "").await;

        assert!(response.text().contains("Jane"));
    }

    #[tokio::test]
    async fn missing_phone_number_is_treated_as_unregistered_without_sms() {
        let fx = Fixture::new().await;
        let mut cmd = command(JANE, "");
        cmd.phone_number = None;

        let response = fx.handler(UssdSettings::default()).handle(cmd).await;

        assert_eq!(response, UssdResponse::end(Rejection::UnregisteredNumber.message()));
        assert!(fx.notifier.sent().is_empty());
    }

    #[tokio::test]
    async fn bypass_number_is_ignored_unless_enabled() {
        let fx = Fixture::new().await;

        let response = fx.dial(BYPASS, "").await;

        assert_eq!(response, UssdResponse::end(Rejection::UnregisteredNumber.message()));
    }

    #[tokio::test]
    async fn enabled_bypass_provisions_throwaway_tenant_silently() {
        let fx = Fixture::new().await;
        let settings = UssdSettings {
            dev_bypass: Some(phone(BYPASS)),
            ..Default::default()
        };

        let response = fx.handler(settings).handle(command(BYPASS, "")).await;

        assert!(!response.is_terminal());
        assert!(response.text().contains(DEV_BYPASS_TENANT_NAME));
        assert!(fx.notifier.sent().is_empty());
        let stored = fx.store.find_by_phone(&phone(BYPASS)).await.unwrap();
        assert!(stored.is_some());
    }

    /// Misses the first lookup, as if another request provisioned the number
    /// between lookup and insert.
    struct LateTenantRepository {
        store: Arc<InMemoryTenancyStore>,
        missed: AtomicBool,
    }

    #[async_trait]
    impl TenantRepository for LateTenantRepository {
        async fn find_by_phone(&self, phone: &PhoneNumber) -> Result<Option<Tenant>, DomainError> {
            if !self.missed.swap(true, Ordering::SeqCst) {
                return Ok(None);
            }
            self.store.find_by_phone(phone).await
        }

        async fn create(&self, tenant: &Tenant) -> Result<(), DomainError> {
            TenantRepository::create(self.store.as_ref(), tenant).await
        }
    }

    #[tokio::test]
    async fn bypass_provisioned_concurrently_resolves_stored_tenant() {
        let fx = Fixture::new().await;
        let existing = Tenant::new(DEV_BYPASS_TENANT_NAME, phone(BYPASS)).unwrap();
        fx.store.insert_tenant(existing.clone()).await;
        let handler = HandleUssdRequestHandler::new(
            Arc::new(LateTenantRepository {
                store: fx.store.clone(),
                missed: AtomicBool::new(false),
            }),
            fx.store.clone(),
            fx.store.clone(),
            fx.store.clone(),
            fx.notifier.clone(),
            UssdSettings {
                dev_bypass: Some(phone(BYPASS)),
                ..Default::default()
            },
        );

        let response = handler.handle(command(BYPASS, "")).await;

        assert!(!response.is_terminal());
        assert!(response.text().contains(DEV_BYPASS_TENANT_NAME));
        assert!(fx.notifier.sent().is_empty());
        let stored = fx.store.find_by_phone(&phone(BYPASS)).await.unwrap();
        assert_eq!(stored.map(|t| t.id), Some(existing.id));
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Main Menu and Prompts
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn empty_input_shows_main_menu_with_name() {
        let fx = Fixture::new().await;

        let response = fx.dial(JANE, "").await;

        assert!(response.to_string().starts_with("CON "));
        assert!(response.text().contains("Jane"));
        assert!(fx.notifier.sent().is_empty());
    }

    #[tokio::test]
    async fn option_one_prompts_for_property() {
        let fx = Fixture::new().await;

        let response = fx.dial(JANE, "1").await;

        assert_eq!(response, UssdResponse::continue_with(messages::ENTER_PROPERTY));
        assert!(fx.notifier.sent().is_empty());
    }

    #[tokio::test]
    async fn option_two_prompts_for_property() {
        let fx = Fixture::new().await;

        let response = fx.dial(JANE, "2").await;

        assert_eq!(response, UssdResponse::continue_with(messages::ENTER_PROPERTY));
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Rent Balance Flow
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn unknown_property_ends_with_notification() {
        let fx = Fixture::new().await;

        let response = fx.dial(JANE, "1*UnknownProp").await;

        assert_eq!(
            response,
            UssdResponse::end("You are not registered for property UnknownProp.")
        );
        assert_eq!(fx.notifier.sent().len(), 1);
    }

    #[tokio::test]
    async fn property_lookup_is_case_insensitive() {
        let fx = Fixture::new().await;

        let response = fx.dial(JANE, "1*sunrise court").await;

        assert_eq!(response, UssdResponse::continue_with(messages::ENTER_ROOM));
        assert!(fx.notifier.sent().is_empty());
    }

    #[tokio::test]
    async fn property_of_another_tenant_is_not_visible() {
        let fx = Fixture::new().await;
        let other = Property::new("Hillview", ["1"]).unwrap().with_tenant(TenantId::new());
        fx.store.insert_property(other).await;

        let response = fx.dial(JANE, "1*Hillview").await;

        assert_eq!(response, UssdResponse::end(Rejection::unknown_property("Hillview").message()));
    }

    #[tokio::test]
    async fn unknown_room_ends_with_notification() {
        let fx = Fixture::new().await;

        let response = fx.dial(JANE, "1*Sunrise Court*9Z").await;

        assert_eq!(
            response,
            UssdResponse::end("Room 9Z is not registered under Sunrise Court.")
        );
        assert_eq!(fx.notifier.sent().len(), 1);
    }

    #[tokio::test]
    async fn balance_is_returned_and_sent() {
        let fx = Fixture::new().await;

        let response = fx.dial(JANE, "1*Sunrise Court*1A").await;

        assert_eq!(
            response,
            UssdResponse::end("Your rent balance for Sunrise Court room 1A is KES 12,000.00.")
        );
        let sent = fx.notifier.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(
            sent[0].message,
            "Renti: Your rent balance for Sunrise Court room 1A is KES 12,000.00."
        );
    }

    #[tokio::test]
    async fn missing_balance_reads_as_zero() {
        let fx = Fixture::new().await;

        let response = fx.dial(JANE, "1*Sunrise Court*1B").await;

        assert_eq!(
            response,
            UssdResponse::end("Your rent balance for Sunrise Court room 1B is KES 0.00.")
        );
    }

    #[tokio::test]
    async fn too_many_segments_is_invalid_without_notification() {
        let fx = Fixture::new().await;

        let response = fx.dial(JANE, "1*A*B*C").await;

        assert_eq!(response, UssdResponse::end(Rejection::InvalidSelection.message()));
        assert!(fx.notifier.sent().is_empty());
    }

    #[tokio::test]
    async fn unknown_main_option_is_invalid() {
        let fx = Fixture::new().await;

        let response = fx.dial(JANE, "7").await;

        assert_eq!(response, UssdResponse::end(Rejection::InvalidSelection.message()));
        assert!(fx.notifier.sent().is_empty());
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Maintenance Flow
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn maintenance_prompts_for_room_then_description() {
        let fx = Fixture::new().await;

        assert_eq!(
            fx.dial(JANE, "2*Sunrise Court").await,
            UssdResponse::continue_with(messages::ENTER_ROOM)
        );
        assert_eq!(
            fx.dial(JANE, "2*Sunrise Court*1A").await,
            UssdResponse::continue_with(messages::DESCRIBE_ISSUE)
        );
        assert!(fx.notifier.sent().is_empty());
    }

    #[tokio::test]
    async fn maintenance_rejects_unknown_room_before_description() {
        let fx = Fixture::new().await;

        let response = fx.dial(JANE, "2*Sunrise Court*9Z").await;

        assert!(response.is_terminal());
        assert_eq!(fx.notifier.sent().len(), 1);
    }

    #[tokio::test]
    async fn submission_creates_ticket_and_notifies() {
        let fx = Fixture::new().await;

        let response = fx.dial(JANE, "2*Sunrise Court*1A*Leak").await;

        assert!(response.is_terminal());
        assert!(response.text().contains("submitted successfully"));
        let tickets = fx.store.list_for_tenant(&fx.jane.id).await.unwrap();
        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].description, "Leak");
        assert_eq!(tickets[0].room, "1A");
        assert!(response.text().contains(&tickets[0].reference()));
        assert_eq!(fx.notifier.sent().len(), 1);
    }

    #[tokio::test]
    async fn resubmission_creates_independent_ticket() {
        let fx = Fixture::new().await;

        fx.dial(JANE, "2*Sunrise Court*1A*Leak").await;
        fx.dial(JANE, "2*Sunrise Court*1A*Leak").await;

        let tickets = fx.store.list_for_tenant(&fx.jane.id).await.unwrap();
        assert_eq!(tickets.len(), 2);
        assert_ne!(tickets[0].id, tickets[1].id);
        assert_eq!(fx.notifier.sent().len(), 2);
    }

    #[tokio::test]
    async fn blank_description_is_invalid_selection() {
        let fx = Fixture::new().await;

        let response = fx.dial(JANE, "2*Sunrise Court*1A*   ").await;

        assert_eq!(response, UssdResponse::end(Rejection::InvalidSelection.message()));
        assert!(fx.store.list_for_tenant(&fx.jane.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn submission_revalidates_property() {
        let fx = Fixture::new().await;

        let response = fx.dial(JANE, "2*Nowhere*1A*Leak").await;

        assert_eq!(response, UssdResponse::end(Rejection::unknown_property("Nowhere").message()));
        assert!(fx.store.list_for_tenant(&fx.jane.id).await.unwrap().is_empty());
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Service Code, Notification, and Failure Handling
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn mismatched_service_code_short_circuits() {
        let fx = Fixture::new().await;
        let settings = UssdSettings {
            expected_service_code: Some("*123#".to_string()),
            ..Default::default()
        };

        let response = fx.handler(settings).handle(command(STRANGER, "")).await;

        assert_eq!(response, UssdResponse::end(messages::INVALID_SERVICE_CODE));
        assert!(fx.notifier.sent().is_empty());
    }

    #[tokio::test]
    async fn matching_service_code_is_accepted() {
        let fx = Fixture::new().await;
        let settings = UssdSettings {
            expected_service_code: Some("*384*135477#".to_string()),
            ..Default::default()
        };

        let response = fx.handler(settings).handle(command(JANE, "")).await;

        assert!(response.text().contains("Jane"));
    }

    #[tokio::test]
    async fn notification_failure_does_not_change_response() {
        let fx = Fixture::new().await;
        fx.notifier.fail_with("provider down");

        let response = fx.dial(JANE, "1*Sunrise Court*1A").await;

        assert_eq!(
            response,
            UssdResponse::end("Your rent balance for Sunrise Court room 1A is KES 12,000.00.")
        );
        assert_eq!(fx.notifier.sent().len(), 1);
    }

    struct BrokenTenantRepository;

    #[async_trait]
    impl TenantRepository for BrokenTenantRepository {
        async fn find_by_phone(&self, _phone: &PhoneNumber) -> Result<Option<Tenant>, DomainError> {
            Err(DomainError::new(ErrorCode::DatabaseError, "connection refused"))
        }

        async fn create(&self, _tenant: &Tenant) -> Result<(), DomainError> {
            Err(DomainError::new(ErrorCode::DatabaseError, "connection refused"))
        }
    }

    #[tokio::test]
    async fn internal_failure_renders_generic_error() {
        let fx = Fixture::new().await;
        let handler = HandleUssdRequestHandler::new(
            Arc::new(BrokenTenantRepository),
            fx.store.clone(),
            fx.store.clone(),
            fx.store.clone(),
            fx.notifier.clone(),
            UssdSettings::default(),
        );

        let response = handler.handle(command(JANE, "")).await;

        assert_eq!(response, UssdResponse::end(messages::GENERIC_ERROR));
        assert!(!response.text().contains("connection refused"));
        assert!(fx.notifier.sent().is_empty());
    }
}
