//! renti - USSD service for rent balances and maintenance requests.
//!
//! Configuration is read from `RENTI__*` environment variables (see
//! [`renti::config::AppConfig`]).

use std::sync::Arc;

use secrecy::SecretString;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use renti::adapters::http::{build_router, UssdAppState};
use renti::adapters::memory::InMemoryTenancyStore;
use renti::adapters::postgres::{
    PostgresMaintenanceTicketRepository, PostgresPropertyRepository, PostgresRentLedger,
    PostgresTenantRepository, MIGRATOR,
};
use renti::adapters::sms::{AfricasTalkingConfig, AfricasTalkingNotifier};
use renti::config::{AppConfig, SmsConfig, StorageBackend};
use renti::ports::Notifier;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    config.validate()?;
    let settings = config.ussd.settings()?;

    if settings.dev_bypass.is_some() {
        tracing::warn!("Development bypass number is enabled");
    }

    let notifier = build_notifier(&config.sms);

    let state = match config.storage.backend {
        StorageBackend::Postgres => {
            tracing::info!(url = %config.database.redacted_url(), "Connecting to database");
            let pool = config
                .database
                .pool_options()
                .connect(&config.database.url)
                .await?;
            tracing::info!("Connected to database");

            if config.database.run_migrations {
                MIGRATOR.run(&pool).await?;
                tracing::info!("Database migrations applied");
            }

            UssdAppState {
                tenant_repository: Arc::new(PostgresTenantRepository::new(pool.clone())),
                property_repository: Arc::new(PostgresPropertyRepository::new(pool.clone())),
                rent_ledger: Arc::new(PostgresRentLedger::new(pool.clone())),
                ticket_repository: Arc::new(PostgresMaintenanceTicketRepository::new(pool)),
                notifier,
                settings,
            }
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; data is lost on restart");
            let store = Arc::new(InMemoryTenancyStore::new());
            UssdAppState {
                tenant_repository: store.clone(),
                property_repository: store.clone(),
                rent_ledger: store.clone(),
                ticket_repository: store,
                notifier,
                settings,
            }
        }
    };

    let app = build_router(state, config.server.request_timeout());

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "renti listening");

    axum::serve(listener, app).await?;
    Ok(())
}

fn build_notifier(sms: &SmsConfig) -> Arc<dyn Notifier> {
    if !sms.is_configured() {
        tracing::warn!("SMS credentials not configured; notifications will fail");
    }

    let api_key = sms
        .api_key
        .clone()
        .unwrap_or_else(|| SecretString::new(String::new()));

    let mut at_config = AfricasTalkingConfig::new(sms.username.clone(), api_key)
        .with_request_timeout(sms.request_timeout());
    if sms.sandbox {
        at_config = at_config.sandbox();
    }
    if let Some(url) = &sms.base_url {
        at_config = at_config.with_base_url(url.clone());
    }
    if let Some(sender_id) = &sms.sender_id {
        at_config = at_config.with_sender_id(sender_id.clone());
    }

    Arc::new(AfricasTalkingNotifier::new(at_config))
}
