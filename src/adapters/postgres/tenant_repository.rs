//! PostgreSQL implementation of TenantRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, PhoneNumber, TenantId, Timestamp};
use crate::domain::tenancy::Tenant;
use crate::ports::TenantRepository;

/// PostgreSQL implementation of the TenantRepository port.
pub struct PostgresTenantRepository {
    pool: PgPool,
}

impl PostgresTenantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a tenant.
#[derive(Debug, sqlx::FromRow)]
struct TenantRow {
    id: Uuid,
    name: String,
    phone_number: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<TenantRow> for Tenant {
    type Error = DomainError;

    fn try_from(row: TenantRow) -> Result<Self, Self::Error> {
        // Stored numbers are already international, so no country code is needed.
        let phone_number = PhoneNumber::parse(&row.phone_number, "").map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid stored phone number: {}", e),
            )
        })?;

        Ok(Tenant {
            id: TenantId::from_uuid(row.id),
            name: row.name,
            phone_number,
            created_at: Timestamp::from_datetime(row.created_at),
        })
    }
}

#[async_trait]
impl TenantRepository for PostgresTenantRepository {
    async fn find_by_phone(&self, phone: &PhoneNumber) -> Result<Option<Tenant>, DomainError> {
        let row: Option<TenantRow> = sqlx::query_as(
            r#"
            SELECT id, name, phone_number, created_at
            FROM tenants
            WHERE phone_number = $1
            "#,
        )
        .bind(phone.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to find tenant", e))?;

        row.map(Tenant::try_from).transpose()
    }

    async fn create(&self, tenant: &Tenant) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO tenants (id, name, phone_number, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(tenant.id.as_uuid())
        .bind(&tenant.name)
        .bind(tenant.phone_number.as_str())
        .bind(tenant.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.constraint() == Some("tenants_phone_number_key") {
                    return DomainError::new(
                        ErrorCode::ValidationFailed,
                        "Phone number is already registered",
                    )
                    .with_detail("phone_number", tenant.phone_number.as_str());
                }
            }
            DomainError::database("Failed to create tenant", e)
        })?;

        Ok(())
    }
}
