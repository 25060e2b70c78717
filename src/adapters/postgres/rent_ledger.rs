//! PostgreSQL implementation of RentLedger.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, ErrorCode, Money, PropertyId, TenantId};
use crate::ports::RentLedger;

pub struct PostgresRentLedger {
    pool: PgPool,
}

impl PostgresRentLedger {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct BalanceRow {
    amount_minor: i64,
    currency: String,
}

#[async_trait]
impl RentLedger for PostgresRentLedger {
    async fn balance(
        &self,
        tenant_id: &TenantId,
        property_id: &PropertyId,
        room: &str,
    ) -> Result<Option<Money>, DomainError> {
        let row: Option<BalanceRow> = sqlx::query_as(
            r#"
            SELECT amount_minor, currency
            FROM rent_balances
            WHERE tenant_id = $1 AND property_id = $2 AND room = $3
            "#,
        )
        .bind(tenant_id.as_uuid())
        .bind(property_id.as_uuid())
        .bind(room)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to load rent balance", e))?;

        row.map(|row| {
            Money::new(row.amount_minor, row.currency.trim()).map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Invalid stored balance: {}", e),
                )
            })
        })
        .transpose()
    }
}
