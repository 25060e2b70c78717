//! PostgreSQL implementation of PropertyRepository.
//!
//! A property is assembled from three tables: `properties`,
//! `property_rooms`, and `property_tenants`.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, PropertyId, TenantId};
use crate::domain::tenancy::Property;
use crate::ports::PropertyRepository;

pub struct PostgresPropertyRepository {
    pool: PgPool,
}

impl PostgresPropertyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn rooms(&self, property_id: Uuid) -> Result<Vec<String>, DomainError> {
        sqlx::query_scalar(
            r#"
            SELECT room FROM property_rooms
            WHERE property_id = $1
            "#,
        )
        .bind(property_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to load property rooms", e))
    }

    async fn tenants(&self, property_id: Uuid) -> Result<Vec<Uuid>, DomainError> {
        sqlx::query_scalar(
            r#"
            SELECT tenant_id FROM property_tenants
            WHERE property_id = $1
            "#,
        )
        .bind(property_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to load property tenants", e))
    }
}

#[derive(Debug, sqlx::FromRow)]
struct PropertyRow {
    id: Uuid,
    name: String,
}

#[async_trait]
impl PropertyRepository for PostgresPropertyRepository {
    async fn find_for_tenant(
        &self,
        tenant_id: &TenantId,
        name: &str,
    ) -> Result<Option<Property>, DomainError> {
        let row: Option<PropertyRow> = sqlx::query_as(
            r#"
            SELECT p.id, p.name
            FROM properties p
            JOIN property_tenants pt ON pt.property_id = p.id
            WHERE pt.tenant_id = $1
              AND LOWER(p.name) = LOWER($2)
            ORDER BY p.created_at
            LIMIT 1
            "#,
        )
        .bind(tenant_id.as_uuid())
        .bind(name.trim())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to find property", e))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let rooms = self.rooms(row.id).await?;
        let tenants = self.tenants(row.id).await?;

        Ok(Some(Property {
            id: PropertyId::from_uuid(row.id),
            name: row.name,
            rooms: rooms.into_iter().collect(),
            tenants: tenants.into_iter().map(TenantId::from_uuid).collect(),
        }))
    }
}
