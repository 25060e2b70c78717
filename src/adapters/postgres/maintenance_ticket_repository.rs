//! PostgreSQL implementation of MaintenanceTicketRepository.
//!
//! Membership and room are checked inside the insert transaction and
//! reported as typed errors.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, PropertyId, TenantId, TicketId, Timestamp};
use crate::domain::tenancy::MaintenanceTicket;
use crate::ports::MaintenanceTicketRepository;

pub struct PostgresMaintenanceTicketRepository {
    pool: PgPool,
}

impl PostgresMaintenanceTicketRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct TicketRow {
    id: Uuid,
    tenant_id: Uuid,
    property_id: Uuid,
    room: String,
    description: String,
    created_at: DateTime<Utc>,
}

impl From<TicketRow> for MaintenanceTicket {
    fn from(row: TicketRow) -> Self {
        MaintenanceTicket {
            id: TicketId::from_uuid(row.id),
            tenant_id: TenantId::from_uuid(row.tenant_id),
            property_id: PropertyId::from_uuid(row.property_id),
            room: row.room,
            description: row.description,
            created_at: Timestamp::from_datetime(row.created_at),
        }
    }
}

#[async_trait]
impl MaintenanceTicketRepository for PostgresMaintenanceTicketRepository {
    async fn create(&self, ticket: &MaintenanceTicket) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to begin transaction", e))?;

        let (is_member, has_room): (bool, bool) = sqlx::query_as(
            r#"
            SELECT
                EXISTS (SELECT 1 FROM property_tenants WHERE property_id = $1 AND tenant_id = $2),
                EXISTS (SELECT 1 FROM property_rooms WHERE property_id = $1 AND room = $3)
            "#,
        )
        .bind(ticket.property_id.as_uuid())
        .bind(ticket.tenant_id.as_uuid())
        .bind(&ticket.room)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| DomainError::database("Failed to check ticket ownership", e))?;

        if !is_member {
            return Err(DomainError::new(
                ErrorCode::NotAMember,
                "Tenant is not registered for this property",
            )
            .with_detail("tenant_id", ticket.tenant_id.to_string()));
        }
        if !has_room {
            return Err(
                DomainError::new(ErrorCode::RoomNotFound, "Room is not part of this property")
                    .with_detail("room", ticket.room.clone()),
            );
        }

        sqlx::query(
            r#"
            INSERT INTO maintenance_tickets (id, tenant_id, property_id, room, description, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(ticket.id.as_uuid())
        .bind(ticket.tenant_id.as_uuid())
        .bind(ticket.property_id.as_uuid())
        .bind(&ticket.room)
        .bind(&ticket.description)
        .bind(ticket.created_at.as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::database("Failed to create maintenance ticket", e))?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit maintenance ticket", e))?;

        Ok(())
    }

    async fn list_for_tenant(
        &self,
        tenant_id: &TenantId,
    ) -> Result<Vec<MaintenanceTicket>, DomainError> {
        let rows: Vec<TicketRow> = sqlx::query_as(
            r#"
            SELECT id, tenant_id, property_id, room, description, created_at
            FROM maintenance_tickets
            WHERE tenant_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(tenant_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list maintenance tickets", e))?;

        Ok(rows.into_iter().map(MaintenanceTicket::from).collect())
    }
}
