//! Relationship models and DTOs.

use banquet_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `relationships` table.
///
/// Directionally stored (`guest_from_id` -> `guest_to_id`) but symmetric in
/// effect for scoring and graph purposes.
#[derive(Debug, Clone, FromRow, Serialize, TS)]
#[ts(export)]
pub struct Relationship {
    pub id: DbId,
    pub guest_from_id: DbId,
    pub guest_to_id: DbId,
    pub kind: String,
    pub strength: i32,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Relationship joined with both endpoint guests' display names.
#[derive(Debug, Clone, FromRow, Serialize, TS)]
#[ts(export)]
pub struct RelationshipWithGuests {
    pub id: DbId,
    pub guest_from_id: DbId,
    pub guest_to_id: DbId,
    pub kind: String,
    pub strength: i32,
    pub notes: Option<String>,
    pub guest_from_name: String,
    pub guest_to_name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a relationship.
///
/// `kind`, `strength`, and the endpoint pair are validated against
/// `banquet_core::relationship` in the handler. `strength` defaults to 1.
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export)]
pub struct CreateRelationship {
    pub guest_from_id: DbId,
    pub guest_to_id: DbId,
    pub kind: String,
    pub strength: Option<i32>,
    pub notes: Option<String>,
}
