//! Seating table models and DTOs.

use banquet_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ts_rs::TS;
use validator::Validate;

use crate::models::guest::Guest;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `tables` table.
#[derive(Debug, Clone, FromRow, Serialize, TS)]
#[ts(export)]
pub struct Table {
    pub id: DbId,
    pub name: String,
    pub capacity: i32,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Table with its current occupants, for the assignment view.
///
/// Occupancy is derived from `guests.table_id`; `guest_count` can transiently
/// exceed `capacity` (soft bound).
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct TableWithGuests {
    pub id: DbId,
    pub name: String,
    pub capacity: i32,
    pub description: Option<String>,
    pub guest_count: i64,
    pub guests: Vec<Guest>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TableWithGuests {
    pub fn from_parts(table: Table, guests: Vec<Guest>) -> Self {
        Self {
            id: table.id,
            name: table.name,
            capacity: table.capacity,
            description: table.description,
            guest_count: guests.len() as i64,
            guests,
            created_at: table.created_at,
            updated_at: table.updated_at,
        }
    }
}

/// A suggested table with its accumulated relationship score, as returned by
/// the suggestion endpoint.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct SuggestedTable {
    pub table: Table,
    pub guest_count: i64,
    /// Sum of relationship strengths connecting the requesting guest to the
    /// table's current occupants.
    pub score: i64,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a table. Capacity defaults to 8.
#[derive(Debug, Clone, Deserialize, Validate, TS)]
#[ts(export)]
pub struct CreateTable {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(range(min = 1, message = "capacity must be positive"))]
    pub capacity: Option<i32>,
    pub description: Option<String>,
}

/// DTO for updating a table.
#[derive(Debug, Clone, Deserialize, Validate, TS)]
#[ts(export)]
pub struct UpdateTable {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[validate(range(min = 1, message = "capacity must be positive"))]
    pub capacity: Option<i32>,
    pub description: Option<String>,
}

/// DTO for seating or unseating a guest. `table_id: null` unseats.
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export)]
pub struct AssignGuest {
    pub guest_id: DbId,
    pub table_id: Option<DbId>,
}
