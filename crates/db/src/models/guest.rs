//! Guest models and DTOs.

use banquet_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ts_rs::TS;
use validator::Validate;

use crate::models::relationship::RelationshipWithGuests;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `guests` table.
#[derive(Debug, Clone, FromRow, Serialize, TS)]
#[ts(export)]
pub struct Guest {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub rsvp_status: String,
    pub dietary_restrictions: Option<String>,
    pub plus_one: bool,
    pub notes: Option<String>,
    pub table_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Guest {
    /// Display name as shown throughout the UI.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Guest row joined with its table name, for list views.
#[derive(Debug, Clone, FromRow, Serialize, TS)]
#[ts(export)]
pub struct GuestWithTable {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub rsvp_status: String,
    pub dietary_restrictions: Option<String>,
    pub plus_one: bool,
    pub notes: Option<String>,
    pub table_id: Option<DbId>,
    pub table_name: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Guest detail: the guest plus every relationship edge touching it.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct GuestDetail {
    pub guest: GuestWithTable,
    pub relationships: Vec<RelationshipWithGuests>,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a guest.
///
/// `rsvp_status` defaults to `PENDING` and is validated against
/// `banquet_core::guest::VALID_RSVP_STATUSES` in the handler.
#[derive(Debug, Clone, Deserialize, Validate, TS)]
#[ts(export)]
pub struct CreateGuest {
    #[validate(length(min = 1, message = "first_name must not be empty"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "last_name must not be empty"))]
    pub last_name: String,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub rsvp_status: Option<String>,
    pub dietary_restrictions: Option<String>,
    #[serde(default)]
    pub plus_one: bool,
    pub notes: Option<String>,
    pub table_id: Option<DbId>,
}

/// DTO for updating a guest. Table changes go through the assignment
/// endpoint, so `table_id` is deliberately absent here.
#[derive(Debug, Clone, Deserialize, Validate, TS)]
#[ts(export)]
pub struct UpdateGuest {
    #[validate(length(min = 1, message = "first_name must not be empty"))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, message = "last_name must not be empty"))]
    pub last_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub rsvp_status: Option<String>,
    pub dietary_restrictions: Option<String>,
    pub plus_one: Option<bool>,
    pub notes: Option<String>,
}

/// Query parameters for `GET /api/v1/guests`.
#[derive(Debug, Clone, Deserialize)]
pub struct GuestListParams {
    /// Include guests with RSVP status DECLINED. Defaults to true.
    pub include_declined: Option<bool>,
}
