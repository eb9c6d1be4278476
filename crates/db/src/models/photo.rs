//! Photo and photo-assignment models and DTOs.

use banquet_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ts_rs::TS;

use crate::models::guest::Guest;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `photos` table.
#[derive(Debug, Clone, FromRow, Serialize, TS)]
#[ts(export)]
pub struct Photo {
    pub id: DbId,
    /// Unique on-disk file name within the photos directory.
    pub file_name: String,
    pub original_name: String,
    /// Path the front end uses to load the image (relative to the public root).
    pub file_path: String,
    pub file_size: i64,
    pub mime_type: String,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Photo plus its currently assigned guests.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct PhotoWithGuests {
    pub photo: Photo,
    pub guests: Vec<Guest>,
}

/// Row shape for the assignments-join query: one assigned guest together
/// with the photo it belongs to.
#[derive(Debug, Clone, FromRow)]
pub struct PhotoAssignmentGuest {
    pub photo_id: DbId,
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

impl PhotoAssignmentGuest {
    pub fn into_guest(self) -> Guest {
        Guest {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            address: self.address,
            rsvp_status: self.rsvp_status,
            dietary_restrictions: self.dietary_restrictions,
            plus_one: self.plus_one,
            notes: self.notes,
            table_id: self.table_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// Insert payload produced by the directory scan.
#[derive(Debug, Clone)]
pub struct CreatePhoto {
    pub file_name: String,
    pub original_name: String,
    pub file_path: String,
    pub file_size: i64,
    pub mime_type: String,
    pub width: Option<i32>,
    pub height: Option<i32>,
}

/// DTO for replacing a photo's full guest assignment set.
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export)]
pub struct AssignGuestsRequest {
    pub guest_ids: Vec<DbId>,
}

/// DTO for `POST /api/v1/photos/scan`. Defaults to the configured photos
/// directory when `directory` is absent.
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export)]
pub struct ScanRequest {
    pub directory: Option<String>,
}

/// Query parameters for `GET /api/v1/photos`.
#[derive(Debug, Clone, Deserialize)]
pub struct PhotoListParams {
    /// Hide photos that already have at least one guest assigned.
    #[serde(default)]
    pub hide_assigned: bool,
}
