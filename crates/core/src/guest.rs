//! Guest-level constants and validation.
//!
//! RSVP statuses are stored as uppercase strings in the database; the API
//! layer validates incoming values against [`VALID_RSVP_STATUSES`] before
//! writing them.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const RSVP_PENDING: &str = "PENDING";
pub const RSVP_ACCEPTED: &str = "ACCEPTED";
pub const RSVP_DECLINED: &str = "DECLINED";
pub const RSVP_MAYBE: &str = "MAYBE";

/// All valid RSVP status strings.
pub const VALID_RSVP_STATUSES: &[&str] =
    &[RSVP_PENDING, RSVP_ACCEPTED, RSVP_DECLINED, RSVP_MAYBE];

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// A guest's response state to the event invitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RsvpStatus {
    Pending,
    Accepted,
    Declined,
    Maybe,
}

impl RsvpStatus {
    /// Convert from a database string value.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            RSVP_PENDING => Ok(Self::Pending),
            RSVP_ACCEPTED => Ok(Self::Accepted),
            RSVP_DECLINED => Ok(Self::Declined),
            RSVP_MAYBE => Ok(Self::Maybe),
            _ => Err(format!(
                "Invalid RSVP status '{s}'. Must be one of: {}",
                VALID_RSVP_STATUSES.join(", ")
            )),
        }
    }

    /// Convert to the database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => RSVP_PENDING,
            Self::Accepted => RSVP_ACCEPTED,
            Self::Declined => RSVP_DECLINED,
            Self::Maybe => RSVP_MAYBE,
        }
    }
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate that an RSVP status string is one of the allowed values.
pub fn validate_rsvp_status(status: &str) -> Result<(), String> {
    if VALID_RSVP_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(format!(
            "Invalid RSVP status '{status}'. Must be one of: {}",
            VALID_RSVP_STATUSES.join(", ")
        ))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
