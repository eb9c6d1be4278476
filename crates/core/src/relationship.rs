//! Relationship kinds, strength bounds, and edge validation.
//!
//! A relationship is a directionally-stored edge between two distinct guests.
//! For scoring and graph purposes it is symmetric: an edge A -> B counts the
//! same as B -> A.

use crate::types::DbId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Minimum relationship strength (weakest tie).
pub const MIN_STRENGTH: i32 = 1;

/// Maximum relationship strength (closest tie).
pub const MAX_STRENGTH: i32 = 5;

/// Strength used when the caller does not supply one.
pub const DEFAULT_STRENGTH: i32 = 1;

/// All valid relationship kind strings.
pub const VALID_RELATIONSHIP_KINDS: &[&str] = &[
    "FAMILY",
    "FRIEND",
    "COLLEAGUE",
    "PARTNER",
    "SPOUSE",
    "SIBLING",
    "PARENT",
    "CHILD",
    "COUSIN",
    "ACQUAINTANCE",
];

/// Kinds grouped as "family" by the graph view's filter. Spouses and partners
/// are included because the seating UI treats households as family units.
pub const FAMILY_KINDS: &[&str] = &[
    "FAMILY", "SIBLING", "PARENT", "CHILD", "COUSIN", "SPOUSE", "PARTNER",
];

/// The single kind matched by the graph view's "friends" filter.
pub const FRIEND_KIND: &str = "FRIEND";

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate that a relationship kind is one of the allowed values.
pub fn validate_kind(kind: &str) -> Result<(), String> {
    if VALID_RELATIONSHIP_KINDS.contains(&kind) {
        Ok(())
    } else {
        Err(format!(
            "Invalid relationship kind '{kind}'. Must be one of: {}",
            VALID_RELATIONSHIP_KINDS.join(", ")
        ))
    }
}

/// Validate that a strength value lies within `[MIN_STRENGTH, MAX_STRENGTH]`.
pub fn validate_strength(strength: i32) -> Result<(), String> {
    if (MIN_STRENGTH..=MAX_STRENGTH).contains(&strength) {
        Ok(())
    } else {
        Err(format!(
            "Invalid strength {strength}. Must be between {MIN_STRENGTH} and {MAX_STRENGTH}"
        ))
    }
}

/// Validate that an edge connects two distinct guests.
pub fn validate_endpoints(guest_from_id: DbId, guest_to_id: DbId) -> Result<(), String> {
    if guest_from_id == guest_to_id {
        Err("A relationship must connect two different guests".to_string())
    } else {
        Ok(())
    }
}

/// Whether a kind belongs to the family group used by graph filtering.
pub fn is_family_kind(kind: &str) -> bool {
    FAMILY_KINDS.contains(&kind)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
