//! Seating suggestion scoring and occupancy summaries.
//!
//! Pure functions over in-memory snapshots of the relationship list and the
//! current table occupancy. Nothing here performs I/O or mutates its inputs;
//! the API layer materializes the snapshots from the database and maps the
//! results back onto full table rows.

use serde::Serialize;
use ts_rs::TS;

use crate::types::DbId;

/// Maximum number of tables returned by [`suggest_tables`].
pub const MAX_SUGGESTIONS: usize = 3;

// ---------------------------------------------------------------------------
// Snapshot inputs
// ---------------------------------------------------------------------------

/// A relationship edge reduced to what scoring needs.
#[derive(Debug, Clone)]
pub struct RelationshipEdge {
    pub guest_from_id: DbId,
    pub guest_to_id: DbId,
    pub strength: i32,
}

impl RelationshipEdge {
    /// The endpoint opposite `guest_id`, or `None` if the edge does not touch it.
    ///
    /// Edges are directionally stored but symmetric in effect, so either
    /// endpoint may match.
    pub fn other_endpoint(&self, guest_id: DbId) -> Option<DbId> {
        if self.guest_from_id == guest_id {
            Some(self.guest_to_id)
        } else if self.guest_to_id == guest_id {
            Some(self.guest_from_id)
        } else {
            None
        }
    }
}

/// A table's current occupancy snapshot.
#[derive(Debug, Clone)]
pub struct TableOccupancy {
    pub table_id: DbId,
    pub capacity: i32,
    pub occupant_ids: Vec<DbId>,
}

impl TableOccupancy {
    /// Whether the table has no free seat left. Capacity is a soft bound for
    /// manual assignment, but suggestions never point at a full table.
    pub fn is_full(&self) -> bool {
        self.occupant_ids.len() as i64 >= i64::from(self.capacity)
    }

    fn seats(&self, guest_id: DbId) -> bool {
        self.occupant_ids.contains(&guest_id)
    }
}

// ---------------------------------------------------------------------------
// Outputs
// ---------------------------------------------------------------------------

/// A candidate table with its accumulated relationship score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct TableSuggestion {
    pub table_id: DbId,
    /// Sum of the strengths of all edges connecting the guest to occupants
    /// of this table.
    pub score: i64,
}

/// Aggregate seating numbers for the assignment dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct SeatingSummary {
    pub total_tables: i64,
    pub total_capacity: i64,
    pub assigned_guests: i64,
    pub unassigned_guests: i64,
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Rank candidate tables for an unassigned guest by aggregate relationship
/// strength to guests already seated there.
///
/// For every edge touching `guest_id`, the table currently seating the other
/// endpoint (if any, and if not full) accumulates the edge's strength. A
/// table seating several of the guest's connections sums their strengths, so
/// stronger social clusters rank higher. Tables the guest has no connection
/// to never appear; the caller lists generally-available tables separately.
///
/// Results are sorted by score descending, ties broken by ascending table id,
/// and capped at [`MAX_SUGGESTIONS`].
pub fn suggest_tables(
    guest_id: DbId,
    relationships: &[RelationshipEdge],
    tables: &[TableOccupancy],
) -> Vec<TableSuggestion> {
    let mut scores: std::collections::BTreeMap<DbId, i64> = std::collections::BTreeMap::new();

    for edge in relationships {
        let Some(other_id) = edge.other_endpoint(guest_id) else {
            continue;
        };
        let Some(table) = tables.iter().find(|t| t.seats(other_id)) else {
            continue;
        };
        if table.is_full() {
            continue;
        }
        *scores.entry(table.table_id).or_insert(0) += i64::from(edge.strength);
    }

    // BTreeMap iterates in ascending table-id order, so a stable sort on the
    // score alone preserves the id tie-break.
    let mut ranked: Vec<TableSuggestion> = scores
        .into_iter()
        .map(|(table_id, score)| TableSuggestion { table_id, score })
        .collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(MAX_SUGGESTIONS);
    ranked
}

/// Compute aggregate seating numbers over the occupancy snapshot.
///
/// `total_guests` is the number of guests eligible for seating (the caller
/// decides whether declined guests count).
pub fn seating_summary(tables: &[TableOccupancy], total_guests: usize) -> SeatingSummary {
    let assigned: i64 = tables.iter().map(|t| t.occupant_ids.len() as i64).sum();
    SeatingSummary {
        total_tables: tables.len() as i64,
        total_capacity: tables.iter().map(|t| i64::from(t.capacity)).sum(),
        assigned_guests: assigned,
        unassigned_guests: (total_guests as i64 - assigned).max(0),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
