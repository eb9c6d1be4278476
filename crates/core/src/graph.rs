//! Relationship graph construction for the visualization view.
//!
//! Builds the node/link structure the front end feeds into its force-graph
//! renderer. Like the seating scorer, this is a pure function over snapshots
//! the caller has already loaded.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::relationship::{is_family_kind, FRIEND_KIND};
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// Which slice of the relationship graph to build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphFilter {
    #[default]
    All,
    /// Guests touching a family-group edge (FAMILY, SIBLING, PARENT, CHILD,
    /// COUSIN, SPOUSE, PARTNER).
    Family,
    /// Guests touching a FRIEND edge.
    Friends,
}

/// Guest fields the graph builder needs.
#[derive(Debug, Clone)]
pub struct GuestRef {
    pub id: DbId,
    pub name: String,
    pub rsvp_status: String,
    pub table_id: Option<DbId>,
}

/// Relationship fields the graph builder needs.
#[derive(Debug, Clone)]
pub struct GraphEdge {
    pub guest_from_id: DbId,
    pub guest_to_id: DbId,
    pub kind: String,
    pub strength: i32,
}

impl GraphEdge {
    fn touches(&self, guest_id: DbId) -> bool {
        self.guest_from_id == guest_id || self.guest_to_id == guest_id
    }

    fn matches_filter(&self, filter: GraphFilter) -> bool {
        match filter {
            GraphFilter::All => true,
            GraphFilter::Family => is_family_kind(&self.kind),
            GraphFilter::Friends => self.kind == FRIEND_KIND,
        }
    }
}

// ---------------------------------------------------------------------------
// Outputs
// ---------------------------------------------------------------------------

/// A guest node in the rendered graph.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct GraphNode {
    pub id: DbId,
    pub name: String,
    pub rsvp_status: String,
    pub table_id: Option<DbId>,
    /// 1-based index of the guest's table in the caller-supplied table order;
    /// 0 when unassigned. Used for node coloring.
    pub group: usize,
    /// Total connection count over the unfiltered edge list, minimum 1.
    /// Drives node size.
    pub val: usize,
}

/// A relationship link in the rendered graph.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct GraphLink {
    pub source: DbId,
    pub target: DbId,
    pub kind: String,
    pub strength: i32,
}

/// The full graph payload.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct RelationshipGraph {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

/// Build the relationship graph over the given guests and edges.
///
/// Nodes are guests surviving the filter; with `Family` or `Friends`, a guest
/// is kept only if at least one edge of the matching kind touches it. Links
/// are the edges whose both endpoints survive, so the rendered graph is
/// always self-contained. `table_order` supplies the table ids in display
/// order for group coloring.
pub fn build_graph(
    guests: &[GuestRef],
    edges: &[GraphEdge],
    table_order: &[DbId],
    filter: GraphFilter,
) -> RelationshipGraph {
    let nodes: Vec<GraphNode> = guests
        .iter()
        .filter(|guest| match filter {
            GraphFilter::All => true,
            _ => edges
                .iter()
                .any(|e| e.touches(guest.id) && e.matches_filter(filter)),
        })
        .map(|guest| {
            let connections = edges.iter().filter(|e| e.touches(guest.id)).count();
            let group = guest
                .table_id
                .and_then(|tid| table_order.iter().position(|t| *t == tid))
                .map(|idx| idx + 1)
                .unwrap_or(0);
            GraphNode {
                id: guest.id,
                name: guest.name.clone(),
                rsvp_status: guest.rsvp_status.clone(),
                table_id: guest.table_id,
                group,
                val: connections.max(1),
            }
        })
        .collect();

    let links: Vec<GraphLink> = edges
        .iter()
        .filter(|e| {
            let from_present = nodes.iter().any(|n| n.id == e.guest_from_id);
            let to_present = nodes.iter().any(|n| n.id == e.guest_to_id);
            from_present && to_present
        })
        .map(|e| GraphLink {
            source: e.guest_from_id,
            target: e.guest_to_id,
            kind: e.kind.clone(),
            strength: e.strength,
        })
        .collect();

    RelationshipGraph { nodes, links }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
