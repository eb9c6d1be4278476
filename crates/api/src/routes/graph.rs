//! Route definition for the relationship graph view.

use axum::routing::get;
use axum::Router;

use crate::handlers::graph;
use crate::state::AppState;

/// Graph route mounted directly under `/api/v1`.
///
/// ```text
/// GET /graph    -> get_graph (?filter=all|family|friends)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/graph", get(graph::get_graph))
}
