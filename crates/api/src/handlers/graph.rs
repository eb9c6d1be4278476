//! Handler for the relationship graph view.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use banquet_core::graph::{build_graph, GraphEdge, GraphFilter, GuestRef};
use banquet_core::types::DbId;
use banquet_db::repositories::{GuestRepo, RelationshipRepo, TableRepo};
use serde::Deserialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /api/v1/graph`.
#[derive(Debug, Default, Deserialize)]
pub struct GraphParams {
    pub filter: Option<GraphFilter>,
}

/// GET /api/v1/graph
///
/// Node/link structure for the force-graph renderer. Declined guests are
/// excluded; `?filter=family` or `?filter=friends` narrows to guests touching
/// an edge of the matching kind.
pub async fn get_graph(
    State(state): State<AppState>,
    Query(params): Query<GraphParams>,
) -> AppResult<impl IntoResponse> {
    let guests: Vec<GuestRef> = GuestRepo::list(&state.pool, false)
        .await?
        .into_iter()
        .map(|g| GuestRef {
            id: g.id,
            name: format!("{} {}", g.first_name, g.last_name),
            rsvp_status: g.rsvp_status,
            table_id: g.table_id,
        })
        .collect();

    let edges: Vec<GraphEdge> = RelationshipRepo::list_all(&state.pool)
        .await?
        .into_iter()
        .map(|r| GraphEdge {
            guest_from_id: r.guest_from_id,
            guest_to_id: r.guest_to_id,
            kind: r.kind,
            strength: r.strength,
        })
        .collect();

    // Tables in display order drive node group coloring.
    let table_order: Vec<DbId> = TableRepo::list(&state.pool)
        .await?
        .into_iter()
        .map(|t| t.id)
        .collect();

    let graph = build_graph(
        &guests,
        &edges,
        &table_order,
        params.filter.unwrap_or_default(),
    );

    Ok(Json(DataResponse { data: graph }))
}
