//! Route definitions for seating tables and seating operations.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::tables;
use crate::state::AppState;

/// Table routes mounted at `/tables`.
///
/// ```text
/// GET    /                        -> list_tables (with occupants)
/// POST   /                        -> create_table
/// PUT    /{id}                    -> update_table
/// DELETE /{id}                    -> delete_table
/// POST   /assign                  -> assign_guest (table_id: null unseats)
/// GET    /summary                 -> seating_summary
/// GET    /suggestions/{guest_id}  -> suggest_for_guest
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tables::list_tables).post(tables::create_table))
        .route(
            "/{id}",
            put(tables::update_table).delete(tables::delete_table),
        )
        .route("/assign", post(tables::assign_guest))
        .route("/summary", get(tables::seating_summary))
        .route("/suggestions/{guest_id}", get(tables::suggest_for_guest))
}
