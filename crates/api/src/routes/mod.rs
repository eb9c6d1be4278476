pub mod graph;
pub mod guests;
pub mod health;
pub mod photos;
pub mod relationships;
pub mod tables;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /guests                           list, create
/// /guests/{id}                      detail, update, delete
///
/// /relationships                    list, create
/// /relationships/{id}               delete
///
/// /tables                           list (with occupants), create
/// /tables/{id}                      update, delete
/// /tables/assign                    seat or unseat a guest (POST)
/// /tables/summary                   aggregate seating numbers (GET)
/// /tables/suggestions/{guest_id}    ranked table suggestions (GET)
///
/// /graph                            relationship graph, ?filter=all|family|friends
///
/// /photos                           list, ?hide_assigned=true
/// /photos/scan                      import new files from the photos dir (POST)
/// /photos/{id}/guests               replace assignment set (PUT)
/// /photos/{id}/guests/{guest_id}    remove one assignment (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/guests", guests::router())
        .nest("/relationships", relationships::router())
        .nest("/tables", tables::router())
        .nest("/photos", photos::router())
        .merge(graph::router())
}
