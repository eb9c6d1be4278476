//! Route definitions for photos and guest tagging.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::photos;
use crate::state::AppState;

/// Photo routes mounted at `/photos`.
///
/// ```text
/// GET    /                          -> list_photos (?hide_assigned=true)
/// POST   /scan                      -> scan_photos
/// PUT    /{id}/guests               -> assign_guests (replace set)
/// DELETE /{id}/guests/{guest_id}    -> remove_guest
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(photos::list_photos))
        .route("/scan", post(photos::scan_photos))
        .route("/{id}/guests", put(photos::assign_guests))
        .route("/{id}/guests/{guest_id}", delete(photos::remove_guest))
}
