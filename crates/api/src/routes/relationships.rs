//! Route definitions for relationship edges.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::relationships;
use crate::state::AppState;

/// Relationship routes mounted at `/relationships`.
///
/// ```text
/// GET    /        -> list_relationships
/// POST   /        -> create_relationship
/// DELETE /{id}    -> delete_relationship
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(relationships::list_relationships).post(relationships::create_relationship),
        )
        .route("/{id}", delete(relationships::delete_relationship))
}
