//! Handlers for relationship edges between guests.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use banquet_core::error::CoreError;
use banquet_core::relationship::{validate_endpoints, validate_kind, validate_strength};
use banquet_core::types::DbId;
use banquet_db::models::relationship::CreateRelationship;
use banquet_db::repositories::RelationshipRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/relationships
///
/// List every edge with both endpoint guest names.
pub async fn list_relationships(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let relationships = RelationshipRepo::list_all(&state.pool).await?;

    Ok(Json(DataResponse {
        data: relationships,
    }))
}

/// POST /api/v1/relationships
///
/// Create an edge. Strength defaults to 1; a duplicate pair returns 409 and
/// an unknown guest id returns 400.
pub async fn create_relationship(
    State(state): State<AppState>,
    Json(input): Json<CreateRelationship>,
) -> AppResult<impl IntoResponse> {
    validate_endpoints(input.guest_from_id, input.guest_to_id).map_err(CoreError::Validation)?;
    validate_kind(&input.kind).map_err(CoreError::Validation)?;
    if let Some(strength) = input.strength {
        validate_strength(strength).map_err(CoreError::Validation)?;
    }

    let relationship = RelationshipRepo::create(&state.pool, &input).await?;

    tracing::info!(
        relationship_id = relationship.id,
        guest_from_id = relationship.guest_from_id,
        guest_to_id = relationship.guest_to_id,
        "Relationship created"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse { data: relationship }),
    ))
}

/// DELETE /api/v1/relationships/{id}
pub async fn delete_relationship(
    State(state): State<AppState>,
    Path(relationship_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = RelationshipRepo::delete(&state.pool, relationship_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Relationship",
            id: relationship_id,
        }));
    }

    Ok(StatusCode::NO_CONTENT)
}
