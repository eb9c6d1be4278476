//! Handlers for guest CRUD and the guest detail view.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use banquet_core::error::CoreError;
use banquet_core::guest::validate_rsvp_status;
use banquet_core::types::DbId;
use banquet_db::models::guest::{CreateGuest, GuestDetail, GuestListParams, UpdateGuest};
use banquet_db::repositories::{GuestRepo, RelationshipRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/guests
///
/// List all guests with their table names. Pass `include_declined=false` to
/// drop guests whose RSVP status is DECLINED.
pub async fn list_guests(
    State(state): State<AppState>,
    Query(params): Query<GuestListParams>,
) -> AppResult<impl IntoResponse> {
    let guests = GuestRepo::list(&state.pool, params.include_declined.unwrap_or(true)).await?;

    Ok(Json(DataResponse { data: guests }))
}

/// POST /api/v1/guests
///
/// Create a guest. RSVP status defaults to PENDING.
pub async fn create_guest(
    State(state): State<AppState>,
    Json(input): Json<CreateGuest>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    if let Some(status) = &input.rsvp_status {
        validate_rsvp_status(status).map_err(CoreError::Validation)?;
    }

    let guest = GuestRepo::create(&state.pool, &input).await?;

    tracing::info!(guest_id = guest.id, "Guest created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: guest })))
}

/// GET /api/v1/guests/{id}
///
/// Guest detail: the guest plus every relationship edge touching it.
pub async fn get_guest(
    State(state): State<AppState>,
    Path(guest_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let guest = GuestRepo::find_by_id(&state.pool, guest_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Guest",
            id: guest_id,
        }))?;

    let relationships = RelationshipRepo::list_for_guest(&state.pool, guest_id).await?;

    Ok(Json(DataResponse {
        data: GuestDetail {
            guest,
            relationships,
        },
    }))
}

/// PUT /api/v1/guests/{id}
///
/// Partially update a guest. Absent fields keep their current value; table
/// changes go through `POST /tables/assign`.
pub async fn update_guest(
    State(state): State<AppState>,
    Path(guest_id): Path<DbId>,
    Json(input): Json<UpdateGuest>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    if let Some(status) = &input.rsvp_status {
        validate_rsvp_status(status).map_err(CoreError::Validation)?;
    }

    let guest = GuestRepo::update(&state.pool, guest_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Guest",
            id: guest_id,
        }))?;

    Ok(Json(DataResponse { data: guest }))
}

/// DELETE /api/v1/guests/{id}
///
/// Delete a guest. Relationship edges and photo assignments cascade.
pub async fn delete_guest(
    State(state): State<AppState>,
    Path(guest_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = GuestRepo::delete(&state.pool, guest_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Guest",
            id: guest_id,
        }));
    }

    tracing::info!(guest_id, "Guest deleted");

    Ok(StatusCode::NO_CONTENT)
}
