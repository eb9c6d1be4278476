//! Handlers for seating tables, guest assignment, suggestions, and the
//! seating summary.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use banquet_core::error::CoreError;
use banquet_core::seating::{self, RelationshipEdge, TableOccupancy};
use banquet_core::types::DbId;
use banquet_db::models::table::{AssignGuest, CreateTable, SuggestedTable, Table, UpdateTable};
use banquet_db::repositories::{GuestRepo, RelationshipRepo, TableRepo};
use sqlx::PgPool;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/tables
///
/// List all tables with their current occupants.
pub async fn list_tables(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let tables = TableRepo::list_with_guests(&state.pool).await?;

    Ok(Json(DataResponse { data: tables }))
}

/// POST /api/v1/tables
///
/// Create a table. Capacity defaults to 8.
pub async fn create_table(
    State(state): State<AppState>,
    Json(input): Json<CreateTable>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let table = TableRepo::create(&state.pool, &input).await?;

    tracing::info!(table_id = table.id, "Table created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: table })))
}

/// PUT /api/v1/tables/{id}
pub async fn update_table(
    State(state): State<AppState>,
    Path(table_id): Path<DbId>,
    Json(input): Json<UpdateTable>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let table = TableRepo::update(&state.pool, table_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Table",
            id: table_id,
        }))?;

    Ok(Json(DataResponse { data: table }))
}

/// DELETE /api/v1/tables/{id}
///
/// Delete a table. Seated guests are unseated, not deleted.
pub async fn delete_table(
    State(state): State<AppState>,
    Path(table_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = TableRepo::delete(&state.pool, table_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Table",
            id: table_id,
        }));
    }

    tracing::info!(table_id, "Table deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/tables/assign
///
/// Seat a guest at a table, or unseat with `table_id: null`. Capacity is a
/// soft bound; over-filling is allowed here and surfaced in the UI.
pub async fn assign_guest(
    State(state): State<AppState>,
    Json(input): Json<AssignGuest>,
) -> AppResult<impl IntoResponse> {
    let target = match input.table_id {
        Some(table_id) => Some(
            TableRepo::find_by_id(&state.pool, table_id)
                .await?
                .ok_or(AppError::Core(CoreError::NotFound {
                    entity: "Table",
                    id: table_id,
                }))?,
        ),
        None => None,
    };

    let guest = GuestRepo::assign_table(&state.pool, input.guest_id, input.table_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Guest",
            id: input.guest_id,
        }))?;

    if let Some(table) = &target {
        let occupants = TableRepo::occupant_count(&state.pool, table.id).await?;
        if occupants > i64::from(table.capacity) {
            tracing::warn!(
                table_id = table.id,
                occupants,
                capacity = table.capacity,
                "Table is over capacity"
            );
        }
    }

    tracing::info!(
        guest_id = guest.id,
        table_id = ?guest.table_id,
        "Guest seating changed"
    );

    Ok(Json(DataResponse { data: guest }))
}

/// GET /api/v1/tables/suggestions/{guest_id}
///
/// Rank up to three non-full tables by aggregate relationship strength to
/// the guest's connections already seated there.
pub async fn suggest_for_guest(
    State(state): State<AppState>,
    Path(guest_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    GuestRepo::find_by_id(&state.pool, guest_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Guest",
            id: guest_id,
        }))?;

    let edges: Vec<RelationshipEdge> = RelationshipRepo::list_all(&state.pool)
        .await?
        .into_iter()
        .map(|r| RelationshipEdge {
            guest_from_id: r.guest_from_id,
            guest_to_id: r.guest_to_id,
            strength: r.strength,
        })
        .collect();

    let (tables, occupancy) = occupancy_snapshot(&state.pool).await?;

    let suggestions = seating::suggest_tables(guest_id, &edges, &occupancy);

    // Map scores back onto full table rows for the front end.
    let data: Vec<SuggestedTable> = suggestions
        .into_iter()
        .filter_map(|s| {
            let table = tables.iter().find(|t| t.id == s.table_id)?.clone();
            let guest_count = occupancy
                .iter()
                .find(|o| o.table_id == s.table_id)
                .map(|o| o.occupant_ids.len() as i64)
                .unwrap_or(0);
            Some(SuggestedTable {
                table,
                guest_count,
                score: s.score,
            })
        })
        .collect();

    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/tables/summary
///
/// Aggregate seating numbers. Declined guests count in neither bucket, even
/// if they still hold a seat from before they declined.
pub async fn seating_summary(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let tables = TableRepo::list(&state.pool).await?;
    let eligible = GuestRepo::list(&state.pool, false).await?;

    let occupancy: Vec<TableOccupancy> = tables
        .iter()
        .map(|t| TableOccupancy {
            table_id: t.id,
            capacity: t.capacity,
            occupant_ids: eligible
                .iter()
                .filter(|g| g.table_id == Some(t.id))
                .map(|g| g.id)
                .collect(),
        })
        .collect();

    let summary = seating::seating_summary(&occupancy, eligible.len());

    Ok(Json(DataResponse { data: summary }))
}

/// Load all tables and derive their occupancy snapshots from seated guests.
async fn occupancy_snapshot(
    pool: &PgPool,
) -> Result<(Vec<Table>, Vec<TableOccupancy>), sqlx::Error> {
    let tables = TableRepo::list(pool).await?;
    let seated = GuestRepo::list_seated(pool).await?;

    let occupancy = tables
        .iter()
        .map(|t| TableOccupancy {
            table_id: t.id,
            capacity: t.capacity,
            occupant_ids: seated
                .iter()
                .filter(|g| g.table_id == Some(t.id))
                .map(|g| g.id)
                .collect(),
        })
        .collect();

    Ok((tables, occupancy))
}
