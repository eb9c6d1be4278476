//! Handlers for photo listing, the directory scan, and guest tagging.

use std::path::Path as FsPath;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use banquet_core::error::CoreError;
use banquet_core::photos::{is_image_file, mime_type_for};
use banquet_core::types::DbId;
use banquet_db::models::photo::{
    AssignGuestsRequest, CreatePhoto, Photo, PhotoListParams, PhotoWithGuests, ScanRequest,
};
use banquet_db::repositories::PhotoRepo;
use serde::Serialize;
use sqlx::PgPool;
use ts_rs::TS;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Result of a directory scan.
#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct ScanSummary {
    /// Photos newly registered by this scan.
    pub imported: Vec<Photo>,
    /// Image files that were already registered.
    pub skipped: usize,
}

/// GET /api/v1/photos
///
/// List photos with their assigned guests. Pass `hide_assigned=true` to show
/// only untagged photos.
pub async fn list_photos(
    State(state): State<AppState>,
    Query(params): Query<PhotoListParams>,
) -> AppResult<impl IntoResponse> {
    let photos = PhotoRepo::list(&state.pool, params.hide_assigned).await?;
    let data = with_guests(&state.pool, photos).await?;

    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/photos/scan
///
/// Walk the photos directory and register every image file not yet known.
/// Re-scanning is idempotent: known file names are skipped. An optional
/// `directory` in the body selects a subdirectory of the configured photo
/// library; paths outside the library are rejected.
pub async fn scan_photos(
    State(state): State<AppState>,
    body: Option<Json<ScanRequest>>,
) -> AppResult<impl IntoResponse> {
    let request = body.map(|Json(r)| r).unwrap_or_default();

    let library_root = tokio::fs::canonicalize(&state.config.photos_dir)
        .await
        .map_err(|e| {
            AppError::BadRequest(format!(
                "Cannot read photos directory '{}': {e}",
                state.config.photos_dir.display()
            ))
        })?;

    let directory = match request.directory {
        Some(dir) => {
            // Canonicalize before the containment check so `..` segments and
            // symlinks cannot escape the library root.
            let requested = tokio::fs::canonicalize(&dir).await.map_err(|e| {
                AppError::BadRequest(format!("Cannot read photos directory '{dir}': {e}"))
            })?;
            if !requested.starts_with(&library_root) {
                return Err(AppError::BadRequest(format!(
                    "Directory '{dir}' is outside the photo library"
                )));
            }
            requested
        }
        None => library_root,
    };

    let mut entries = tokio::fs::read_dir(&directory).await.map_err(|e| {
        AppError::BadRequest(format!(
            "Cannot read photos directory '{}': {e}",
            directory.display()
        ))
    })?;

    let mut imported = Vec::new();
    let mut skipped = 0;

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| AppError::InternalError(format!("Directory scan failed: {e}")))?
    {
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if !is_image_file(&file_name) {
            continue;
        }

        let metadata = match entry.metadata().await {
            Ok(m) if m.is_file() => m,
            _ => continue,
        };

        let input = build_photo_record(&entry.path(), &file_name, metadata.len());
        match PhotoRepo::insert_if_new(&state.pool, &input).await? {
            Some(photo) => imported.push(photo),
            None => skipped += 1,
        }
    }

    tracing::info!(
        imported = imported.len(),
        skipped,
        directory = %directory.display(),
        "Photo scan complete"
    );

    Ok(Json(DataResponse {
        data: ScanSummary { imported, skipped },
    }))
}

/// PUT /api/v1/photos/{id}/guests
///
/// Replace the photo's full guest assignment set.
pub async fn assign_guests(
    State(state): State<AppState>,
    Path(photo_id): Path<DbId>,
    Json(input): Json<AssignGuestsRequest>,
) -> AppResult<impl IntoResponse> {
    let photo = PhotoRepo::find_by_id(&state.pool, photo_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Photo",
            id: photo_id,
        }))?;

    PhotoRepo::replace_assignments(&state.pool, photo_id, &input.guest_ids).await?;

    let mut data = with_guests(&state.pool, vec![photo]).await?;
    // with_guests preserves its input; exactly one entry comes back.
    let photo_with_guests = data
        .pop()
        .ok_or_else(|| AppError::InternalError("Assignment lookup returned nothing".into()))?;

    Ok(Json(DataResponse {
        data: photo_with_guests,
    }))
}

/// DELETE /api/v1/photos/{id}/guests/{guest_id}
///
/// Remove one guest assignment from a photo.
pub async fn remove_guest(
    State(state): State<AppState>,
    Path((photo_id, guest_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    PhotoRepo::find_by_id(&state.pool, photo_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Photo",
            id: photo_id,
        }))?;

    let removed = PhotoRepo::remove_assignment(&state.pool, photo_id, guest_id).await?;

    if !removed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Photo assignment",
            id: guest_id,
        }));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Build the insert payload for one scanned file.
///
/// Dimensions come from a header-only read and are left empty for formats
/// the decoder does not handle (e.g. HEIC).
fn build_photo_record(path: &FsPath, file_name: &str, file_size: u64) -> CreatePhoto {
    let dimensions = image::image_dimensions(path).ok();

    CreatePhoto {
        file_name: file_name.to_string(),
        original_name: file_name.to_string(),
        file_path: format!("/photos/{file_name}"),
        file_size: file_size as i64,
        mime_type: mime_type_for(file_name).to_string(),
        width: dimensions.map(|(w, _)| w as i32),
        height: dimensions.map(|(_, h)| h as i32),
    }
}

/// Attach assigned guests to each photo.
async fn with_guests(
    pool: &PgPool,
    photos: Vec<Photo>,
) -> Result<Vec<PhotoWithGuests>, sqlx::Error> {
    let photo_ids: Vec<DbId> = photos.iter().map(|p| p.id).collect();
    let assignments = PhotoRepo::guests_for_photos(pool, &photo_ids).await?;

    let mut result = Vec::with_capacity(photos.len());
    for photo in photos {
        let guests = assignments
            .iter()
            .filter(|a| a.photo_id == photo.id)
            .cloned()
            .map(|a| a.into_guest())
            .collect();
        result.push(PhotoWithGuests { photo, guests });
    }
    Ok(result)
}
