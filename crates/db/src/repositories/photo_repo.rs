//! Repository for the `photos` and `photo_assignments` tables.

use banquet_core::types::DbId;
use sqlx::PgPool;

use crate::models::photo::{CreatePhoto, Photo, PhotoAssignmentGuest};

/// Column list shared across `photos` queries.
const COLUMNS: &str = "id, file_name, original_name, file_path, file_size, \
    mime_type, width, height, created_at, updated_at";

/// Provides photo CRUD and guest-assignment operations.
pub struct PhotoRepo;

impl PhotoRepo {
    /// Insert a photo record unless one with the same file name exists.
    ///
    /// Returns `None` when the file name was already registered, so the
    /// directory scan is idempotent.
    pub async fn insert_if_new(
        pool: &PgPool,
        input: &CreatePhoto,
    ) -> Result<Option<Photo>, sqlx::Error> {
        let query = format!(
            "INSERT INTO photos
                (file_name, original_name, file_path, file_size, mime_type, width, height)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             ON CONFLICT (file_name) DO NOTHING
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Photo>(&query)
            .bind(&input.file_name)
            .bind(&input.original_name)
            .bind(&input.file_path)
            .bind(input.file_size)
            .bind(&input.mime_type)
            .bind(input.width)
            .bind(input.height)
            .fetch_optional(pool)
            .await
    }

    /// Find a photo by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Photo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM photos WHERE id = $1");
        sqlx::query_as::<_, Photo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List photos ordered by file name.
    ///
    /// With `hide_assigned = true`, photos that already have at least one
    /// guest assignment are excluded (the tagging workflow only wants
    /// untagged photos).
    pub async fn list(pool: &PgPool, hide_assigned: bool) -> Result<Vec<Photo>, sqlx::Error> {
        let filter = if hide_assigned {
            "WHERE NOT EXISTS \
                (SELECT 1 FROM photo_assignments pa WHERE pa.photo_id = photos.id)"
        } else {
            ""
        };
        let query = format!(
            "SELECT {COLUMNS} FROM photos
             {filter}
             ORDER BY file_name ASC"
        );
        sqlx::query_as::<_, Photo>(&query).fetch_all(pool).await
    }

    /// Assigned guests for a set of photos, joined with the guest rows.
    pub async fn guests_for_photos(
        pool: &PgPool,
        photo_ids: &[DbId],
    ) -> Result<Vec<PhotoAssignmentGuest>, sqlx::Error> {
        sqlx::query_as::<_, PhotoAssignmentGuest>(
            "SELECT pa.photo_id, g.id, g.first_name, g.last_name, g.email, g.phone, \
                    g.address, g.rsvp_status, g.dietary_restrictions, g.plus_one, \
                    g.notes, g.table_id, g.created_at, g.updated_at \
             FROM photo_assignments pa \
             JOIN guests g ON g.id = pa.guest_id \
             WHERE pa.photo_id = ANY($1) \
             ORDER BY pa.photo_id ASC, g.last_name ASC, g.first_name ASC",
        )
        .bind(photo_ids)
        .fetch_all(pool)
        .await
    }

    /// Replace a photo's entire guest assignment set.
    ///
    /// Runs in a transaction: delete existing assignments, then insert the
    /// new set.
    pub async fn replace_assignments(
        pool: &PgPool,
        photo_id: DbId,
        guest_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM photo_assignments WHERE photo_id = $1")
            .bind(photo_id)
            .execute(&mut *tx)
            .await?;

        for guest_id in guest_ids {
            sqlx::query("INSERT INTO photo_assignments (photo_id, guest_id) VALUES ($1, $2)")
                .bind(photo_id)
                .bind(guest_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await
    }

    /// Remove a single guest assignment. Returns whether a row was removed.
    pub async fn remove_assignment(
        pool: &PgPool,
        photo_id: DbId,
        guest_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM photo_assignments WHERE photo_id = $1 AND guest_id = $2")
                .bind(photo_id)
                .bind(guest_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
