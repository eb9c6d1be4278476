//! Repository for the `guests` table.

use banquet_core::types::DbId;
use sqlx::PgPool;

use crate::models::guest::{CreateGuest, Guest, GuestWithTable, UpdateGuest};

/// Column list shared across plain `guests` queries.
const COLUMNS: &str = "id, first_name, last_name, email, phone, address, \
    rsvp_status, dietary_restrictions, plus_one, notes, table_id, \
    created_at, updated_at";

/// Column list for queries joining the table name.
const JOINED_COLUMNS: &str = "g.id, g.first_name, g.last_name, g.email, g.phone, \
    g.address, g.rsvp_status, g.dietary_restrictions, g.plus_one, g.notes, \
    g.table_id, t.name AS table_name, g.created_at, g.updated_at";

/// Provides CRUD operations for guests.
pub struct GuestRepo;

impl GuestRepo {
    /// Insert a new guest, returning the created row.
    ///
    /// `rsvp_status` defaults to `'PENDING'` when absent.
    pub async fn create(pool: &PgPool, input: &CreateGuest) -> Result<Guest, sqlx::Error> {
        let query = format!(
            "INSERT INTO guests
                (first_name, last_name, email, phone, address, rsvp_status,
                 dietary_restrictions, plus_one, notes, table_id)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 'PENDING'), $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Guest>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.address)
            .bind(&input.rsvp_status)
            .bind(&input.dietary_restrictions)
            .bind(input.plus_one)
            .bind(&input.notes)
            .bind(input.table_id)
            .fetch_one(pool)
            .await
    }

    /// Find a guest by its ID, with the joined table name.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<GuestWithTable>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM guests g
             LEFT JOIN tables t ON t.id = g.table_id
             WHERE g.id = $1"
        );
        sqlx::query_as::<_, GuestWithTable>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all guests ordered by last name, then first name.
    ///
    /// With `include_declined = false`, guests whose RSVP status is
    /// `DECLINED` are filtered out (the seating and graph views never want
    /// them).
    pub async fn list(
        pool: &PgPool,
        include_declined: bool,
    ) -> Result<Vec<GuestWithTable>, sqlx::Error> {
        let filter = if include_declined {
            ""
        } else {
            "WHERE g.rsvp_status <> 'DECLINED'"
        };
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM guests g
             LEFT JOIN tables t ON t.id = g.table_id
             {filter}
             ORDER BY g.last_name ASC, g.first_name ASC"
        );
        sqlx::query_as::<_, GuestWithTable>(&query)
            .fetch_all(pool)
            .await
    }

    /// Partially update a guest. Absent fields keep their current value.
    ///
    /// Returns `None` if no guest with the given ID exists. Table changes go
    /// through [`GuestRepo::assign_table`].
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGuest,
    ) -> Result<Option<Guest>, sqlx::Error> {
        let query = format!(
            "UPDATE guests SET
                 first_name = COALESCE($2, first_name),
                 last_name = COALESCE($3, last_name),
                 email = COALESCE($4, email),
                 phone = COALESCE($5, phone),
                 address = COALESCE($6, address),
                 rsvp_status = COALESCE($7, rsvp_status),
                 dietary_restrictions = COALESCE($8, dietary_restrictions),
                 plus_one = COALESCE($9, plus_one),
                 notes = COALESCE($10, notes),
                 updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Guest>(&query)
            .bind(id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.address)
            .bind(&input.rsvp_status)
            .bind(&input.dietary_restrictions)
            .bind(input.plus_one)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Seat the guest at a table, or unseat with `table_id = None`.
    ///
    /// Returns `None` if no guest with the given ID exists. Capacity is not
    /// enforced here (soft bound).
    pub async fn assign_table(
        pool: &PgPool,
        guest_id: DbId,
        table_id: Option<DbId>,
    ) -> Result<Option<Guest>, sqlx::Error> {
        let query = format!(
            "UPDATE guests SET table_id = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Guest>(&query)
            .bind(guest_id)
            .bind(table_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a guest. Returns whether a row was removed.
    ///
    /// Relationship edges and photo assignments cascade in the schema.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM guests WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List the guests currently seated at any table, ordered by name.
    /// Used to build occupancy snapshots for the scorer and the table view.
    pub async fn list_seated(pool: &PgPool) -> Result<Vec<Guest>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM guests
             WHERE table_id IS NOT NULL
             ORDER BY last_name ASC, first_name ASC"
        );
        sqlx::query_as::<_, Guest>(&query).fetch_all(pool).await
    }
}
