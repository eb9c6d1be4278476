//! Repository for the `tables` table (seating tables).

use banquet_core::types::DbId;
use sqlx::PgPool;

use crate::models::table::{CreateTable, Table, TableWithGuests, UpdateTable};
use crate::repositories::GuestRepo;

/// Column list shared across queries.
const COLUMNS: &str = "id, name, capacity, description, created_at, updated_at";

/// Capacity used when the caller does not supply one.
const DEFAULT_CAPACITY: i32 = 8;

/// Provides CRUD operations for seating tables.
pub struct TableRepo;

impl TableRepo {
    /// Insert a new table, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTable) -> Result<Table, sqlx::Error> {
        let query = format!(
            "INSERT INTO tables (name, capacity, description)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Table>(&query)
            .bind(&input.name)
            .bind(input.capacity.unwrap_or(DEFAULT_CAPACITY))
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a table by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Table>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tables WHERE id = $1");
        sqlx::query_as::<_, Table>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all tables ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Table>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tables ORDER BY name ASC");
        sqlx::query_as::<_, Table>(&query).fetch_all(pool).await
    }

    /// List all tables with their current occupants, ordered by name.
    ///
    /// Two queries (tables, seated guests) grouped in memory; the guest list
    /// is small by design.
    pub async fn list_with_guests(pool: &PgPool) -> Result<Vec<TableWithGuests>, sqlx::Error> {
        let tables = Self::list(pool).await?;
        let seated = GuestRepo::list_seated(pool).await?;

        let mut result = Vec::with_capacity(tables.len());
        for table in tables {
            let occupants: Vec<_> = seated
                .iter()
                .filter(|g| g.table_id == Some(table.id))
                .cloned()
                .collect();
            result.push(TableWithGuests::from_parts(table, occupants));
        }
        Ok(result)
    }

    /// Partially update a table. Absent fields keep their current value.
    ///
    /// Returns `None` if no table with the given ID exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTable,
    ) -> Result<Option<Table>, sqlx::Error> {
        let query = format!(
            "UPDATE tables SET
                 name = COALESCE($2, name),
                 capacity = COALESCE($3, capacity),
                 description = COALESCE($4, description),
                 updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Table>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.capacity)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a table. Returns whether a row was removed.
    ///
    /// Seated guests are unseated by the schema's `ON DELETE SET NULL`.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tables WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Current occupant count for one table.
    pub async fn occupant_count(pool: &PgPool, table_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM guests WHERE table_id = $1")
            .bind(table_id)
            .fetch_one(pool)
            .await
    }
}
