//! Repository for the `relationships` table.

use banquet_core::relationship::DEFAULT_STRENGTH;
use banquet_core::types::DbId;
use sqlx::PgPool;

use crate::models::relationship::{CreateRelationship, Relationship, RelationshipWithGuests};

/// Column list shared across plain `relationships` queries.
const COLUMNS: &str =
    "id, guest_from_id, guest_to_id, kind, strength, notes, created_at, updated_at";

/// Column list for queries joining both endpoint guest names.
const JOINED_COLUMNS: &str = "r.id, r.guest_from_id, r.guest_to_id, r.kind, r.strength, \
    r.notes, \
    gf.first_name || ' ' || gf.last_name AS guest_from_name, \
    gt.first_name || ' ' || gt.last_name AS guest_to_name, \
    r.created_at, r.updated_at";

/// Provides CRUD operations for relationship edges.
pub struct RelationshipRepo;

impl RelationshipRepo {
    /// Insert a new relationship edge, returning the created row.
    ///
    /// Duplicate ordered pairs violate `uq_relationships_pair` and surface as
    /// a conflict to the caller.
    pub async fn create(
        pool: &PgPool,
        input: &CreateRelationship,
    ) -> Result<Relationship, sqlx::Error> {
        let query = format!(
            "INSERT INTO relationships (guest_from_id, guest_to_id, kind, strength, notes)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Relationship>(&query)
            .bind(input.guest_from_id)
            .bind(input.guest_to_id)
            .bind(&input.kind)
            .bind(input.strength.unwrap_or(DEFAULT_STRENGTH))
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// List every relationship edge with both endpoint guest names.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<RelationshipWithGuests>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM relationships r
             JOIN guests gf ON gf.id = r.guest_from_id
             JOIN guests gt ON gt.id = r.guest_to_id
             ORDER BY r.id ASC"
        );
        sqlx::query_as::<_, RelationshipWithGuests>(&query)
            .fetch_all(pool)
            .await
    }

    /// List the edges touching a given guest, from either direction.
    pub async fn list_for_guest(
        pool: &PgPool,
        guest_id: DbId,
    ) -> Result<Vec<RelationshipWithGuests>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM relationships r
             JOIN guests gf ON gf.id = r.guest_from_id
             JOIN guests gt ON gt.id = r.guest_to_id
             WHERE r.guest_from_id = $1 OR r.guest_to_id = $1
             ORDER BY r.id ASC"
        );
        sqlx::query_as::<_, RelationshipWithGuests>(&query)
            .bind(guest_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a relationship. Returns whether a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM relationships WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
