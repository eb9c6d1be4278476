//! Repository-level tests covering CRUD, partial updates, and the schema's
//! referential behaviour (cascades and unseating).

use assert_matches::assert_matches;
use banquet_db::models::guest::{CreateGuest, UpdateGuest};
use banquet_db::models::photo::CreatePhoto;
use banquet_db::models::relationship::CreateRelationship;
use banquet_db::models::table::CreateTable;
use banquet_db::repositories::{GuestRepo, PhotoRepo, RelationshipRepo, TableRepo};
use sqlx::PgPool;

fn guest_input(first_name: &str, last_name: &str) -> CreateGuest {
    CreateGuest {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: None,
        phone: None,
        address: None,
        rsvp_status: None,
        dietary_restrictions: None,
        plus_one: false,
        notes: None,
        table_id: None,
    }
}

fn table_input(name: &str, capacity: Option<i32>) -> CreateTable {
    CreateTable {
        name: name.to_string(),
        capacity,
        description: None,
    }
}

fn photo_input(file_name: &str) -> CreatePhoto {
    CreatePhoto {
        file_name: file_name.to_string(),
        original_name: file_name.to_string(),
        file_path: format!("/photos/{file_name}"),
        file_size: 1024,
        mime_type: "image/jpeg".to_string(),
        width: Some(640),
        height: Some(480),
    }
}

// ---------------------------------------------------------------------------
// Guests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn guest_create_defaults_rsvp_to_pending(pool: PgPool) {
    let guest = GuestRepo::create(&pool, &guest_input("Ann", "Yu"))
        .await
        .unwrap();
    assert_eq!(guest.rsvp_status, "PENDING");
    assert_eq!(guest.full_name(), "Ann Yu");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn guest_partial_update_keeps_absent_fields(pool: PgPool) {
    let guest = GuestRepo::create(&pool, &guest_input("Ann", "Yu"))
        .await
        .unwrap();

    let update = UpdateGuest {
        first_name: None,
        last_name: None,
        email: Some("ann@example.com".to_string()),
        phone: None,
        address: None,
        rsvp_status: None,
        dietary_restrictions: None,
        plus_one: None,
        notes: None,
    };
    let updated = GuestRepo::update(&pool, guest.id, &update)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.email.as_deref(), Some("ann@example.com"));
    assert_eq!(updated.first_name, "Ann");
    assert!(updated.updated_at >= guest.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn guest_find_by_id_joins_table_name(pool: PgPool) {
    let table = TableRepo::create(&pool, &table_input("Garden", None))
        .await
        .unwrap();
    let guest = GuestRepo::create(&pool, &guest_input("Ann", "Yu"))
        .await
        .unwrap();
    GuestRepo::assign_table(&pool, guest.id, Some(table.id))
        .await
        .unwrap();

    let found = GuestRepo::find_by_id(&pool, guest.id).await.unwrap().unwrap();
    assert_eq!(found.table_name.as_deref(), Some("Garden"));
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn table_capacity_defaults_to_eight(pool: PgPool) {
    let table = TableRepo::create(&pool, &table_input("Garden", None))
        .await
        .unwrap();
    assert_eq!(table.capacity, 8);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_table_unseats_guests(pool: PgPool) {
    let table = TableRepo::create(&pool, &table_input("Garden", Some(4)))
        .await
        .unwrap();
    let guest = GuestRepo::create(&pool, &guest_input("Ann", "Yu"))
        .await
        .unwrap();
    GuestRepo::assign_table(&pool, guest.id, Some(table.id))
        .await
        .unwrap();

    assert!(TableRepo::delete(&pool, table.id).await.unwrap());

    let found = GuestRepo::find_by_id(&pool, guest.id).await.unwrap().unwrap();
    assert!(found.table_id.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_with_guests_groups_occupants(pool: PgPool) {
    let garden = TableRepo::create(&pool, &table_input("Garden", None))
        .await
        .unwrap();
    let terrace = TableRepo::create(&pool, &table_input("Terrace", None))
        .await
        .unwrap();
    let ann = GuestRepo::create(&pool, &guest_input("Ann", "Yu"))
        .await
        .unwrap();
    GuestRepo::assign_table(&pool, ann.id, Some(garden.id))
        .await
        .unwrap();

    let tables = TableRepo::list_with_guests(&pool).await.unwrap();
    assert_eq!(tables.len(), 2);
    let garden_row = tables.iter().find(|t| t.id == garden.id).unwrap();
    let terrace_row = tables.iter().find(|t| t.id == terrace.id).unwrap();
    assert_eq!(garden_row.guest_count, 1);
    assert_eq!(terrace_row.guest_count, 0);
}

// ---------------------------------------------------------------------------
// Relationships
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn relationship_cascade_on_guest_delete(pool: PgPool) {
    let ann = GuestRepo::create(&pool, &guest_input("Ann", "Yu"))
        .await
        .unwrap();
    let bo = GuestRepo::create(&pool, &guest_input("Bo", "Reyes"))
        .await
        .unwrap();
    RelationshipRepo::create(
        &pool,
        &CreateRelationship {
            guest_from_id: ann.id,
            guest_to_id: bo.id,
            kind: "FRIEND".to_string(),
            strength: Some(3),
            notes: None,
        },
    )
    .await
    .unwrap();

    assert!(GuestRepo::delete(&pool, ann.id).await.unwrap());
    assert!(RelationshipRepo::list_all(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_pair_violates_unique_constraint(pool: PgPool) {
    let ann = GuestRepo::create(&pool, &guest_input("Ann", "Yu"))
        .await
        .unwrap();
    let bo = GuestRepo::create(&pool, &guest_input("Bo", "Reyes"))
        .await
        .unwrap();
    let input = CreateRelationship {
        guest_from_id: ann.id,
        guest_to_id: bo.id,
        kind: "FRIEND".to_string(),
        strength: None,
        notes: None,
    };

    RelationshipRepo::create(&pool, &input).await.unwrap();
    let err = RelationshipRepo::create(&pool, &input).await.unwrap_err();

    assert_matches!(
        err,
        sqlx::Error::Database(db_err) if db_err.constraint() == Some("uq_relationships_pair")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_for_guest_matches_either_direction(pool: PgPool) {
    let ann = GuestRepo::create(&pool, &guest_input("Ann", "Yu"))
        .await
        .unwrap();
    let bo = GuestRepo::create(&pool, &guest_input("Bo", "Reyes"))
        .await
        .unwrap();
    let cai = GuestRepo::create(&pool, &guest_input("Cai", "Lund"))
        .await
        .unwrap();
    for (from, to) in [(ann.id, bo.id), (cai.id, ann.id)] {
        RelationshipRepo::create(
            &pool,
            &CreateRelationship {
                guest_from_id: from,
                guest_to_id: to,
                kind: "FAMILY".to_string(),
                strength: Some(2),
                notes: None,
            },
        )
        .await
        .unwrap();
    }

    let edges = RelationshipRepo::list_for_guest(&pool, ann.id).await.unwrap();
    assert_eq!(edges.len(), 2);
}

// ---------------------------------------------------------------------------
// Photos
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn photo_insert_if_new_is_idempotent(pool: PgPool) {
    let input = photo_input("ceremony.jpg");

    let first = PhotoRepo::insert_if_new(&pool, &input).await.unwrap();
    assert!(first.is_some());

    let second = PhotoRepo::insert_if_new(&pool, &input).await.unwrap();
    assert!(second.is_none());

    assert_eq!(PhotoRepo::list(&pool, false).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn replace_assignments_swaps_the_set(pool: PgPool) {
    let photo = PhotoRepo::insert_if_new(&pool, &photo_input("toast.png"))
        .await
        .unwrap()
        .unwrap();
    let ann = GuestRepo::create(&pool, &guest_input("Ann", "Yu"))
        .await
        .unwrap();
    let bo = GuestRepo::create(&pool, &guest_input("Bo", "Reyes"))
        .await
        .unwrap();

    PhotoRepo::replace_assignments(&pool, photo.id, &[ann.id, bo.id])
        .await
        .unwrap();
    PhotoRepo::replace_assignments(&pool, photo.id, &[bo.id])
        .await
        .unwrap();

    let assigned = PhotoRepo::guests_for_photos(&pool, &[photo.id]).await.unwrap();
    assert_eq!(assigned.len(), 1);
    assert_eq!(assigned[0].id, bo.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn hide_assigned_excludes_tagged_photos(pool: PgPool) {
    let tagged = PhotoRepo::insert_if_new(&pool, &photo_input("tagged.jpg"))
        .await
        .unwrap()
        .unwrap();
    PhotoRepo::insert_if_new(&pool, &photo_input("untagged.jpg"))
        .await
        .unwrap()
        .unwrap();
    let ann = GuestRepo::create(&pool, &guest_input("Ann", "Yu"))
        .await
        .unwrap();
    PhotoRepo::replace_assignments(&pool, tagged.id, &[ann.id])
        .await
        .unwrap();

    let visible = PhotoRepo::list(&pool, true).await.unwrap();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].file_name, "untagged.jpg");
}
