//! HTTP-level integration tests for the relationship graph endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, seat_guest, seed_guest, seed_relationship, seed_table};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_graph_contains_nodes_and_links(pool: PgPool) {
    let ann = seed_guest(&pool, "Ann", "Yu").await;
    let bo = seed_guest(&pool, "Bo", "Reyes").await;
    seed_relationship(&pool, ann, bo, "FRIEND", 4).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/graph").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let nodes = json["data"]["nodes"].as_array().unwrap();
    let links = json["data"]["links"].as_array().unwrap();
    assert_eq!(nodes.len(), 2);
    assert_eq!(links.len(), 1);
    assert_eq!(links[0]["kind"], "FRIEND");
    assert_eq!(links[0]["strength"], 4);

    let ann_node = nodes.iter().find(|n| n["id"] == ann).unwrap();
    assert_eq!(ann_node["name"], "Ann Yu");
    assert_eq!(ann_node["val"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_graph_family_filter(pool: PgPool) {
    let ann = seed_guest(&pool, "Ann", "Yu").await;
    let bo = seed_guest(&pool, "Bo", "Reyes").await;
    let cai = seed_guest(&pool, "Cai", "Lund").await;
    seed_relationship(&pool, ann, bo, "SIBLING", 5).await;
    seed_relationship(&pool, bo, cai, "COLLEAGUE", 2).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/graph?filter=family").await).await;

    let nodes = json["data"]["nodes"].as_array().unwrap();
    assert_eq!(nodes.len(), 2);
    assert!(nodes.iter().all(|n| n["id"] != cai));
    // The colleague edge lost an endpoint, so only the sibling link survives.
    let links = json["data"]["links"].as_array().unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0]["kind"], "SIBLING");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_graph_friends_filter(pool: PgPool) {
    let ann = seed_guest(&pool, "Ann", "Yu").await;
    let bo = seed_guest(&pool, "Bo", "Reyes").await;
    let cai = seed_guest(&pool, "Cai", "Lund").await;
    seed_relationship(&pool, ann, bo, "FRIEND", 4).await;
    seed_relationship(&pool, ann, cai, "SPOUSE", 5).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/graph?filter=friends").await).await;

    let nodes = json["data"]["nodes"].as_array().unwrap();
    assert_eq!(nodes.len(), 2);
    assert!(nodes.iter().any(|n| n["id"] == ann));
    assert!(nodes.iter().any(|n| n["id"] == bo));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_graph_excludes_declined_guests(pool: PgPool) {
    let ann = seed_guest(&pool, "Ann", "Yu").await;
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/guests",
        serde_json::json!({
            "first_name": "Bo",
            "last_name": "Reyes",
            "rsvp_status": "DECLINED",
        }),
    )
    .await;
    let declined = body_json(response).await["data"]["id"].as_i64().unwrap();
    seed_relationship(&pool, ann, declined, "FRIEND", 3).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/graph").await).await;

    let nodes = json["data"]["nodes"].as_array().unwrap();
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0]["id"], ann);
    // No dangling link to the excluded guest.
    assert!(json["data"]["links"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_graph_group_reflects_table_position(pool: PgPool) {
    // Tables list alphabetically: Garden first, Terrace second.
    let garden = seed_table(&pool, "Garden", 8).await;
    let terrace = seed_table(&pool, "Terrace", 8).await;
    let ann = seed_guest(&pool, "Ann", "Yu").await;
    let bo = seed_guest(&pool, "Bo", "Reyes").await;
    let cai = seed_guest(&pool, "Cai", "Lund").await;
    seat_guest(&pool, ann, terrace).await;
    seat_guest(&pool, bo, garden).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/graph").await).await;
    let nodes = json["data"]["nodes"].as_array().unwrap();

    let group_of = |id: i64| {
        nodes
            .iter()
            .find(|n| n["id"] == id)
            .unwrap()["group"]
            .as_i64()
            .unwrap()
    };
    assert_eq!(group_of(bo), 1);
    assert_eq!(group_of(ann), 2);
    assert_eq!(group_of(cai), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_graph_rejects_unknown_filter(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/graph?filter=enemies").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
