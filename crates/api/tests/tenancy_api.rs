//! Integration tests for tenant isolation, member management and role
//! gating.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_client, delete_auth, get_auth, patch_json_auth, post_json, post_json_auth,
    register, TEST_PASSWORD,
};
use serde_json::json;
use sqlx::PgPool;

/// Add an artist to the caller's studio and sign them in.
async fn add_artist(pool: &PgPool, owner_token: &str, email: &str) -> (i64, String) {
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/members",
        owner_token,
        json!({ "name": "Artist", "email": email, "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let member = body_json(response).await;
    assert_eq!(member["role"], "artist");

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/auth/login",
        json!({ "email": email, "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let token = body_json(response).await["access_token"]
        .as_str()
        .expect("access_token")
        .to_string();

    (member["id"].as_i64().expect("member id"), token)
}

// ---------------------------------------------------------------------------
// Isolation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_clients_are_invisible_across_tenants(pool: PgPool) {
    let a = register(&pool, "a@example.com", "studio").await;
    let b = register(&pool, "b@example.com", "studio").await;
    let client_id = create_client(&pool, &a.access_token, "Alice").await;

    let uri = format!("/api/v1/clients/{client_id}");
    let response = get_auth(common::build_test_app(pool.clone()), &uri, &b.access_token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete_auth(common::build_test_app(pool.clone()), &uri, &b.access_token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get_auth(common::build_test_app(pool), "/api/v1/clients", &b.access_token).await;
    assert_eq!(body_json(response).await, json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_client_search_and_history(pool: PgPool) {
    let owner = register(&pool, "search@example.com", "independent").await;
    let client_id = create_client(&pool, &owner.access_token, "Marta Quintana").await;
    create_client(&pool, &owner.access_token, "Bruno").await;

    let response = get_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/clients?search=quint&limit=10",
        &owner.access_token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().map(Vec::len), Some(1));
    assert_eq!(json[0]["id"], client_id);

    let response = get_auth(
        common::build_test_app(pool),
        &format!("/api/v1/clients/{client_id}/history"),
        &owner.access_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["client"]["name"], "Marta Quintana");
    assert_eq!(json["data"]["total_spent_cents"], 0);
}

// ---------------------------------------------------------------------------
// Members
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_independent_account_cannot_add_members(pool: PgPool) {
    let owner = register(&pool, "solo@example.com", "independent").await;

    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/members",
        &owner.access_token,
        json!({ "name": "Helper", "email": "helper@example.com", "password": TEST_PASSWORD }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_artist_cannot_use_owner_endpoints(pool: PgPool) {
    let owner = register(&pool, "boss@example.com", "studio").await;
    let (_artist_id, artist_token) = add_artist(&pool, &owner.access_token, "artist@example.com").await;

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/members",
        &artist_token,
        json!({ "name": "Sneaky", "email": "sneaky@example.com", "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = get_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/transactions",
        &artist_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Day-to-day endpoints stay open to artists.
    let response = get_auth(common::build_test_app(pool), "/api/v1/dashboard", &artist_token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_last_owner_cannot_be_demoted(pool: PgPool) {
    let owner = register(&pool, "only@example.com", "studio").await;
    add_artist(&pool, &owner.access_token, "second@example.com").await;

    let response = patch_json_auth(
        common::build_test_app(pool),
        &format!("/api/v1/members/{}", owner.user_id),
        &owner.access_token,
        json!({ "role": "artist" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deactivated_member_cannot_log_in(pool: PgPool) {
    let owner = register(&pool, "lead@example.com", "studio").await;
    let (artist_id, _token) = add_artist(&pool, &owner.access_token, "gone@example.com").await;

    let response = delete_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/members/{artist_id}"),
        &owner.access_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/auth/login",
        json!({ "email": "gone@example.com", "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_studio_with_members_cannot_switch_to_independent(pool: PgPool) {
    let owner = register(&pool, "switch@example.com", "studio").await;
    add_artist(&pool, &owner.access_token, "stay@example.com").await;

    let response = patch_json_auth(
        common::build_test_app(pool),
        "/api/v1/tenant",
        &owner.access_token,
        json!({ "kind": "independent" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}
