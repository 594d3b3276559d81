//! Integration tests for studio configuration, per-artist benefits, payouts
//! and the dashboard.

mod common;

use axum::http::StatusCode;
use chrono::Utc;
use common::{
    body_json, create_client, get_auth, post_json_auth, put_json_auth, register, TEST_PASSWORD,
};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_config_rejects_invalid_values(pool: PgPool) {
    let owner = register(&pool, "cfg@example.com", "studio").await;

    for body in [
        json!({ "default_artist_share_percent": 120.0 }),
        json!({ "payout_day": 31 }),
    ] {
        let response = put_json_auth(
            common::build_test_app(pool.clone()),
            "/api/v1/studio/config",
            &owner.access_token,
            body,
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_payouts_apply_benefit_override(pool: PgPool) {
    let owner = register(&pool, "payout@example.com", "studio").await;

    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/studio/config",
        &owner.access_token,
        json!({ "default_artist_share_percent": 50.0, "studio_covers_materials": false }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/members",
        &owner.access_token,
        json!({ "name": "Kai", "email": "kai@example.com", "password": TEST_PASSWORD }),
    )
    .await;
    let artist_id = body_json(response).await["id"].as_i64().expect("artist id");

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/studio/benefits",
        &owner.access_token,
        json!({ "user_id": artist_id, "share_percent": 60.0 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let client_id = create_client(&pool, &owner.access_token, "Noor").await;
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/sessions",
        &owner.access_token,
        json!({
            "client_id": client_id,
            "artist_id": artist_id,
            "scheduled_at": Utc::now(),
            "price_cents": 10_000,
        }),
    )
    .await;
    let session_id = body_json(response).await["id"].as_i64().expect("session id");

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/sessions/{session_id}/complete"),
        &owner.access_token,
        json!({ "payment_method": "card" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/studio/payouts",
        &owner.access_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let report = body_json(response).await["data"].clone();
    assert_eq!(report["artists"].as_array().map(Vec::len), Some(1));
    assert_eq!(report["artists"][0]["artist_id"], artist_id);
    assert_eq!(report["artists"][0]["share_percent"], 60.0);
    assert_eq!(report["total_gross_cents"], 10_000);
    assert_eq!(report["total_artist_payout_cents"], 6_000);
    assert_eq!(report["total_studio_share_cents"], 4_000);

    let response = get_auth(common::build_test_app(pool), "/api/v1/dashboard", &owner.access_token).await;
    let dashboard = body_json(response).await["data"].clone();
    assert_eq!(dashboard["clients_total"], 1);
    assert_eq!(dashboard["sessions_completed_this_month"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_benefit_requires_member_of_tenant(pool: PgPool) {
    let owner = register(&pool, "ben@example.com", "studio").await;
    let stranger = register(&pool, "stranger@example.com", "studio").await;

    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/studio/benefits",
        &owner.access_token,
        json!({ "user_id": stranger.user_id, "share_percent": 40.0 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
