//! Integration tests for work settings, the price calculator and the price
//! suggestion.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get_auth, post_json_auth, put_json_auth, register, Registered};
use serde_json::json;
use sqlx::PgPool;

async fn put_settings(pool: &PgPool, owner: &Registered, body: serde_json::Value) -> StatusCode {
    put_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/settings/work",
        &owner.access_token,
        body,
    )
    .await
    .status()
}

async fn hourly_rate(pool: &PgPool, owner: &Registered) -> serde_json::Value {
    let response = get_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/pricing/hourly-rate",
        &owner.access_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["data"].clone()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_work_settings_default_then_saved(pool: PgPool) {
    let owner = register(&pool, "settings@example.com", "independent").await;

    let response = get_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/settings/work",
        &owner.access_token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["is_default"], true);
    assert_eq!(json["working_days_per_month"], 22);

    let status = put_settings(&pool, &owner, json!({ "working_days_per_month": 20 })).await;
    assert_eq!(status, StatusCode::OK);

    let response = get_auth(
        common::build_test_app(pool),
        "/api/v1/settings/work",
        &owner.access_token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["is_default"], false);
    assert_eq!(json["productive_hours_per_month"], 160.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_work_settings_reject_out_of_range(pool: PgPool) {
    let owner = register(&pool, "range@example.com", "independent").await;

    let status = put_settings(&pool, &owner, json!({ "hours_per_day": 25.0 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let status = put_settings(&pool, &owner, json!({ "tax_percent": 60.0, "card_fee_percent": 45.0 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_calculate_spreads_fixed_costs_over_productive_hours(pool: PgPool) {
    let owner = register(&pool, "calc@example.com", "independent").await;
    let status = put_settings(
        &pool,
        &owner,
        json!({
            "working_days_per_month": 20,
            "hours_per_day": 8.0,
            "profit_margin_percent": 0.0,
            "tax_percent": 0.0,
            "card_fee_percent": 0.0,
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/costs/fixed",
        &owner.access_token,
        json!({ "name": "Rent", "amount_cents": 160_000 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/pricing/calculate",
        &owner.access_token,
        json!({ "duration_minutes": 90, "extra_material_cents": 500 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let data = body_json(response).await["data"].clone();
    assert_eq!(data["fixed_cost_per_hour_cents"], 1_000);
    assert_eq!(data["fixed_share_cents"], 1_500);
    assert_eq!(data["final_price_cents"], 2_000);

    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/pricing/calculate",
        &owner.access_token,
        json!({ "duration_minutes": 0 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_hourly_rate_follows_fixed_costs_and_deductions(pool: PgPool) {
    let owner = register(&pool, "hourly@example.com", "independent").await;
    let status = put_settings(
        &pool,
        &owner,
        json!({
            "working_days_per_month": 20,
            "hours_per_day": 8.0,
            "profit_margin_percent": 0.0,
            "tax_percent": 0.0,
            "card_fee_percent": 0.0,
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    for (name, amount_cents) in [("Rent", 120_000), ("Software", 40_000)] {
        let response = post_json_auth(
            common::build_test_app(pool.clone()),
            "/api/v1/costs/fixed",
            &owner.access_token,
            json!({ "name": name, "amount_cents": amount_cents }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let data = hourly_rate(&pool, &owner).await;
    assert_eq!(data["productive_hours_per_month"], 160.0);
    assert_eq!(data["fixed_cost_per_hour_cents"], 1_000);
    assert_eq!(data["minimum_hourly_rate_cents"], 1_000);

    // A 20% tax leaves 80% of the price, so the rate grows to 1000 / 0.8.
    let status = put_settings(
        &pool,
        &owner,
        json!({
            "working_days_per_month": 20,
            "hours_per_day": 8.0,
            "profit_margin_percent": 0.0,
            "tax_percent": 20.0,
            "card_fee_percent": 0.0,
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let data = hourly_rate(&pool, &owner).await;
    assert_eq!(data["fixed_cost_per_hour_cents"], 1_000);
    assert_eq!(data["minimum_hourly_rate_cents"], 1_250);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_cost_kind_is_rejected(pool: PgPool) {
    let owner = register(&pool, "kind@example.com", "independent").await;

    let response = get_auth(
        common::build_test_app(pool),
        "/api/v1/costs/monthly",
        &owner.access_token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_suggest_falls_back_to_seed_data(pool: PgPool) {
    let owner = register(&pool, "suggest@example.com", "independent").await;

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/pricing/suggest",
        &owner.access_token,
        json!({ "style": "fineline", "body_region": "forearm", "size_cm": 7.0 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let data = body_json(response).await["data"].clone();
    assert_eq!(data["own_samples"], 0);
    assert_eq!(data["source"], "seed");
    assert_eq!(data["size_bucket"], "small");
    assert_eq!(data["min_cents"], 35_000);
    assert_eq!(data["max_cents"], 40_000);

    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/pricing/suggest",
        &owner.access_token,
        json!({ "style": "no-such-style" }),
    )
    .await;
    let data = body_json(response).await["data"].clone();
    assert_eq!(data["source"], "none");
    assert!(data["average_cents"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seed_rows_are_tenant_scoped(pool: PgPool) {
    let owner = register(&pool, "seed@example.com", "independent").await;
    let other = register(&pool, "seed2@example.com", "independent").await;

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/pricing/seed-data",
        &owner.access_token,
        json!({ "style": "dotwork", "price_cents": 42_000 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let seed_id = body_json(response).await["id"].as_i64().expect("seed id");

    let uri = format!("/api/v1/pricing/seed-data/{seed_id}");
    let response = delete_auth(common::build_test_app(pool.clone()), &uri, &other.access_token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete_auth(common::build_test_app(pool), &uri, &owner.access_token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
