//! Route definitions for `/settings` and `/pricing`.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::{pricing, settings};
use crate::state::AppState;

/// Routes mounted at `/settings`.
///
/// ```text
/// GET /work   -> get_work
/// PUT /work   -> put_work (owner)
/// ```
pub fn settings_router() -> Router<AppState> {
    Router::new().route("/work", get(settings::get_work).put(settings::put_work))
}

/// Routes mounted at `/pricing`.
///
/// ```text
/// POST   /calculate         -> calculate_price
/// GET    /hourly-rate       -> get_hourly_rate
/// POST   /suggest           -> suggest_price
/// GET    /seed-data         -> list_seed_data
/// POST   /seed-data         -> create_seed_data (owner)
/// DELETE /seed-data/{id}    -> delete_seed_data (owner)
/// ```
pub fn pricing_router() -> Router<AppState> {
    Router::new()
        .route("/calculate", post(pricing::calculate_price))
        .route("/hourly-rate", get(pricing::get_hourly_rate))
        .route("/suggest", post(pricing::suggest_price))
        .route(
            "/seed-data",
            get(pricing::list_seed_data).post(pricing::create_seed_data),
        )
        .route("/seed-data/{id}", delete(pricing::delete_seed_data))
}
