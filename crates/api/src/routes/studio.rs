//! Route definitions for the `/studio` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::studio;
use crate::state::AppState;

/// Routes mounted at `/studio`.
///
/// ```text
/// GET    /config            -> get_config
/// PUT    /config            -> put_config (owner)
/// GET    /benefits          -> list_benefits (owner)
/// POST   /benefits          -> create_benefit (owner)
/// GET    /benefits/{id}     -> get_benefit (owner)
/// PATCH  /benefits/{id}     -> update_benefit (owner)
/// DELETE /benefits/{id}     -> delete_benefit (owner)
/// GET    /payouts           -> payouts (owner, ?from=&to=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/config", get(studio::get_config).put(studio::put_config))
        .route(
            "/benefits",
            get(studio::list_benefits).post(studio::create_benefit),
        )
        .route(
            "/benefits/{id}",
            get(studio::get_benefit)
                .patch(studio::update_benefit)
                .delete(studio::delete_benefit),
        )
        .route("/payouts", get(studio::payouts))
}
