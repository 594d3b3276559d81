//! Route definitions for `/tenant` and `/members`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{members, tenant};
use crate::state::AppState;

/// Routes mounted at `/tenant`.
///
/// ```text
/// GET   /   -> get
/// PATCH /   -> update (owner)
/// ```
pub fn tenant_router() -> Router<AppState> {
    Router::new().route("/", get(tenant::get).patch(tenant::update))
}

/// Routes mounted at `/members`.
///
/// ```text
/// GET    /                         -> list
/// POST   /                         -> create (owner)
/// GET    /{id}                     -> get_by_id
/// PATCH  /{id}                     -> update (owner)
/// DELETE /{id}                     -> deactivate (owner)
/// POST   /{id}/reset-password      -> reset_password (owner)
/// ```
pub fn members_router() -> Router<AppState> {
    Router::new()
        .route("/", get(members::list).post(members::create))
        .route(
            "/{id}",
            get(members::get_by_id)
                .patch(members::update)
                .delete(members::deactivate),
        )
        .route("/{id}/reset-password", post(members::reset_password))
}
