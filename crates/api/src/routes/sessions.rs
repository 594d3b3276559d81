//! Route definitions for the `/sessions` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::sessions;
use crate::state::AppState;

/// Routes mounted at `/sessions`.
///
/// ```text
/// GET    /                  -> list (?client_id=&status=&from=&to=&limit=&offset=)
/// POST   /                  -> create
/// GET    /{id}              -> get_by_id
/// PATCH  /{id}              -> update
/// DELETE /{id}              -> delete
/// POST   /{id}/complete     -> complete
/// POST   /{id}/cancel       -> cancel
/// POST   /{id}/no-show      -> no_show
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(sessions::list).post(sessions::create))
        .route(
            "/{id}",
            get(sessions::get_by_id)
                .patch(sessions::update)
                .delete(sessions::delete),
        )
        .route("/{id}/complete", post(sessions::complete))
        .route("/{id}/cancel", post(sessions::cancel))
        .route("/{id}/no-show", post(sessions::no_show))
}
