//! Route definitions for `/clients`, `/service-types` and `/procedures`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{clients, procedures, service_types};
use crate::state::AppState;

/// Routes mounted at `/clients`.
///
/// ```text
/// GET    /               -> list (?search=&limit=&offset=)
/// POST   /               -> create
/// GET    /{id}           -> get_by_id
/// PATCH  /{id}           -> update
/// DELETE /{id}           -> delete (cascades)
/// GET    /{id}/history   -> history
/// ```
pub fn clients_router() -> Router<AppState> {
    Router::new()
        .route("/", get(clients::list).post(clients::create))
        .route(
            "/{id}",
            get(clients::get_by_id)
                .patch(clients::update)
                .delete(clients::delete),
        )
        .route("/{id}/history", get(clients::history))
}

/// Routes mounted at `/service-types`.
///
/// ```text
/// GET    /       -> list (?include_inactive=)
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PATCH  /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn service_types_router() -> Router<AppState> {
    Router::new()
        .route("/", get(service_types::list).post(service_types::create))
        .route(
            "/{id}",
            get(service_types::get_by_id)
                .patch(service_types::update)
                .delete(service_types::delete),
        )
}

/// Routes mounted at `/procedures`.
///
/// ```text
/// GET    /       -> list (?client_id=&limit=&offset=)
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PATCH  /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn procedures_router() -> Router<AppState> {
    Router::new()
        .route("/", get(procedures::list).post(procedures::create))
        .route(
            "/{id}",
            get(procedures::get_by_id)
                .patch(procedures::update)
                .delete(procedures::delete),
        )
}
