//! Route definitions for bookkeeping: `/transactions`, `/finance` and
//! `/costs`. All owner only.

use axum::routing::get;
use axum::Router;

use crate::handlers::{costs, finance, transactions};
use crate::state::AppState;

/// Routes mounted at `/transactions`.
///
/// ```text
/// GET    /       -> list (?kind=&category=&from=&to=&limit=&offset=)
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PATCH  /{id}   -> update (409 when session-linked)
/// DELETE /{id}   -> delete (409 when session-linked)
/// ```
pub fn transactions_router() -> Router<AppState> {
    Router::new()
        .route("/", get(transactions::list).post(transactions::create))
        .route(
            "/{id}",
            get(transactions::get_by_id)
                .patch(transactions::update)
                .delete(transactions::delete),
        )
}

/// Routes mounted at `/finance`.
///
/// ```text
/// GET /summary   -> summary (?from=&to=)
/// GET /monthly   -> monthly (?year=)
/// ```
pub fn finance_router() -> Router<AppState> {
    Router::new()
        .route("/summary", get(finance::summary))
        .route("/monthly", get(finance::monthly))
}

/// Routes mounted at `/costs`. `{kind}` is `fixed` or `variable`.
///
/// ```text
/// GET    /summary        -> summary
/// GET    /{kind}         -> list
/// POST   /{kind}         -> create
/// GET    /{kind}/{id}    -> get_by_id
/// PATCH  /{kind}/{id}    -> update
/// DELETE /{kind}/{id}    -> delete
/// ```
pub fn costs_router() -> Router<AppState> {
    Router::new()
        .route("/summary", get(costs::summary))
        .route("/{kind}", get(costs::list).post(costs::create))
        .route(
            "/{kind}/{id}",
            get(costs::get_by_id)
                .patch(costs::update)
                .delete(costs::delete),
        )
}
