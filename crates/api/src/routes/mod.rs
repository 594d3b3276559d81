pub mod auth;
pub mod clients;
pub mod finance;
pub mod health;
pub mod pricing;
pub mod sessions;
pub mod studio;
pub mod tenant;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register, /auth/login, /auth/refresh     public
/// /auth/logout, /auth/me                          any member
///
/// /tenant                                         get; patch (owner)
/// /members, /members/{id}                         list, get; writes (owner)
/// /members/{id}/reset-password                    owner
///
/// /clients, /clients/{id}, /clients/{id}/history  any member
/// /service-types, /service-types/{id}             any member
/// /procedures, /procedures/{id}                   any member
/// /sessions, /sessions/{id}                       any member
/// /sessions/{id}/complete|cancel|no-show          any member
///
/// /transactions, /transactions/{id}               owner
/// /finance/summary, /finance/monthly              owner
/// /costs/summary, /costs/{kind}, /costs/{kind}/{id}  owner
///
/// /settings/work                                  get; put (owner)
/// /pricing/calculate, /pricing/hourly-rate        any member
/// /pricing/suggest                                any member
/// /pricing/seed-data, /pricing/seed-data/{id}     get; writes (owner)
///
/// /studio/config                                  get; put (owner)
/// /studio/benefits, /studio/benefits/{id}         owner
/// /studio/payouts                                 owner
///
/// /dashboard                                      any member
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/tenant", tenant::tenant_router())
        .nest("/members", tenant::members_router())
        .nest("/clients", clients::clients_router())
        .nest("/service-types", clients::service_types_router())
        .nest("/procedures", clients::procedures_router())
        .nest("/sessions", sessions::router())
        .nest("/transactions", finance::transactions_router())
        .nest("/finance", finance::finance_router())
        .nest("/costs", finance::costs_router())
        .nest("/settings", pricing::settings_router())
        .nest("/pricing", pricing::pricing_router())
        .nest("/studio", studio::router())
        .route("/dashboard", get(handlers::dashboard::get))
}
