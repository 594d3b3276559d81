//! Handlers for the `/tenant` resource (the caller's own tenant).

use axum::extract::State;
use axum::Json;
use inkstudio_core::tenancy::ensure_can_switch_kind;
use inkstudio_db::models::tenant::{Tenant, UpdateTenant};
use inkstudio_db::repositories::{TenantRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireOwner;
use crate::state::AppState;

/// GET /api/v1/tenant
pub async fn get(State(state): State<AppState>, auth: AuthUser) -> AppResult<Json<Tenant>> {
    let tenant = TenantRepo::find_by_id(&state.pool, auth.tenant_id)
        .await?
        .ok_or(AppError::not_found("Tenant", auth.tenant_id))?;
    Ok(Json(tenant))
}

/// PATCH /api/v1/tenant
///
/// Switching to `independent` is refused while more than one user exists.
pub async fn update(
    State(state): State<AppState>,
    RequireOwner(auth): RequireOwner,
    ValidatedJson(input): ValidatedJson<UpdateTenant>,
) -> AppResult<Json<Tenant>> {
    if let Some(kind) = input.kind.as_deref() {
        let users = UserRepo::count_by_tenant(&state.pool, auth.tenant_id).await?;
        ensure_can_switch_kind(kind, users)?;
    }

    let tenant = TenantRepo::update(&state.pool, auth.tenant_id, &input)
        .await?
        .ok_or(AppError::not_found("Tenant", auth.tenant_id))?;

    tracing::info!(tenant_id = tenant.id, kind = %tenant.kind, "Tenant updated");
    Ok(Json(tenant))
}
