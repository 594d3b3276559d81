//! Handlers for the `/members` resource (users of the caller's tenant).
//!
//! Reads are open to every member; writes require the owner role.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use inkstudio_core::error::CoreError;
use inkstudio_core::roles::{role_id_for, ROLE_ARTIST, ROLE_OWNER_ID};
use inkstudio_core::tenancy::ensure_can_add_member;
use inkstudio_core::types::DbId;
use inkstudio_db::models::user::{CreateUser, UpdateUser, User, UserResponse};
use inkstudio_db::repositories::{SessionRepo, TenantRepo, UserRepo};
use serde::Deserialize;
use validator::Validate;

use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::handlers::auth::normalize_email;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireOwner;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /members`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMemberRequest {
    #[validate(length(min = 1, max = 200, message = "must be between 1 and 200 characters"))]
    pub name: String,
    #[validate(email(message = "must be a valid e-mail address"))]
    pub email: String,
    pub password: String,
    /// `"owner"` or `"artist"`; defaults to `"artist"`.
    pub role: Option<String>,
}

/// Request body for `PATCH /members/{id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMemberRequest {
    #[validate(length(min = 1, max = 200, message = "must be between 1 and 200 characters"))]
    pub name: Option<String>,
    #[validate(email(message = "must be a valid e-mail address"))]
    pub email: Option<String>,
    pub role: Option<String>,
    pub is_active: Option<bool>,
}

/// Request body for `POST /members/{id}/reset-password`.
#[derive(Debug, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    pub new_password: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/members
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepo::list_by_tenant(&state.pool, auth.tenant_id).await?;
    Ok(Json(users.iter().map(UserResponse::from).collect()))
}

/// POST /api/v1/members
///
/// Only studio tenants may have more than one user.
pub async fn create(
    State(state): State<AppState>,
    RequireOwner(auth): RequireOwner,
    ValidatedJson(input): ValidatedJson<CreateMemberRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let role_id = parse_role(input.role.as_deref().unwrap_or(ROLE_ARTIST))?;

    let tenant = TenantRepo::find_by_id(&state.pool, auth.tenant_id)
        .await?
        .ok_or(AppError::not_found("Tenant", auth.tenant_id))?;
    let users = UserRepo::count_by_tenant(&state.pool, auth.tenant_id).await?;
    ensure_can_add_member(&tenant.kind, users)?;

    validate_password_strength(&input.password)?;
    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            tenant_id: auth.tenant_id,
            name: input.name.trim().to_string(),
            email: normalize_email(&input.email),
            password_hash,
            role_id,
        },
    )
    .await?;

    tracing::info!(tenant_id = auth.tenant_id, user_id = user.id, "Member added");
    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}

/// GET /api/v1/members/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserResponse>> {
    let user = find_member(&state, auth.tenant_id, id).await?;
    Ok(Json(UserResponse::from(&user)))
}

/// PATCH /api/v1/members/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireOwner(auth): RequireOwner,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateMemberRequest>,
) -> AppResult<Json<UserResponse>> {
    let target = find_member(&state, auth.tenant_id, id).await?;
    let role_id = input.role.as_deref().map(parse_role).transpose()?;

    let deactivating = input.is_active == Some(false);
    if deactivating && id == auth.user_id {
        return Err(cannot_deactivate_self());
    }
    let demoting = role_id.is_some_and(|r| r != ROLE_OWNER_ID);
    if deactivating || demoting {
        ensure_not_last_owner(&state, &target).await?;
    }

    let update = UpdateUser {
        name: input.name.map(|n| n.trim().to_string()),
        email: input.email.as_deref().map(normalize_email),
        role_id,
        is_active: input.is_active,
    };
    let user = UserRepo::update(&state.pool, auth.tenant_id, id, &update)
        .await?
        .ok_or(AppError::not_found("User", id))?;

    if deactivating || demoting {
        SessionRepo::revoke_all_for_user(&state.pool, id).await?;
    }

    Ok(Json(UserResponse::from(&user)))
}

/// DELETE /api/v1/members/{id}
///
/// Deactivates the member and revokes their sessions. Returns 204.
pub async fn deactivate(
    State(state): State<AppState>,
    RequireOwner(auth): RequireOwner,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if id == auth.user_id {
        return Err(cannot_deactivate_self());
    }
    let target = find_member(&state, auth.tenant_id, id).await?;
    ensure_not_last_owner(&state, &target).await?;

    UserRepo::deactivate(&state.pool, auth.tenant_id, id).await?;
    SessionRepo::revoke_all_for_user(&state.pool, id).await?;

    tracing::info!(tenant_id = auth.tenant_id, user_id = id, "Member deactivated");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/members/{id}/reset-password
///
/// Sets a new password, clears any lockout and signs the member out.
pub async fn reset_password(
    State(state): State<AppState>,
    RequireOwner(auth): RequireOwner,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<ResetPasswordRequest>,
) -> AppResult<StatusCode> {
    validate_password_strength(&input.new_password)?;
    let password_hash = hash_password(&input.new_password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let updated = UserRepo::update_password(&state.pool, auth.tenant_id, id, &password_hash).await?;
    if !updated {
        return Err(AppError::not_found("User", id));
    }
    SessionRepo::revoke_all_for_user(&state.pool, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn find_member(state: &AppState, tenant_id: DbId, id: DbId) -> AppResult<User> {
    UserRepo::find_in_tenant(&state.pool, tenant_id, id)
        .await?
        .ok_or(AppError::not_found("User", id))
}

fn parse_role(name: &str) -> AppResult<DbId> {
    role_id_for(name).ok_or_else(|| {
        AppError::Core(CoreError::Validation(format!(
            "role must be one of owner, artist, got '{name}'"
        )))
    })
}

fn cannot_deactivate_self() -> AppError {
    AppError::Core(CoreError::Conflict(
        "You cannot deactivate your own account".into(),
    ))
}

/// Refuse to remove the last active owner of a tenant.
async fn ensure_not_last_owner(state: &AppState, target: &User) -> AppResult<()> {
    if target.role_id != ROLE_OWNER_ID || !target.is_active {
        return Ok(());
    }
    let owners = UserRepo::count_active_owners(&state.pool, target.tenant_id).await?;
    if owners <= 1 {
        return Err(AppError::Core(CoreError::Conflict(
            "A tenant must keep at least one active owner".into(),
        )));
    }
    Ok(())
}
