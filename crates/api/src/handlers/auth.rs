//! Handlers for the `/auth` resource (register, login, refresh, logout, me).

use axum::extract::State;
use axum::http::header::USER_AGENT;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use chrono::Utc;
use inkstudio_core::error::CoreError;
use inkstudio_core::roles::{role_name_for, ROLE_OWNER_ID};
use inkstudio_core::tenancy::validate_tenant_kind;
use inkstudio_db::models::session::CreateSession;
use inkstudio_db::models::tenant::{CreateTenant, Tenant};
use inkstudio_db::models::user::{CreateUser, User, UserResponse};
use inkstudio_db::repositories::{SessionRepo, TenantRepo, UserRepo};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::jwt::{generate_access_token, generate_refresh_token, hash_refresh_token};
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Consecutive failed logins before the account is locked.
const MAX_FAILED_ATTEMPTS: i32 = 5;

/// How long a locked account stays locked.
const LOCK_DURATION_MINS: i64 = 15;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 200, message = "must be between 1 and 200 characters"))]
    pub tenant_name: String,
    pub tenant_kind: String,
    #[validate(length(min = 1, max = 200, message = "must be between 1 and 200 characters"))]
    pub name: String,
    #[validate(email(message = "must be a valid e-mail address"))]
    pub email: String,
    pub password: String,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `POST /auth/refresh`.
#[derive(Debug, Deserialize, Validate)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Returned by register, login and refresh.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserResponse,
}

/// Returned by `GET /auth/me`.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: UserResponse,
    pub tenant: Tenant,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/register
///
/// Create a tenant and its owner in one transaction, then sign the owner in.
pub async fn register(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(input): ValidatedJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    validate_tenant_kind(&input.tenant_kind)?;
    validate_password_strength(&input.password)?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let tenant = CreateTenant {
        name: input.tenant_name.trim().to_string(),
        kind: input.tenant_kind,
    };
    let owner = CreateUser {
        tenant_id: 0,
        name: input.name.trim().to_string(),
        email: normalize_email(&input.email),
        password_hash,
        role_id: ROLE_OWNER_ID,
    };
    let (tenant, user) = TenantRepo::create_with_owner(&state.pool, &tenant, &owner).await?;

    tracing::info!(tenant_id = tenant.id, user_id = user.id, kind = %tenant.kind, "Tenant registered");

    let response = create_auth_response(&state, &user, &headers).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/v1/auth/login
///
/// Unknown e-mail and wrong password give the same 401. Inactive or locked
/// accounts get 403.
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(input): ValidatedJson<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let user = UserRepo::find_by_email(&state.pool, input.email.trim())
        .await?
        .ok_or_else(invalid_credentials)?;

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    if let Some(locked_until) = user.locked_until {
        if locked_until > Utc::now() {
            return Err(AppError::Core(CoreError::Forbidden(
                "Account is temporarily locked. Try again later.".into(),
            )));
        }
    }

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        let failures = UserRepo::increment_failed_login(&state.pool, user.id).await?;
        if failures >= MAX_FAILED_ATTEMPTS {
            let lock_until = Utc::now() + chrono::Duration::minutes(LOCK_DURATION_MINS);
            UserRepo::lock_account(&state.pool, user.id, lock_until).await?;
            tracing::warn!(user_id = user.id, failures, "Account locked after failed logins");
        }
        return Err(invalid_credentials());
    }

    UserRepo::record_successful_login(&state.pool, user.id).await?;

    let response = create_auth_response(&state, &user, &headers).await?;
    Ok(Json(response))
}

/// POST /api/v1/auth/refresh
///
/// Exchange a live refresh token for a new pair. The old token is revoked
/// in the same transaction that stores the new one.
pub async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(input): ValidatedJson<RefreshRequest>,
) -> AppResult<Json<AuthResponse>> {
    let token_hash = hash_refresh_token(&input.refresh_token);

    let session = SessionRepo::find_active_by_hash(&state.pool, &token_hash)
        .await?
        .ok_or_else(invalid_refresh_token)?;

    let user = UserRepo::find_by_id(&state.pool, session.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    let (access_token, refresh_token, next) = issue_tokens(&state, &user, &headers)?;
    SessionRepo::rotate(&state.pool, session.id, &next)
        .await?
        .ok_or_else(invalid_refresh_token)?;

    Ok(Json(AuthResponse {
        access_token,
        refresh_token,
        expires_in: state.config.jwt.access_expires_in_secs(),
        user: UserResponse::from(&user),
    }))
}

/// POST /api/v1/auth/logout
///
/// Revoke all sessions of the caller. Returns 204 No Content.
pub async fn logout(State(state): State<AppState>, auth_user: AuthUser) -> AppResult<StatusCode> {
    let revoked = SessionRepo::revoke_all_for_user(&state.pool, auth_user.user_id).await?;
    tracing::debug!(user_id = auth_user.user_id, revoked, "Logged out");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/auth/me
pub async fn me(State(state): State<AppState>, auth_user: AuthUser) -> AppResult<Json<MeResponse>> {
    let user = UserRepo::find_in_tenant(&state.pool, auth_user.tenant_id, auth_user.user_id)
        .await?
        .ok_or(AppError::not_found("User", auth_user.user_id))?;
    let tenant = TenantRepo::find_by_id(&state.pool, auth_user.tenant_id)
        .await?
        .ok_or(AppError::not_found("Tenant", auth_user.tenant_id))?;

    Ok(Json(MeResponse {
        user: UserResponse::from(&user),
        tenant,
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// E-mails are stored lowercased so the unique constraint is case-insensitive.
pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized(
        "Invalid email or password".into(),
    ))
}

fn invalid_refresh_token() -> AppError {
    AppError::Core(CoreError::Unauthorized(
        "Invalid or expired refresh token".into(),
    ))
}

/// Sign an access token and mint a refresh token for `user`.
///
/// Returns the two plaintext tokens and the session row to persist.
fn issue_tokens(
    state: &AppState,
    user: &User,
    headers: &HeaderMap,
) -> AppResult<(String, String, CreateSession)> {
    let access_token = generate_access_token(
        user.id,
        user.tenant_id,
        role_name_for(user.role_id),
        &state.config.jwt,
    )
    .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let (refresh_plaintext, refresh_hash) = generate_refresh_token();

    let session = CreateSession {
        user_id: user.id,
        refresh_token_hash: refresh_hash,
        expires_at: state.config.jwt.refresh_expires_at(),
        user_agent: headers
            .get(USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        ip_address: None,
    };

    Ok((access_token, refresh_plaintext, session))
}

/// Issue tokens, persist a new login session and build the response.
async fn create_auth_response(
    state: &AppState,
    user: &User,
    headers: &HeaderMap,
) -> AppResult<AuthResponse> {
    let (access_token, refresh_token, session) = issue_tokens(state, user, headers)?;
    SessionRepo::create(&state.pool, &session).await?;

    Ok(AuthResponse {
        access_token,
        refresh_token,
        expires_in: state.config.jwt.access_expires_in_secs(),
        user: UserResponse::from(user),
    })
}
