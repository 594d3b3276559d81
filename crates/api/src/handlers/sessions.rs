//! Handlers for the `/sessions` resource (tattoo sessions).
//!
//! ```text
//! POST   /sessions                 scheduled
//! POST   /sessions/{id}/complete   scheduled -> completed (+ income entry)
//! POST   /sessions/{id}/cancel     scheduled -> cancelled
//! POST   /sessions/{id}/no-show    scheduled -> no_show
//! PATCH  /sessions/{id} status     cancelled | no_show -> scheduled
//! ```
//!
//! Completed is terminal. Every referenced row must belong to the caller's
//! tenant.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{NaiveDate, Utc};
use inkstudio_core::error::CoreError;
use inkstudio_core::ledger::validate_entry;
use inkstudio_core::session_lifecycle::{validate_figures, validate_transition};
use inkstudio_core::status::SessionStatus;
use inkstudio_core::types::DbId;
use inkstudio_core::validation::validate_date_range;
use inkstudio_db::models::tattoo_session::{
    CompleteTattooSession, CreateTattooSession, SessionListFilter, TattooSession,
    UpdateTattooSession,
};
use inkstudio_db::models::transaction::Transaction;
use inkstudio_db::repositories::TattooSessionRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::handlers::ownership;
use crate::middleware::auth::AuthUser;
use crate::query::page_bounds;
use crate::state::AppState;

/// Query parameters for `GET /sessions`.
#[derive(Debug, Default, Deserialize)]
pub struct SessionListParams {
    pub client_id: Option<DbId>,
    /// Status name (`scheduled`, `completed`, `cancelled`, `no_show`).
    pub status: Option<String>,
    /// Inclusive UTC date bounds on `scheduled_at`.
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Response of `POST /sessions/{id}/complete`.
#[derive(Debug, Serialize)]
pub struct CompletedSession {
    pub session: TattooSession,
    /// The generated income entry; absent for a zero price.
    pub transaction: Option<Transaction>,
}

/// POST /api/v1/sessions
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(input): ValidatedJson<CreateTattooSession>,
) -> AppResult<(StatusCode, Json<TattooSession>)> {
    validate_figures(&input.figures())?;
    ownership::client(&state, auth.tenant_id, input.client_id).await?;
    check_references(
        &state,
        auth.tenant_id,
        input.client_id,
        input.procedure_id,
        input.service_type_id,
        input.artist_id,
    )
    .await?;

    let session = TattooSessionRepo::create(&state.pool, auth.tenant_id, &input).await?;
    tracing::debug!(tenant_id = auth.tenant_id, session_id = session.id, "Session scheduled");
    Ok((StatusCode::CREATED, Json(session)))
}

/// GET /api/v1/sessions
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<SessionListParams>,
) -> AppResult<Json<Vec<TattooSession>>> {
    validate_date_range(params.from.as_ref(), params.to.as_ref())?;
    let status_id = params
        .status
        .as_deref()
        .map(SessionStatus::from_name)
        .transpose()?
        .map(SessionStatus::id);
    let (limit, offset) = page_bounds(params.limit, params.offset);

    let filter = SessionListFilter {
        client_id: params.client_id,
        status_id,
        from: params.from,
        to: params.to,
        limit,
        offset,
    };
    let sessions = TattooSessionRepo::list(&state.pool, auth.tenant_id, &filter).await?;
    Ok(Json(sessions))
}

/// GET /api/v1/sessions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<TattooSession>> {
    Ok(Json(find_session(&state, auth.tenant_id, id).await?))
}

/// PATCH /api/v1/sessions/{id}
///
/// A new price on a completed session is carried into its income entry.
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateTattooSession>,
) -> AppResult<Json<TattooSession>> {
    validate_figures(&input.figures())?;
    let existing = find_session(&state, auth.tenant_id, id).await?;
    check_references(
        &state,
        auth.tenant_id,
        existing.client_id,
        input.procedure_id,
        input.service_type_id,
        input.artist_id,
    )
    .await?;

    let status_change = match input.status.as_deref() {
        Some(name) => {
            let current = SessionStatus::from_id(existing.status_id)?;
            let target = SessionStatus::from_name(name)?;
            if target == SessionStatus::Completed && current != target {
                return Err(AppError::Core(CoreError::Validation(
                    "use POST /sessions/{id}/complete to complete a session".into(),
                )));
            }
            if target == current {
                None
            } else {
                validate_transition(current, target)?;
                Some((current, target))
            }
        }
        None => None,
    };

    let session =
        TattooSessionRepo::update(&state.pool, auth.tenant_id, id, &input, status_change)
            .await?
            .ok_or_else(|| match status_change {
                Some(_) => status_changed(id),
                None => AppError::not_found("TattooSession", id),
            })?;
    Ok(Json(session))
}

/// DELETE /api/v1/sessions/{id}
///
/// Removes the session and its linked income entry together.
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if TattooSessionRepo::delete(&state.pool, auth.tenant_id, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("TattooSession", id))
    }
}

/// POST /api/v1/sessions/{id}/complete
pub async fn complete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<CompleteTattooSession>,
) -> AppResult<Json<CompletedSession>> {
    validate_entry(None, None, None, input.payment_method.as_deref())?;

    let existing = find_session(&state, auth.tenant_id, id).await?;
    validate_transition(SessionStatus::from_id(existing.status_id)?, SessionStatus::Completed)?;

    let occurred_on = input.completed_on.unwrap_or_else(|| Utc::now().date_naive());
    let (session, transaction) = TattooSessionRepo::complete(
        &state.pool,
        auth.tenant_id,
        id,
        input.price_cents,
        input.payment_method.as_deref(),
        occurred_on,
    )
    .await?
    .ok_or_else(|| status_changed(id))?;

    tracing::info!(
        tenant_id = auth.tenant_id,
        session_id = id,
        price_cents = session.price_cents,
        ledger_entry = transaction.as_ref().map(|t| t.id),
        "Session completed"
    );
    Ok(Json(CompletedSession {
        session,
        transaction,
    }))
}

/// POST /api/v1/sessions/{id}/cancel
pub async fn cancel(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<TattooSession>> {
    move_to(&state, auth.tenant_id, id, SessionStatus::Cancelled).await
}

/// POST /api/v1/sessions/{id}/no-show
pub async fn no_show(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<TattooSession>> {
    move_to(&state, auth.tenant_id, id, SessionStatus::NoShow).await
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn find_session(state: &AppState, tenant_id: DbId, id: DbId) -> AppResult<TattooSession> {
    TattooSessionRepo::find_by_id(&state.pool, tenant_id, id)
        .await?
        .ok_or(AppError::not_found("TattooSession", id))
}

/// The row moved between our read and the conditional update.
fn status_changed(id: DbId) -> AppError {
    AppError::Core(CoreError::Conflict(format!(
        "Session {id} changed status concurrently; reload and retry"
    )))
}

async fn move_to(
    state: &AppState,
    tenant_id: DbId,
    id: DbId,
    target: SessionStatus,
) -> AppResult<Json<TattooSession>> {
    let existing = find_session(state, tenant_id, id).await?;
    let current = SessionStatus::from_id(existing.status_id)?;
    validate_transition(current, target)?;

    let session = TattooSessionRepo::transition(&state.pool, tenant_id, id, current, target)
        .await?
        .ok_or_else(|| status_changed(id))?;
    Ok(Json(session))
}

/// Verify that the optional references of a session belong to the tenant,
/// and that a procedure belongs to the session's client.
async fn check_references(
    state: &AppState,
    tenant_id: DbId,
    client_id: DbId,
    procedure_id: Option<DbId>,
    service_type_id: Option<DbId>,
    artist_id: Option<DbId>,
) -> AppResult<()> {
    if let Some(procedure_id) = procedure_id {
        let procedure = ownership::procedure(state, tenant_id, procedure_id).await?;
        if procedure.client_id != client_id {
            return Err(AppError::Core(CoreError::Validation(format!(
                "procedure {procedure_id} belongs to another client"
            ))));
        }
    }
    ownership::optional_service_type(state, tenant_id, service_type_id).await?;
    if let Some(artist_id) = artist_id {
        ownership::member(state, tenant_id, artist_id).await?;
    }
    Ok(())
}
