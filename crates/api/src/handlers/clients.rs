//! Handlers for the `/clients` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use inkstudio_core::pagination::{ilike_pattern, MAX_PAGE_LIMIT};
use inkstudio_core::types::DbId;
use inkstudio_db::models::client::{Client, CreateClient, UpdateClient};
use inkstudio_db::models::dashboard::ClientHistory;
use inkstudio_db::repositories::{ClientRepo, ProcedureRepo, TattooSessionRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::handlers::ownership;
use crate::middleware::auth::AuthUser;
use crate::query::page_bounds;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /clients`.
#[derive(Debug, Default, Deserialize)]
pub struct ClientListParams {
    /// Case-insensitive match on name, e-mail or phone.
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// POST /api/v1/clients
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(input): ValidatedJson<CreateClient>,
) -> AppResult<(StatusCode, Json<Client>)> {
    let client = ClientRepo::create(&state.pool, auth.tenant_id, &input).await?;
    Ok((StatusCode::CREATED, Json(client)))
}

/// GET /api/v1/clients
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<ClientListParams>,
) -> AppResult<Json<Vec<Client>>> {
    let (limit, offset) = page_bounds(params.limit, params.offset);
    let pattern = ilike_pattern(params.search.as_deref());
    let clients =
        ClientRepo::list(&state.pool, auth.tenant_id, pattern.as_deref(), limit, offset).await?;
    Ok(Json(clients))
}

/// GET /api/v1/clients/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Client>> {
    let client = ownership::client(&state, auth.tenant_id, id).await?;
    Ok(Json(client))
}

/// PATCH /api/v1/clients/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateClient>,
) -> AppResult<Json<Client>> {
    let client = ClientRepo::update(&state.pool, auth.tenant_id, id, &input)
        .await?
        .ok_or(AppError::not_found("Client", id))?;
    Ok(Json(client))
}

/// DELETE /api/v1/clients/{id}
///
/// Cascades to the client's procedures and sessions; ledger entries of
/// those sessions stay with a NULL `session_id`.
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ClientRepo::delete(&state.pool, auth.tenant_id, id).await? {
        tracing::info!(tenant_id = auth.tenant_id, client_id = id, "Client deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Client", id))
    }
}

/// GET /api/v1/clients/{id}/history
pub async fn history(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ClientHistory>>> {
    let client = ownership::client(&state, auth.tenant_id, id).await?;

    let sessions = TattooSessionRepo::list_for_client(&state.pool, auth.tenant_id, id).await?;
    let procedures =
        ProcedureRepo::list(&state.pool, auth.tenant_id, Some(id), MAX_PAGE_LIMIT, 0).await?;
    let (total_spent_cents, completed_sessions) =
        TattooSessionRepo::client_totals(&state.pool, auth.tenant_id, id).await?;

    Ok(Json(DataResponse {
        data: ClientHistory {
            client,
            sessions,
            procedures,
            total_spent_cents,
            completed_sessions,
        },
    }))
}
