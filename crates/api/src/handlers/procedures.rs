//! Handlers for the `/procedures` resource.
//!
//! A procedure is a piece of work for one client that may span several
//! sessions. Its status travels as a name and is stored as a lookup id.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use inkstudio_core::status::ProcedureStatus;
use inkstudio_core::types::DbId;
use inkstudio_db::models::procedure::{CreateProcedure, Procedure, UpdateProcedure};
use inkstudio_db::repositories::ProcedureRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::handlers::ownership;
use crate::middleware::auth::AuthUser;
use crate::query::page_bounds;
use crate::state::AppState;

/// Query parameters for `GET /procedures`.
#[derive(Debug, Default, Deserialize)]
pub struct ProcedureListParams {
    pub client_id: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// POST /api/v1/procedures
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(input): ValidatedJson<CreateProcedure>,
) -> AppResult<(StatusCode, Json<Procedure>)> {
    let status = match input.status.as_deref() {
        Some(name) => ProcedureStatus::from_name(name)?,
        None => ProcedureStatus::Planned,
    };
    ownership::client(&state, auth.tenant_id, input.client_id).await?;
    ownership::optional_service_type(&state, auth.tenant_id, input.service_type_id).await?;

    let procedure = ProcedureRepo::create(&state.pool, auth.tenant_id, &input, status.id()).await?;
    Ok((StatusCode::CREATED, Json(procedure)))
}

/// GET /api/v1/procedures?client_id=&limit=&offset=
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<ProcedureListParams>,
) -> AppResult<Json<Vec<Procedure>>> {
    let (limit, offset) = page_bounds(params.limit, params.offset);
    let items =
        ProcedureRepo::list(&state.pool, auth.tenant_id, params.client_id, limit, offset).await?;
    Ok(Json(items))
}

/// GET /api/v1/procedures/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Procedure>> {
    Ok(Json(ownership::procedure(&state, auth.tenant_id, id).await?))
}

/// PATCH /api/v1/procedures/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateProcedure>,
) -> AppResult<Json<Procedure>> {
    let status_id = input
        .status
        .as_deref()
        .map(ProcedureStatus::from_name)
        .transpose()?
        .map(ProcedureStatus::id);
    ownership::optional_service_type(&state, auth.tenant_id, input.service_type_id).await?;

    let procedure = ProcedureRepo::update(&state.pool, auth.tenant_id, id, &input, status_id)
        .await?
        .ok_or(AppError::not_found("Procedure", id))?;
    Ok(Json(procedure))
}

/// DELETE /api/v1/procedures/{id}
///
/// Sessions logged against it are kept and lose the reference.
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ProcedureRepo::delete(&state.pool, auth.tenant_id, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Procedure", id))
    }
}
