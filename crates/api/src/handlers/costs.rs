//! Handlers for `/costs/fixed`, `/costs/variable` and `/costs/summary`.
//!
//! Both cost kinds share one set of handlers; the `{kind}` path segment
//! picks the table. Owner only.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use inkstudio_core::error::CoreError;
use inkstudio_core::types::DbId;
use inkstudio_db::models::cost::{Cost, CostTable, CostTotals, CreateCost, UpdateCost};
use inkstudio_db::repositories::CostRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::rbac::RequireOwner;
use crate::response::DataResponse;
use crate::state::AppState;

/// Map the `{kind}` path segment to a table.
fn cost_table(kind: &str) -> AppResult<CostTable> {
    match kind {
        "fixed" => Ok(CostTable::Fixed),
        "variable" => Ok(CostTable::Variable),
        other => Err(AppError::Core(CoreError::Validation(format!(
            "cost kind must be 'fixed' or 'variable', got '{other}'"
        )))),
    }
}

/// POST /api/v1/costs/{kind}
pub async fn create(
    State(state): State<AppState>,
    RequireOwner(auth): RequireOwner,
    Path(kind): Path<String>,
    ValidatedJson(input): ValidatedJson<CreateCost>,
) -> AppResult<(StatusCode, Json<Cost>)> {
    let table = cost_table(&kind)?;
    let cost = CostRepo::create(&state.pool, table, auth.tenant_id, &input).await?;
    Ok((StatusCode::CREATED, Json(cost)))
}

/// GET /api/v1/costs/{kind}
pub async fn list(
    State(state): State<AppState>,
    RequireOwner(auth): RequireOwner,
    Path(kind): Path<String>,
) -> AppResult<Json<Vec<Cost>>> {
    let table = cost_table(&kind)?;
    Ok(Json(CostRepo::list(&state.pool, table, auth.tenant_id).await?))
}

/// GET /api/v1/costs/{kind}/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireOwner(auth): RequireOwner,
    Path((kind, id)): Path<(String, DbId)>,
) -> AppResult<Json<Cost>> {
    let table = cost_table(&kind)?;
    let cost = CostRepo::find_by_id(&state.pool, table, auth.tenant_id, id)
        .await?
        .ok_or(AppError::not_found(table.entity_name(), id))?;
    Ok(Json(cost))
}

/// PATCH /api/v1/costs/{kind}/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireOwner(auth): RequireOwner,
    Path((kind, id)): Path<(String, DbId)>,
    ValidatedJson(input): ValidatedJson<UpdateCost>,
) -> AppResult<Json<Cost>> {
    let table = cost_table(&kind)?;
    let cost = CostRepo::update(&state.pool, table, auth.tenant_id, id, &input)
        .await?
        .ok_or(AppError::not_found(table.entity_name(), id))?;
    Ok(Json(cost))
}

/// DELETE /api/v1/costs/{kind}/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireOwner(auth): RequireOwner,
    Path((kind, id)): Path<(String, DbId)>,
) -> AppResult<StatusCode> {
    let table = cost_table(&kind)?;
    if CostRepo::delete(&state.pool, table, auth.tenant_id, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(table.entity_name(), id))
    }
}

/// GET /api/v1/costs/summary
///
/// Active rows only.
pub async fn summary(
    State(state): State<AppState>,
    RequireOwner(auth): RequireOwner,
) -> AppResult<Json<DataResponse<CostTotals>>> {
    let totals = CostRepo::totals(&state.pool, auth.tenant_id).await?;
    Ok(Json(DataResponse { data: totals }))
}
