//! Handlers for the `/transactions` resource (the ledger). Owner only.
//!
//! Entries generated by completing a session are read-only here; they
//! follow their session instead.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use inkstudio_core::ledger::{ensure_editable, validate_entry};
use inkstudio_core::types::DbId;
use inkstudio_core::validation::validate_date_range;
use inkstudio_db::models::transaction::{
    CreateTransaction, Transaction, TransactionListFilter, UpdateTransaction,
};
use inkstudio_db::repositories::TransactionRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::middleware::rbac::RequireOwner;
use crate::query::page_bounds;
use crate::state::AppState;

/// Query parameters for `GET /transactions`.
#[derive(Debug, Default, Deserialize)]
pub struct TransactionListParams {
    pub kind: Option<String>,
    pub category: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// POST /api/v1/transactions
pub async fn create(
    State(state): State<AppState>,
    RequireOwner(auth): RequireOwner,
    ValidatedJson(input): ValidatedJson<CreateTransaction>,
) -> AppResult<(StatusCode, Json<Transaction>)> {
    validate_entry(
        Some(&input.kind),
        Some(&input.category),
        Some(input.amount_cents),
        input.payment_method.as_deref(),
    )?;

    let transaction = TransactionRepo::create(&state.pool, auth.tenant_id, &input).await?;
    Ok((StatusCode::CREATED, Json(transaction)))
}

/// GET /api/v1/transactions
pub async fn list(
    State(state): State<AppState>,
    RequireOwner(auth): RequireOwner,
    Query(params): Query<TransactionListParams>,
) -> AppResult<Json<Vec<Transaction>>> {
    validate_entry(params.kind.as_deref(), None, None, None)?;
    validate_date_range(params.from.as_ref(), params.to.as_ref())?;
    let (limit, offset) = page_bounds(params.limit, params.offset);

    let filter = TransactionListFilter {
        kind: params.kind,
        category: params.category,
        from: params.from,
        to: params.to,
        limit,
        offset,
    };
    let items = TransactionRepo::list(&state.pool, auth.tenant_id, &filter).await?;
    Ok(Json(items))
}

/// GET /api/v1/transactions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireOwner(auth): RequireOwner,
    Path(id): Path<DbId>,
) -> AppResult<Json<Transaction>> {
    Ok(Json(find_transaction(&state, auth.tenant_id, id).await?))
}

/// PATCH /api/v1/transactions/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireOwner(auth): RequireOwner,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateTransaction>,
) -> AppResult<Json<Transaction>> {
    let existing = find_transaction(&state, auth.tenant_id, id).await?;
    ensure_editable(existing.session_id)?;
    validate_entry(
        input.kind.as_deref(),
        input.category.as_deref(),
        input.amount_cents,
        input.payment_method.as_deref(),
    )?;

    let transaction = TransactionRepo::update(&state.pool, auth.tenant_id, id, &input)
        .await?
        .ok_or(AppError::not_found("Transaction", id))?;
    Ok(Json(transaction))
}

/// DELETE /api/v1/transactions/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireOwner(auth): RequireOwner,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let existing = find_transaction(&state, auth.tenant_id, id).await?;
    ensure_editable(existing.session_id)?;

    if TransactionRepo::delete(&state.pool, auth.tenant_id, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Transaction", id))
    }
}

async fn find_transaction(state: &AppState, tenant_id: DbId, id: DbId) -> AppResult<Transaction> {
    TransactionRepo::find_by_id(&state.pool, tenant_id, id)
        .await?
        .ok_or(AppError::not_found("Transaction", id))
}
