//! Handlers for the `/service-types` resource (the tenant's catalogue).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use inkstudio_core::service_type::{validate_service_type, CATEGORY_TATTOO};
use inkstudio_core::types::DbId;
use inkstudio_db::models::service_type::{CreateServiceType, ServiceType, UpdateServiceType};
use inkstudio_db::repositories::ServiceTypeRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::handlers::ownership;
use crate::middleware::auth::AuthUser;
use crate::query::IncludeInactiveParams;
use crate::state::AppState;

/// POST /api/v1/service-types
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(input): ValidatedJson<CreateServiceType>,
) -> AppResult<(StatusCode, Json<ServiceType>)> {
    let category = input.category.as_deref().unwrap_or(CATEGORY_TATTOO);
    validate_service_type(
        Some(category),
        input.default_duration_minutes,
        input.base_price_cents,
    )?;

    let service_type = ServiceTypeRepo::create(&state.pool, auth.tenant_id, &input, category).await?;
    Ok((StatusCode::CREATED, Json(service_type)))
}

/// GET /api/v1/service-types?include_inactive=
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<IncludeInactiveParams>,
) -> AppResult<Json<Vec<ServiceType>>> {
    let items =
        ServiceTypeRepo::list(&state.pool, auth.tenant_id, params.include_inactive).await?;
    Ok(Json(items))
}

/// GET /api/v1/service-types/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<ServiceType>> {
    Ok(Json(ownership::service_type(&state, auth.tenant_id, id).await?))
}

/// PATCH /api/v1/service-types/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateServiceType>,
) -> AppResult<Json<ServiceType>> {
    validate_service_type(
        input.category.as_deref(),
        input.default_duration_minutes,
        input.base_price_cents,
    )?;

    let service_type = ServiceTypeRepo::update(&state.pool, auth.tenant_id, id, &input)
        .await?
        .ok_or(AppError::not_found("ServiceType", id))?;
    Ok(Json(service_type))
}

/// DELETE /api/v1/service-types/{id}
///
/// Sessions and procedures that used it keep their rows with no service type.
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ServiceTypeRepo::delete(&state.pool, auth.tenant_id, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("ServiceType", id))
    }
}
