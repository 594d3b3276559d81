//! Lookups that prove a referenced row belongs to the caller's tenant.
//!
//! A row of another tenant is reported exactly like a missing one.

use inkstudio_core::types::DbId;
use inkstudio_db::models::client::Client;
use inkstudio_db::models::procedure::Procedure;
use inkstudio_db::models::service_type::ServiceType;
use inkstudio_db::models::user::User;
use inkstudio_db::repositories::{ClientRepo, ProcedureRepo, ServiceTypeRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

pub async fn client(state: &AppState, tenant_id: DbId, id: DbId) -> AppResult<Client> {
    ClientRepo::find_by_id(&state.pool, tenant_id, id)
        .await?
        .ok_or(AppError::not_found("Client", id))
}

pub async fn procedure(state: &AppState, tenant_id: DbId, id: DbId) -> AppResult<Procedure> {
    ProcedureRepo::find_by_id(&state.pool, tenant_id, id)
        .await?
        .ok_or(AppError::not_found("Procedure", id))
}

pub async fn service_type(state: &AppState, tenant_id: DbId, id: DbId) -> AppResult<ServiceType> {
    ServiceTypeRepo::find_by_id(&state.pool, tenant_id, id)
        .await?
        .ok_or(AppError::not_found("ServiceType", id))
}

pub async fn member(state: &AppState, tenant_id: DbId, id: DbId) -> AppResult<User> {
    UserRepo::find_in_tenant(&state.pool, tenant_id, id)
        .await?
        .ok_or(AppError::not_found("User", id))
}

/// Check an optional service type reference.
pub async fn optional_service_type(
    state: &AppState,
    tenant_id: DbId,
    id: Option<DbId>,
) -> AppResult<Option<ServiceType>> {
    match id {
        Some(id) => service_type(state, tenant_id, id).await.map(Some),
        None => Ok(None),
    }
}
