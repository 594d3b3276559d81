//! Handlers for `/settings/work`.

use axum::extract::State;
use axum::Json;
use inkstudio_db::models::work_settings::{PutWorkSettings, WorkSettingsResponse};
use inkstudio_db::repositories::WorkSettingsRepo;

use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireOwner;
use crate::state::AppState;

/// GET /api/v1/settings/work
///
/// Returns the defaults (flagged `is_default`) until the owner saves.
pub async fn get_work(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<WorkSettingsResponse>> {
    let row = WorkSettingsRepo::find(&state.pool, auth.tenant_id).await?;
    Ok(Json(WorkSettingsResponse::from_row(row.as_ref())))
}

/// PUT /api/v1/settings/work
pub async fn put_work(
    State(state): State<AppState>,
    RequireOwner(auth): RequireOwner,
    ValidatedJson(input): ValidatedJson<PutWorkSettings>,
) -> AppResult<Json<WorkSettingsResponse>> {
    let parameters = input.into_parameters();
    parameters.validate()?;

    let row = WorkSettingsRepo::upsert(&state.pool, auth.tenant_id, &parameters).await?;
    tracing::info!(tenant_id = auth.tenant_id, "Work settings saved");
    Ok(Json(WorkSettingsResponse::from_row(Some(&row))))
}
