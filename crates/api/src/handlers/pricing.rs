//! Handlers for `/pricing`: the cost-based calculator, the hourly rate,
//! the history-based price suggestion and its seed data.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use inkstudio_core::error::CoreError;
use inkstudio_core::pricing::{
    calculate, hourly_rate, validate_margin, CostInputs, HourlyRate, PriceBreakdown,
};
use inkstudio_core::service_type::{validate_service_type, CATEGORY_TATTOO};
use inkstudio_core::session_lifecycle::{validate_figures, SessionFigures};
use inkstudio_core::suggestion::{
    needs_seed_data, suggest, PriceSuggestion, SizeBucket, MAX_SAMPLES_PER_SOURCE,
};
use inkstudio_core::types::DbId;
use inkstudio_core::validation::validate_non_negative_cents;
use inkstudio_db::models::seed_training_data::{CreateSeedTrainingData, SeedTrainingData};
use inkstudio_db::models::tattoo_session::PriceFilter;
use inkstudio_db::repositories::{
    CostRepo, SeedTrainingDataRepo, TattooSessionRepo, WorkSettingsRepo,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::handlers::ownership;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireOwner;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Body of `POST /pricing/calculate`.
#[derive(Debug, Deserialize, Validate)]
pub struct CalculateRequest {
    pub duration_minutes: i32,
    pub extra_material_cents: Option<i64>,
    #[serde(default = "default_true")]
    pub include_variable_costs: bool,
    /// Overrides the stored margin for this quote only.
    pub profit_margin_percent: Option<f64>,
}

fn default_true() -> bool {
    true
}

/// Body of `POST /pricing/suggest`. Every filter is optional.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct SuggestRequest {
    pub service_type_id: Option<DbId>,
    #[validate(length(max = 80, message = "must be at most 80 characters"))]
    pub style: Option<String>,
    #[validate(length(max = 80, message = "must be at most 80 characters"))]
    pub body_region: Option<String>,
    pub size_cm: Option<f64>,
    pub is_color: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct SuggestionResponse {
    #[serde(flatten)]
    pub suggestion: PriceSuggestion,
    /// The size class the samples were matched on.
    pub size_bucket: Option<SizeBucket>,
}

// ---------------------------------------------------------------------------
// Calculator
// ---------------------------------------------------------------------------

/// POST /api/v1/pricing/calculate
pub async fn calculate_price(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(input): ValidatedJson<CalculateRequest>,
) -> AppResult<Json<DataResponse<PriceBreakdown>>> {
    let extra_material_cents = input.extra_material_cents.unwrap_or(0);
    validate_non_negative_cents(extra_material_cents, "extra_material_cents")?;

    let mut params = WorkSettingsRepo::parameters(&state.pool, auth.tenant_id).await?;
    if let Some(margin) = input.profit_margin_percent {
        validate_margin(margin)?;
        params.profit_margin_percent = margin;
    }
    let totals = CostRepo::totals(&state.pool, auth.tenant_id).await?;

    let inputs = CostInputs {
        duration_minutes: input.duration_minutes,
        monthly_fixed_cents: totals.monthly_fixed_cents,
        variable_cents: if input.include_variable_costs {
            totals.per_session_variable_cents
        } else {
            0
        },
        extra_material_cents,
    };
    let breakdown = calculate(&params, &inputs)?;
    Ok(Json(DataResponse { data: breakdown }))
}

/// GET /api/v1/pricing/hourly-rate
pub async fn get_hourly_rate(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<DataResponse<HourlyRate>>> {
    let params = WorkSettingsRepo::parameters(&state.pool, auth.tenant_id).await?;
    let totals = CostRepo::totals(&state.pool, auth.tenant_id).await?;
    let rate = hourly_rate(&params, totals.monthly_fixed_cents)?;
    Ok(Json(DataResponse { data: rate }))
}

// ---------------------------------------------------------------------------
// Suggestion
// ---------------------------------------------------------------------------

/// POST /api/v1/pricing/suggest
///
/// Own completed sessions first; seed samples top them up when there are
/// too few.
pub async fn suggest_price(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(input): ValidatedJson<SuggestRequest>,
) -> AppResult<Json<DataResponse<SuggestionResponse>>> {
    validate_figures(&SessionFigures {
        size_cm: input.size_cm,
        ..SessionFigures::default()
    })?;

    let service_category = match input.service_type_id {
        Some(id) => Some(ownership::service_type(&state, auth.tenant_id, id).await?.category),
        None => None,
    };
    let size_bucket = input.size_cm.map(SizeBucket::from_cm);
    let (size_min_cm, size_max_cm) = match size_bucket.map(SizeBucket::bounds_cm) {
        Some((min, max)) => (Some(min), max),
        None => (None, None),
    };

    let filter = PriceFilter {
        service_type_id: input.service_type_id,
        service_category,
        style: non_blank(input.style),
        body_region: non_blank(input.body_region),
        size_min_cm,
        size_max_cm,
        is_color: input.is_color,
    };

    let own = TattooSessionRepo::completed_prices(
        &state.pool,
        auth.tenant_id,
        &filter,
        MAX_SAMPLES_PER_SOURCE,
    )
    .await?;
    let seed = if needs_seed_data(own.len()) {
        SeedTrainingDataRepo::matching_prices(
            &state.pool,
            auth.tenant_id,
            &filter,
            MAX_SAMPLES_PER_SOURCE,
        )
        .await?
    } else {
        Vec::new()
    };

    let suggestion = suggest(&own, &seed);
    tracing::debug!(
        tenant_id = auth.tenant_id,
        own = suggestion.own_samples,
        seed = suggestion.seed_samples,
        "Price suggestion computed"
    );
    Ok(Json(DataResponse {
        data: SuggestionResponse {
            suggestion,
            size_bucket,
        },
    }))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// ---------------------------------------------------------------------------
// Seed data
// ---------------------------------------------------------------------------

/// GET /api/v1/pricing/seed-data
///
/// The tenant's own samples followed by the shared baseline.
pub async fn list_seed_data(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<Vec<SeedTrainingData>>> {
    let rows = SeedTrainingDataRepo::list_visible(&state.pool, auth.tenant_id).await?;
    Ok(Json(rows))
}

/// POST /api/v1/pricing/seed-data
pub async fn create_seed_data(
    State(state): State<AppState>,
    RequireOwner(auth): RequireOwner,
    ValidatedJson(input): ValidatedJson<CreateSeedTrainingData>,
) -> AppResult<(StatusCode, Json<SeedTrainingData>)> {
    let category = input.service_category.as_deref().unwrap_or(CATEGORY_TATTOO);
    validate_service_type(Some(category), None, None)?;
    validate_figures(&SessionFigures {
        size_cm: input.size_cm,
        ..SessionFigures::default()
    })?;

    let row = SeedTrainingDataRepo::create(&state.pool, auth.tenant_id, &input, category).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// DELETE /api/v1/pricing/seed-data/{id}
///
/// Only the tenant's own rows; shared rows answer 404.
pub async fn delete_seed_data(
    State(state): State<AppState>,
    RequireOwner(auth): RequireOwner,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if SeedTrainingDataRepo::delete(&state.pool, auth.tenant_id, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "SeedTrainingData",
            id,
        }))
    }
}
