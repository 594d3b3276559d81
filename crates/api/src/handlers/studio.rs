//! Handlers for `/studio`: commission configuration, per-artist benefits
//! and the payout report.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{NaiveDate, Utc};
use inkstudio_core::commission::{
    split, validate_payout_day, validate_share, ArtistPayout, ArtistSales, SplitPolicy,
};
use inkstudio_core::types::{Cents, DbId};
use inkstudio_db::models::artist_benefit::{
    ArtistBenefit, CreateArtistBenefit, UpdateArtistBenefit,
};
use inkstudio_db::models::studio_config::{PutStudioConfig, StudioConfigResponse};
use inkstudio_db::repositories::{
    ArtistBenefitRepo, CostRepo, StudioConfigRepo, TattooSessionRepo,
};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::handlers::ownership;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireOwner;
use crate::query::DateRangeParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Response payload of `GET /studio/payouts`.
#[derive(Debug, Serialize)]
pub struct PayoutReport {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub default_share_percent: f64,
    pub studio_covers_materials: bool,
    pub artists: Vec<ArtistPayout>,
    pub total_gross_cents: Cents,
    pub total_artist_payout_cents: Cents,
    pub total_studio_share_cents: Cents,
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// GET /api/v1/studio/config
pub async fn get_config(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<StudioConfigResponse>> {
    let row = StudioConfigRepo::find(&state.pool, auth.tenant_id).await?;
    Ok(Json(StudioConfigResponse::from_row(row.as_ref())))
}

/// PUT /api/v1/studio/config
pub async fn put_config(
    State(state): State<AppState>,
    RequireOwner(auth): RequireOwner,
    ValidatedJson(input): ValidatedJson<PutStudioConfig>,
) -> AppResult<Json<StudioConfigResponse>> {
    let share = input.share_percent();
    let payout_day = input.payout_day();
    validate_share(share, "default_artist_share_percent")?;
    validate_payout_day(payout_day)?;

    let row = StudioConfigRepo::upsert(
        &state.pool,
        auth.tenant_id,
        share,
        input.covers_materials(),
        payout_day,
    )
    .await?;
    Ok(Json(StudioConfigResponse::from_row(Some(&row))))
}

// ---------------------------------------------------------------------------
// Benefits
// ---------------------------------------------------------------------------

/// POST /api/v1/studio/benefits
///
/// One benefit per artist; a second one is a 409.
pub async fn create_benefit(
    State(state): State<AppState>,
    RequireOwner(auth): RequireOwner,
    ValidatedJson(input): ValidatedJson<CreateArtistBenefit>,
) -> AppResult<(StatusCode, Json<ArtistBenefit>)> {
    validate_share(input.share_percent, "share_percent")?;
    ownership::member(&state, auth.tenant_id, input.user_id).await?;

    let benefit = ArtistBenefitRepo::create(&state.pool, auth.tenant_id, &input).await?;
    Ok((StatusCode::CREATED, Json(benefit)))
}

/// GET /api/v1/studio/benefits
pub async fn list_benefits(
    State(state): State<AppState>,
    RequireOwner(auth): RequireOwner,
) -> AppResult<Json<Vec<ArtistBenefit>>> {
    Ok(Json(ArtistBenefitRepo::list(&state.pool, auth.tenant_id).await?))
}

/// GET /api/v1/studio/benefits/{id}
pub async fn get_benefit(
    State(state): State<AppState>,
    RequireOwner(auth): RequireOwner,
    Path(id): Path<DbId>,
) -> AppResult<Json<ArtistBenefit>> {
    let benefit = ArtistBenefitRepo::find_by_id(&state.pool, auth.tenant_id, id)
        .await?
        .ok_or(AppError::not_found("ArtistBenefit", id))?;
    Ok(Json(benefit))
}

/// PATCH /api/v1/studio/benefits/{id}
pub async fn update_benefit(
    State(state): State<AppState>,
    RequireOwner(auth): RequireOwner,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateArtistBenefit>,
) -> AppResult<Json<ArtistBenefit>> {
    if let Some(share) = input.share_percent {
        validate_share(share, "share_percent")?;
    }
    let benefit = ArtistBenefitRepo::update(&state.pool, auth.tenant_id, id, &input)
        .await?
        .ok_or(AppError::not_found("ArtistBenefit", id))?;
    Ok(Json(benefit))
}

/// DELETE /api/v1/studio/benefits/{id}
pub async fn delete_benefit(
    State(state): State<AppState>,
    RequireOwner(auth): RequireOwner,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ArtistBenefitRepo::delete(&state.pool, auth.tenant_id, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("ArtistBenefit", id))
    }
}

// ---------------------------------------------------------------------------
// Payouts
// ---------------------------------------------------------------------------

/// GET /api/v1/studio/payouts?from=&to=
///
/// Per-artist split of completed sessions in the range (default: current
/// month). An active benefit replaces the default share for its artist.
pub async fn payouts(
    State(state): State<AppState>,
    RequireOwner(auth): RequireOwner,
    Query(range): Query<DateRangeParams>,
) -> AppResult<Json<DataResponse<PayoutReport>>> {
    let (from, to) = range.or_month_of(Utc::now().date_naive())?;

    let config = StudioConfigResponse::from_row(
        StudioConfigRepo::find(&state.pool, auth.tenant_id)
            .await?
            .as_ref(),
    );
    let materials_per_session_cents = if config.studio_covers_materials {
        Some(CostRepo::totals(&state.pool, auth.tenant_id).await?.per_session_variable_cents)
    } else {
        None
    };
    let policy = SplitPolicy {
        default_share_percent: config.default_artist_share_percent,
        materials_per_session_cents,
    };

    let overrides: HashMap<DbId, f64> =
        ArtistBenefitRepo::active_overrides(&state.pool, auth.tenant_id)
            .await?
            .into_iter()
            .collect();

    let sales = TattooSessionRepo::artist_sales(&state.pool, auth.tenant_id, from, to).await?;
    let artists: Vec<ArtistPayout> = sales
        .into_iter()
        .map(|row| {
            let sales = ArtistSales {
                artist_id: row.artist_id,
                artist_name: row.artist_name,
                session_count: row.session_count,
                gross_cents: row.gross_cents,
            };
            split(&sales, &policy, overrides.get(&sales.artist_id).copied())
        })
        .collect();

    let report = PayoutReport {
        from,
        to,
        default_share_percent: policy.default_share_percent,
        studio_covers_materials: config.studio_covers_materials,
        total_gross_cents: artists.iter().map(|a| a.gross_cents).sum(),
        total_artist_payout_cents: artists.iter().map(|a| a.artist_payout_cents).sum(),
        total_studio_share_cents: artists.iter().map(|a| a.studio_share_cents).sum(),
        artists,
    };
    Ok(Json(DataResponse { data: report }))
}
