//! Public home endpoints: live status and the annual savings simulator

use axum::{extract::Query, Json};

use crate::{
    error::{AppError, AppResult},
    models::home::{AnnualSavings, GymStatus, SavingsQuery},
    services::{pricing, schedule},
};

use super::ApiResponse;

/// Current open/closed status from the fixed weekly schedule
#[utoipa::path(
    get,
    path = "/homev2/status",
    tag = "home",
    responses(
        (status = 200, description = "Current gym status", body = ApiResponse<GymStatus>)
    )
)]
pub async fn status() -> Json<ApiResponse<GymStatus>> {
    Json(ApiResponse::new(schedule::current_status()))
}

/// Simulate the discounted annual price for a given plan price
#[utoipa::path(
    get,
    path = "/homev2/annual-savings",
    tag = "home",
    params(SavingsQuery),
    responses(
        (status = 200, description = "Savings simulation", body = ApiResponse<AnnualSavings>),
        (status = 400, description = "Invalid price")
    )
)]
pub async fn annual_savings(
    Query(query): Query<SavingsQuery>,
) -> AppResult<Json<ApiResponse<AnnualSavings>>> {
    if !query.monthly_price.is_finite() || query.monthly_price <= 0.0 {
        return Err(AppError::Validation(
            "monthlyPrice must be a positive number".to_string(),
        ));
    }

    Ok(Json(ApiResponse::new(pricing::annual_savings(
        query.monthly_price,
        query.billing_cycle,
    ))))
}
