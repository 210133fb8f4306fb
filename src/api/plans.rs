//! Membership plan endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::plan::{CreatePlan, Plan, PlanQuery, UpdatePlan},
    AppState,
};

use super::{AdminUser, AppJson};

/// List plans ordered for display; the public listing only shows active plans
#[utoipa::path(
    get,
    path = "/plans",
    tag = "plans",
    params(PlanQuery),
    responses(
        (status = 200, description = "List of plans", body = Vec<Plan>),
        (status = 401, description = "Session required for the full listing")
    )
)]
pub async fn list_plans(
    State(state): State<AppState>,
    session: Option<AdminUser>,
    Query(query): Query<PlanQuery>,
) -> AppResult<Json<Vec<Plan>>> {
    let include_all = query.all.unwrap_or(false);
    if include_all && session.is_none() {
        return Err(AppError::Authentication(
            "Session required to list all plans".to_string(),
        ));
    }

    let plans = state.services.content.list_plans(include_all).await?;
    Ok(Json(plans))
}

/// Get plan details by ID
#[utoipa::path(
    get,
    path = "/plans/{id}",
    tag = "plans",
    params(
        ("id" = i32, Path, description = "Plan ID")
    ),
    responses(
        (status = 200, description = "Plan details", body = Plan),
        (status = 404, description = "Plan not found")
    )
)]
pub async fn get_plan(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Plan>> {
    let plan = state.services.content.get_plan(id).await?;
    Ok(Json(plan))
}

/// Create a plan
#[utoipa::path(
    post,
    path = "/plans",
    tag = "plans",
    request_body = CreatePlan,
    responses(
        (status = 201, description = "Plan created", body = Plan),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn create_plan(
    State(state): State<AppState>,
    AdminUser(claims): AdminUser,
    AppJson(plan): AppJson<CreatePlan>,
) -> AppResult<(StatusCode, Json<Plan>)> {
    claims.require_editor()?;

    let created = state.services.content.create_plan(plan).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a plan
#[utoipa::path(
    put,
    path = "/plans/{id}",
    tag = "plans",
    params(
        ("id" = i32, Path, description = "Plan ID")
    ),
    request_body = UpdatePlan,
    responses(
        (status = 200, description = "Plan updated", body = Plan),
        (status = 404, description = "Plan not found")
    )
)]
pub async fn update_plan(
    State(state): State<AppState>,
    AdminUser(claims): AdminUser,
    Path(id): Path<i32>,
    AppJson(plan): AppJson<UpdatePlan>,
) -> AppResult<Json<Plan>> {
    claims.require_editor()?;

    let updated = state.services.content.update_plan(id, plan).await?;
    Ok(Json(updated))
}

/// Delete a plan
#[utoipa::path(
    delete,
    path = "/plans/{id}",
    tag = "plans",
    params(
        ("id" = i32, Path, description = "Plan ID")
    ),
    responses(
        (status = 204, description = "Plan deleted"),
        (status = 404, description = "Plan not found")
    )
)]
pub async fn delete_plan(
    State(state): State<AppState>,
    AdminUser(claims): AdminUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    claims.require_editor()?;

    state.services.content.delete_plan(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
