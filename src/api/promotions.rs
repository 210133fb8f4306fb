//! Promotion management endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::promotion::{CreatePromotion, Promotion, PromotionQuery, UpdatePromotion},
    AppState,
};

use super::{AdminUser, AppJson};

/// List promotions; the public listing only shows active, unexpired ones
#[utoipa::path(
    get,
    path = "/promotions",
    tag = "promotions",
    params(PromotionQuery),
    responses(
        (status = 200, description = "List of promotions", body = Vec<Promotion>),
        (status = 401, description = "Session required for the full listing")
    )
)]
pub async fn list_promotions(
    State(state): State<AppState>,
    session: Option<AdminUser>,
    Query(query): Query<PromotionQuery>,
) -> AppResult<Json<Vec<Promotion>>> {
    let include_all = query.all.unwrap_or(false);
    if include_all && session.is_none() {
        return Err(AppError::Authentication(
            "Session required to list all promotions".to_string(),
        ));
    }

    let promotions = state.services.promotions.list(include_all).await?;
    Ok(Json(promotions))
}

/// Get promotion details by ID
#[utoipa::path(
    get,
    path = "/promotions/{id}",
    tag = "promotions",
    params(
        ("id" = i32, Path, description = "Promotion ID")
    ),
    responses(
        (status = 200, description = "Promotion details", body = Promotion),
        (status = 404, description = "Promotion not found")
    )
)]
pub async fn get_promotion(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Promotion>> {
    let promotion = state.services.promotions.get(id).await?;
    Ok(Json(promotion))
}

/// Create a promotion; both codes are generated server-side
#[utoipa::path(
    post,
    path = "/promotions",
    tag = "promotions",
    request_body = CreatePromotion,
    responses(
        (status = 201, description = "Promotion created", body = Promotion),
        (status = 400, description = "Invalid input or non-future validity date"),
        (status = 401, description = "Not authenticated"),
        (status = 500, description = "Code generation exhausted or persistence failure")
    )
)]
pub async fn create_promotion(
    State(state): State<AppState>,
    AdminUser(claims): AdminUser,
    AppJson(promotion): AppJson<CreatePromotion>,
) -> AppResult<(StatusCode, Json<Promotion>)> {
    claims.require_editor()?;

    let created = state.services.promotions.create(promotion).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a promotion (codes are immutable)
#[utoipa::path(
    put,
    path = "/promotions/{id}",
    tag = "promotions",
    params(
        ("id" = i32, Path, description = "Promotion ID")
    ),
    request_body = UpdatePromotion,
    responses(
        (status = 200, description = "Promotion updated", body = Promotion),
        (status = 404, description = "Promotion not found")
    )
)]
pub async fn update_promotion(
    State(state): State<AppState>,
    AdminUser(claims): AdminUser,
    Path(id): Path<i32>,
    AppJson(promotion): AppJson<UpdatePromotion>,
) -> AppResult<Json<Promotion>> {
    claims.require_editor()?;

    let updated = state.services.promotions.update(id, promotion).await?;
    Ok(Json(updated))
}

/// Delete a promotion
#[utoipa::path(
    delete,
    path = "/promotions/{id}",
    tag = "promotions",
    params(
        ("id" = i32, Path, description = "Promotion ID")
    ),
    responses(
        (status = 204, description = "Promotion deleted"),
        (status = 404, description = "Promotion not found")
    )
)]
pub async fn delete_promotion(
    State(state): State<AppState>,
    AdminUser(claims): AdminUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    claims.require_editor()?;

    state.services.promotions.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
