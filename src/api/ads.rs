//! Marketing banner endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::ad::{Ad, AdQuery, CreateAd, UpdateAd},
    AppState,
};

use super::{AdminUser, AppJson};

/// List banners; the public listing only shows active banners inside
/// their date window
#[utoipa::path(
    get,
    path = "/ads",
    tag = "ads",
    params(AdQuery),
    responses(
        (status = 200, description = "List of banners", body = Vec<Ad>),
        (status = 401, description = "Session required for the full listing")
    )
)]
pub async fn list_ads(
    State(state): State<AppState>,
    session: Option<AdminUser>,
    Query(query): Query<AdQuery>,
) -> AppResult<Json<Vec<Ad>>> {
    let include_all = query.all.unwrap_or(false);
    if include_all && session.is_none() {
        return Err(AppError::Authentication(
            "Session required to list all ads".to_string(),
        ));
    }

    let ads = state
        .services
        .content
        .list_ads(query.position.as_deref(), include_all)
        .await?;
    Ok(Json(ads))
}

/// Get banner details by ID
#[utoipa::path(
    get,
    path = "/ads/{id}",
    tag = "ads",
    params(
        ("id" = i32, Path, description = "Ad ID")
    ),
    responses(
        (status = 200, description = "Banner details", body = Ad),
        (status = 404, description = "Ad not found")
    )
)]
pub async fn get_ad(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<Json<Ad>> {
    let ad = state.services.content.get_ad(id).await?;
    Ok(Json(ad))
}

/// Create a banner
#[utoipa::path(
    post,
    path = "/ads",
    tag = "ads",
    request_body = CreateAd,
    responses(
        (status = 201, description = "Banner created", body = Ad),
        (status = 400, description = "Invalid input or unknown position"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn create_ad(
    State(state): State<AppState>,
    AdminUser(claims): AdminUser,
    AppJson(ad): AppJson<CreateAd>,
) -> AppResult<(StatusCode, Json<Ad>)> {
    claims.require_editor()?;

    let created = state.services.content.create_ad(ad).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a banner
#[utoipa::path(
    put,
    path = "/ads/{id}",
    tag = "ads",
    params(
        ("id" = i32, Path, description = "Ad ID")
    ),
    request_body = UpdateAd,
    responses(
        (status = 200, description = "Banner updated", body = Ad),
        (status = 404, description = "Ad not found")
    )
)]
pub async fn update_ad(
    State(state): State<AppState>,
    AdminUser(claims): AdminUser,
    Path(id): Path<i32>,
    AppJson(ad): AppJson<UpdateAd>,
) -> AppResult<Json<Ad>> {
    claims.require_editor()?;

    let updated = state.services.content.update_ad(id, ad).await?;
    Ok(Json(updated))
}

/// Delete a banner
#[utoipa::path(
    delete,
    path = "/ads/{id}",
    tag = "ads",
    params(
        ("id" = i32, Path, description = "Ad ID")
    ),
    responses(
        (status = 204, description = "Banner deleted"),
        (status = 404, description = "Ad not found")
    )
)]
pub async fn delete_ad(
    State(state): State<AppState>,
    AdminUser(claims): AdminUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    claims.require_editor()?;

    state.services.content.delete_ad(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
