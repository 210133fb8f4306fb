//! Partner endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::partner::{CreatePartner, Partner, PartnerQuery, UpdatePartner},
    AppState,
};

use super::{AdminUser, AppJson};

/// List partners; the public listing only shows active ones
#[utoipa::path(
    get,
    path = "/partners",
    tag = "partners",
    params(PartnerQuery),
    responses(
        (status = 200, description = "List of partners", body = Vec<Partner>),
        (status = 401, description = "Session required for the full listing")
    )
)]
pub async fn list_partners(
    State(state): State<AppState>,
    session: Option<AdminUser>,
    Query(query): Query<PartnerQuery>,
) -> AppResult<Json<Vec<Partner>>> {
    let include_all = query.all.unwrap_or(false);
    if include_all && session.is_none() {
        return Err(AppError::Authentication(
            "Session required to list all partners".to_string(),
        ));
    }

    let partners = state.services.content.list_partners(include_all).await?;
    Ok(Json(partners))
}

/// Get partner details by ID
#[utoipa::path(
    get,
    path = "/partners/{id}",
    tag = "partners",
    params(
        ("id" = i32, Path, description = "Partner ID")
    ),
    responses(
        (status = 200, description = "Partner details", body = Partner),
        (status = 404, description = "Partner not found")
    )
)]
pub async fn get_partner(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Partner>> {
    let partner = state.services.content.get_partner(id).await?;
    Ok(Json(partner))
}

/// Create a partner
#[utoipa::path(
    post,
    path = "/partners",
    tag = "partners",
    request_body = CreatePartner,
    responses(
        (status = 201, description = "Partner created", body = Partner),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn create_partner(
    State(state): State<AppState>,
    AdminUser(claims): AdminUser,
    AppJson(partner): AppJson<CreatePartner>,
) -> AppResult<(StatusCode, Json<Partner>)> {
    claims.require_editor()?;

    let created = state.services.content.create_partner(partner).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a partner
#[utoipa::path(
    put,
    path = "/partners/{id}",
    tag = "partners",
    params(
        ("id" = i32, Path, description = "Partner ID")
    ),
    request_body = UpdatePartner,
    responses(
        (status = 200, description = "Partner updated", body = Partner),
        (status = 404, description = "Partner not found")
    )
)]
pub async fn update_partner(
    State(state): State<AppState>,
    AdminUser(claims): AdminUser,
    Path(id): Path<i32>,
    AppJson(partner): AppJson<UpdatePartner>,
) -> AppResult<Json<Partner>> {
    claims.require_editor()?;

    let updated = state.services.content.update_partner(id, partner).await?;
    Ok(Json(updated))
}

/// Delete a partner
#[utoipa::path(
    delete,
    path = "/partners/{id}",
    tag = "partners",
    params(
        ("id" = i32, Path, description = "Partner ID")
    ),
    responses(
        (status = 204, description = "Partner deleted"),
        (status = 404, description = "Partner not found")
    )
)]
pub async fn delete_partner(
    State(state): State<AppState>,
    AdminUser(claims): AdminUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    claims.require_editor()?;

    state.services.content.delete_partner(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
