//! Member management and check-in endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::member::{
        CheckinConfirmation, CheckinQuery, CheckinWithMember, CreateMember, Member, UpdateMember,
    },
    AppState,
};

use super::{AdminUser, ApiResponse, AppJson, PaginatedResponse};

/// List members
#[utoipa::path(
    get,
    path = "/members",
    tag = "members",
    responses(
        (status = 200, description = "List of members", body = Vec<Member>),
        (status = 403, description = "Admin privileges required")
    )
)]
pub async fn list_members(
    State(state): State<AppState>,
    AdminUser(claims): AdminUser,
) -> AppResult<Json<Vec<Member>>> {
    claims.require_admin()?;

    let members = state.services.members.list().await?;
    Ok(Json(members))
}

/// Get member details by ID
#[utoipa::path(
    get,
    path = "/members/{id}",
    tag = "members",
    params(
        ("id" = i32, Path, description = "Member ID")
    ),
    responses(
        (status = 200, description = "Member details", body = Member),
        (status = 404, description = "Member not found")
    )
)]
pub async fn get_member(
    State(state): State<AppState>,
    AdminUser(claims): AdminUser,
    Path(id): Path<i32>,
) -> AppResult<Json<Member>> {
    claims.require_admin()?;

    let member = state.services.members.get(id).await?;
    Ok(Json(member))
}

/// Create a member; the check-in code is generated server-side
#[utoipa::path(
    post,
    path = "/members",
    tag = "members",
    request_body = CreateMember,
    responses(
        (status = 201, description = "Member created", body = Member),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Email already in use"),
        (status = 500, description = "Code generation exhausted")
    )
)]
pub async fn create_member(
    State(state): State<AppState>,
    AdminUser(claims): AdminUser,
    AppJson(member): AppJson<CreateMember>,
) -> AppResult<(StatusCode, Json<Member>)> {
    claims.require_admin()?;

    let created = state.services.members.create(member).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a member
#[utoipa::path(
    put,
    path = "/members/{id}",
    tag = "members",
    params(
        ("id" = i32, Path, description = "Member ID")
    ),
    request_body = UpdateMember,
    responses(
        (status = 200, description = "Member updated", body = Member),
        (status = 404, description = "Member not found")
    )
)]
pub async fn update_member(
    State(state): State<AppState>,
    AdminUser(claims): AdminUser,
    Path(id): Path<i32>,
    AppJson(member): AppJson<UpdateMember>,
) -> AppResult<Json<Member>> {
    claims.require_admin()?;

    let updated = state.services.members.update(id, member).await?;
    Ok(Json(updated))
}

/// Delete a member (and their visit history)
#[utoipa::path(
    delete,
    path = "/members/{id}",
    tag = "members",
    params(
        ("id" = i32, Path, description = "Member ID")
    ),
    responses(
        (status = 204, description = "Member deleted"),
        (status = 404, description = "Member not found")
    )
)]
pub async fn delete_member(
    State(state): State<AppState>,
    AdminUser(claims): AdminUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    claims.require_admin()?;

    state.services.members.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Resolve a scanned check-in code and record the visit
#[utoipa::path(
    post,
    path = "/checkin/{code}",
    tag = "members",
    params(
        ("code" = String, Path, description = "Member check-in code")
    ),
    responses(
        (status = 200, description = "Visit recorded", body = ApiResponse<CheckinConfirmation>),
        (status = 404, description = "Unknown or inactive check-in code")
    )
)]
pub async fn check_in(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<Json<ApiResponse<CheckinConfirmation>>> {
    let confirmation = state.services.members.check_in(&code).await?;
    Ok(Json(ApiResponse::new(confirmation)))
}

/// List recent visits
#[utoipa::path(
    get,
    path = "/checkins",
    tag = "members",
    params(CheckinQuery),
    responses(
        (status = 200, description = "Recent visits", body = PaginatedResponse<CheckinWithMember>),
        (status = 403, description = "Admin privileges required")
    )
)]
pub async fn list_checkins(
    State(state): State<AppState>,
    AdminUser(claims): AdminUser,
    Query(query): Query<CheckinQuery>,
) -> AppResult<Json<PaginatedResponse<CheckinWithMember>>> {
    claims.require_admin()?;

    let page = query.page.unwrap_or(1);
    let per_page = query.per_page.unwrap_or(50);
    let (checkins, total) = state.services.members.list_checkins(page, per_page).await?;

    Ok(Json(PaginatedResponse {
        items: checkins,
        total,
        page,
        per_page,
    }))
}
