//! Lead capture and triage endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::lead::{CreateLead, Lead, LeadQuery, UpdateLeadStatus},
    AppState,
};

use super::{AdminUser, AppJson, PaginatedResponse};

/// Submit a lead from the public contact/appointment form
#[utoipa::path(
    post,
    path = "/leads",
    tag = "leads",
    request_body = CreateLead,
    responses(
        (status = 201, description = "Lead captured", body = Lead),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_lead(
    State(state): State<AppState>,
    AppJson(lead): AppJson<CreateLead>,
) -> AppResult<(StatusCode, Json<Lead>)> {
    let created = state.services.leads.create(lead).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// List leads with optional status filter and pagination
#[utoipa::path(
    get,
    path = "/leads",
    tag = "leads",
    params(LeadQuery),
    responses(
        (status = 200, description = "List of leads", body = PaginatedResponse<Lead>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_leads(
    State(state): State<AppState>,
    AdminUser(claims): AdminUser,
    Query(query): Query<LeadQuery>,
) -> AppResult<Json<PaginatedResponse<Lead>>> {
    claims.require_editor()?;

    let page = query.page.unwrap_or(1);
    let per_page = query.per_page.unwrap_or(20);
    let (leads, total) = state
        .services
        .leads
        .list(query.status.as_deref(), page, per_page)
        .await?;

    Ok(Json(PaginatedResponse {
        items: leads,
        total,
        page,
        per_page,
    }))
}

/// Get lead details by ID
#[utoipa::path(
    get,
    path = "/leads/{id}",
    tag = "leads",
    params(
        ("id" = i32, Path, description = "Lead ID")
    ),
    responses(
        (status = 200, description = "Lead details", body = Lead),
        (status = 404, description = "Lead not found")
    )
)]
pub async fn get_lead(
    State(state): State<AppState>,
    AdminUser(claims): AdminUser,
    Path(id): Path<i32>,
) -> AppResult<Json<Lead>> {
    claims.require_editor()?;

    let lead = state.services.leads.get(id).await?;
    Ok(Json(lead))
}

/// Move a lead to a new triage status
#[utoipa::path(
    put,
    path = "/leads/{id}/status",
    tag = "leads",
    params(
        ("id" = i32, Path, description = "Lead ID")
    ),
    request_body = UpdateLeadStatus,
    responses(
        (status = 200, description = "Lead updated", body = Lead),
        (status = 400, description = "Unknown status"),
        (status = 404, description = "Lead not found")
    )
)]
pub async fn update_lead_status(
    State(state): State<AppState>,
    AdminUser(claims): AdminUser,
    Path(id): Path<i32>,
    AppJson(request): AppJson<UpdateLeadStatus>,
) -> AppResult<Json<Lead>> {
    claims.require_editor()?;

    let updated = state
        .services
        .leads
        .update_status(id, &request.status)
        .await?;
    Ok(Json(updated))
}

/// Delete a lead
#[utoipa::path(
    delete,
    path = "/leads/{id}",
    tag = "leads",
    params(
        ("id" = i32, Path, description = "Lead ID")
    ),
    responses(
        (status = 204, description = "Lead deleted"),
        (status = 404, description = "Lead not found")
    )
)]
pub async fn delete_lead(
    State(state): State<AppState>,
    AdminUser(claims): AdminUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    claims.require_editor()?;

    state.services.leads.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
