//! Knowledge-base endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::knowledge::{
        CreateKnowledgeEntry, KnowledgeEntry, KnowledgeQuery, UpdateKnowledgeEntry,
    },
    AppState,
};

use super::{AdminUser, AppJson};

/// List knowledge entries; the public listing only shows published ones
#[utoipa::path(
    get,
    path = "/knowledge",
    tag = "knowledge",
    params(KnowledgeQuery),
    responses(
        (status = 200, description = "List of knowledge entries", body = Vec<KnowledgeEntry>),
        (status = 401, description = "Session required for the full listing")
    )
)]
pub async fn list_entries(
    State(state): State<AppState>,
    session: Option<AdminUser>,
    Query(query): Query<KnowledgeQuery>,
) -> AppResult<Json<Vec<KnowledgeEntry>>> {
    let include_all = query.all.unwrap_or(false);
    if include_all && session.is_none() {
        return Err(AppError::Authentication(
            "Session required to list all knowledge entries".to_string(),
        ));
    }

    let entries = state
        .services
        .content
        .list_knowledge(query.category.as_deref(), include_all)
        .await?;
    Ok(Json(entries))
}

/// Get a published entry by slug
#[utoipa::path(
    get,
    path = "/knowledge/{slug}",
    tag = "knowledge",
    params(
        ("slug" = String, Path, description = "Entry slug")
    ),
    responses(
        (status = 200, description = "Entry details", body = KnowledgeEntry),
        (status = 404, description = "Entry not found or unpublished")
    )
)]
pub async fn get_entry(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<KnowledgeEntry>> {
    let entry = state.services.content.get_knowledge_by_slug(&slug).await?;
    Ok(Json(entry))
}

/// Create a knowledge entry; the slug is derived from the title
#[utoipa::path(
    post,
    path = "/knowledge",
    tag = "knowledge",
    request_body = CreateKnowledgeEntry,
    responses(
        (status = 201, description = "Entry created", body = KnowledgeEntry),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Slug already in use")
    )
)]
pub async fn create_entry(
    State(state): State<AppState>,
    AdminUser(claims): AdminUser,
    AppJson(entry): AppJson<CreateKnowledgeEntry>,
) -> AppResult<(StatusCode, Json<KnowledgeEntry>)> {
    claims.require_editor()?;

    let created = state.services.content.create_knowledge(entry).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a knowledge entry
#[utoipa::path(
    put,
    path = "/knowledge/{id}",
    tag = "knowledge",
    params(
        ("id" = i32, Path, description = "Entry ID")
    ),
    request_body = UpdateKnowledgeEntry,
    responses(
        (status = 200, description = "Entry updated", body = KnowledgeEntry),
        (status = 404, description = "Entry not found")
    )
)]
pub async fn update_entry(
    State(state): State<AppState>,
    AdminUser(claims): AdminUser,
    Path(id): Path<i32>,
    AppJson(entry): AppJson<UpdateKnowledgeEntry>,
) -> AppResult<Json<KnowledgeEntry>> {
    claims.require_editor()?;

    let updated = state.services.content.update_knowledge(id, entry).await?;
    Ok(Json(updated))
}

/// Delete a knowledge entry
#[utoipa::path(
    delete,
    path = "/knowledge/{id}",
    tag = "knowledge",
    params(
        ("id" = i32, Path, description = "Entry ID")
    ),
    responses(
        (status = 204, description = "Entry deleted"),
        (status = 404, description = "Entry not found")
    )
)]
pub async fn delete_entry(
    State(state): State<AppState>,
    AdminUser(claims): AdminUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    claims.require_editor()?;

    state.services.content.delete_knowledge(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
