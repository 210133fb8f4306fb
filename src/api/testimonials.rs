//! Testimonial endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::testimonial::{CreateTestimonial, Testimonial, TestimonialQuery, UpdateTestimonial},
    AppState,
};

use super::{AdminUser, AppJson};

/// List testimonials; the public listing only shows approved entries
#[utoipa::path(
    get,
    path = "/testimonials",
    tag = "testimonials",
    params(TestimonialQuery),
    responses(
        (status = 200, description = "List of testimonials", body = Vec<Testimonial>),
        (status = 401, description = "Session required for the full listing")
    )
)]
pub async fn list_testimonials(
    State(state): State<AppState>,
    session: Option<AdminUser>,
    Query(query): Query<TestimonialQuery>,
) -> AppResult<Json<Vec<Testimonial>>> {
    let include_all = query.all.unwrap_or(false);
    if include_all && session.is_none() {
        return Err(AppError::Authentication(
            "Session required to list all testimonials".to_string(),
        ));
    }

    let testimonials = state.services.content.list_testimonials(include_all).await?;
    Ok(Json(testimonials))
}

/// Submit a testimonial (public; created unapproved)
#[utoipa::path(
    post,
    path = "/testimonials",
    tag = "testimonials",
    request_body = CreateTestimonial,
    responses(
        (status = 201, description = "Testimonial submitted for moderation", body = Testimonial),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_testimonial(
    State(state): State<AppState>,
    AppJson(testimonial): AppJson<CreateTestimonial>,
) -> AppResult<(StatusCode, Json<Testimonial>)> {
    let created = state.services.content.create_testimonial(testimonial).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update/moderate a testimonial
#[utoipa::path(
    put,
    path = "/testimonials/{id}",
    tag = "testimonials",
    params(
        ("id" = i32, Path, description = "Testimonial ID")
    ),
    request_body = UpdateTestimonial,
    responses(
        (status = 200, description = "Testimonial updated", body = Testimonial),
        (status = 404, description = "Testimonial not found")
    )
)]
pub async fn update_testimonial(
    State(state): State<AppState>,
    AdminUser(claims): AdminUser,
    Path(id): Path<i32>,
    AppJson(testimonial): AppJson<UpdateTestimonial>,
) -> AppResult<Json<Testimonial>> {
    claims.require_editor()?;

    let updated = state
        .services
        .content
        .update_testimonial(id, testimonial)
        .await?;
    Ok(Json(updated))
}

/// Delete a testimonial
#[utoipa::path(
    delete,
    path = "/testimonials/{id}",
    tag = "testimonials",
    params(
        ("id" = i32, Path, description = "Testimonial ID")
    ),
    responses(
        (status = 204, description = "Testimonial deleted"),
        (status = 404, description = "Testimonial not found")
    )
)]
pub async fn delete_testimonial(
    State(state): State<AppState>,
    AdminUser(claims): AdminUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    claims.require_editor()?;

    state.services.content.delete_testimonial(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
