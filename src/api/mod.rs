//! API handlers for the Academia REST endpoints

pub mod ads;
pub mod auth;
pub mod health;
pub mod home;
pub mod knowledge;
pub mod leads;
pub mod members;
pub mod openapi;
pub mod partners;
pub mod plans;
pub mod promotions;
pub mod redirect;
pub mod testimonials;
pub mod users;

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Request},
    http::request::Parts,
    Json,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppError, models::user::SessionClaims, AppState};

/// Success envelope used by the public site endpoints
#[derive(Serialize, ToSchema)]
pub struct ApiResponse<T>
where
    T: for<'a> ToSchema<'a>,
{
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T>
where
    T: for<'a> ToSchema<'a>,
{
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Paginated listing envelope
#[derive(Serialize, ToSchema)]
pub struct PaginatedResponse<T>
where
    T: for<'a> ToSchema<'a>,
{
    /// List of items
    pub items: Vec<T>,
    /// Total number of items
    pub total: i64,
    /// Current page number
    pub page: i64,
    /// Items per page
    pub per_page: i64,
}

/// JSON body extractor that reports malformed or incomplete payloads as
/// validation errors (400) instead of axum's default 422
pub struct AppJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;
        Ok(AppJson(value))
    }
}

/// Extractor for the authenticated back-office principal.
///
/// The session cookie is parsed and validated once here; handlers receive
/// the claims as a value instead of re-reading the cookie themselves.
pub struct AdminUser(pub SessionClaims);

#[async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        let cookie = jar
            .get(&state.config.auth.cookie_name)
            .ok_or_else(|| AppError::Authentication("Missing session cookie".to_string()))?;

        let claims = SessionClaims::from_token(cookie.value(), &state.config.auth.session_secret)
            .map_err(|e| AppError::Authentication(e.to_string()))?;

        Ok(AdminUser(claims))
    }
}
