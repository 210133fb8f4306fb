//! Promotion model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Promotion record
///
/// `unique_code` and `short_code` are generated at creation time and are
/// unique across all promotions. `access_count` is only ever incremented,
/// by the redirect endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub valid_until: DateTime<Utc>,
    pub is_active: bool,
    /// Human-readable code, e.g. PROMO-2026-4K7Q2Z
    pub unique_code: Option<String>,
    /// Compact redirect token used in shareable URLs
    pub short_code: Option<String>,
    pub access_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create promotion request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePromotion {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    pub image: Option<String>,
    pub valid_until: DateTime<Utc>,
}

/// Update promotion request (codes are never updatable)
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePromotion {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    pub image: Option<String>,
    pub valid_until: Option<DateTime<Utc>>,
    pub is_active: Option<bool>,
}

/// Query parameters for promotion listing
#[derive(Debug, Deserialize, IntoParams)]
pub struct PromotionQuery {
    /// Include inactive and expired promotions (requires a session)
    pub all: Option<bool>,
}
