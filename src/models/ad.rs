//! Marketing banner (ad) model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Placement slots for banners on the public site
pub const AD_POSITIONS: [&str; 3] = ["home", "plans", "checkin"];

/// Marketing banner shown on the public site
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Ad {
    pub id: i32,
    pub title: String,
    pub image: String,
    pub link: Option<String>,
    /// One of "home", "plans", "checkin"
    pub position: String,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create ad request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAd {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1))]
    pub image: String,
    #[validate(url)]
    pub link: Option<String>,
    pub position: String,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
}

/// Update ad request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAd {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub image: Option<String>,
    #[validate(url)]
    pub link: Option<String>,
    pub position: Option<String>,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub is_active: Option<bool>,
}

/// Query parameters for ad listing
#[derive(Debug, Deserialize, IntoParams)]
pub struct AdQuery {
    /// Filter by placement slot
    pub position: Option<String>,
    /// Include inactive and out-of-window ads (requires a session)
    pub all: Option<bool>,
}
