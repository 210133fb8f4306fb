//! Partner (local business) model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Partner business advertised on the marketing site
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub url: Option<String>,
    /// Benefit offered to gym members, e.g. "10% off"
    pub benefit: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create partner request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePartner {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    pub description: Option<String>,
    pub logo: Option<String>,
    #[validate(url)]
    pub url: Option<String>,
    pub benefit: Option<String>,
}

/// Update partner request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePartner {
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub logo: Option<String>,
    #[validate(url)]
    pub url: Option<String>,
    pub benefit: Option<String>,
    pub is_active: Option<bool>,
}

/// Query parameters for partner listing
#[derive(Debug, Deserialize, IntoParams)]
pub struct PartnerQuery {
    /// Include inactive partners (requires a session)
    pub all: Option<bool>,
}
