//! Membership plan model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Membership plan shown on the marketing site
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: i32,
    pub name: String,
    pub description: String,
    /// Monthly price in whole currency units
    pub monthly_price: i32,
    /// Bullet-point features displayed on the plan card
    #[schema(value_type = Vec<String>)]
    pub features: Json<Vec<String>>,
    pub is_featured: bool,
    pub is_active: bool,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create plan request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlan {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(range(min = 0))]
    pub monthly_price: i32,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub display_order: i32,
}

/// Update plan request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlan {
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    #[validate(range(min = 0))]
    pub monthly_price: Option<i32>,
    pub features: Option<Vec<String>>,
    pub is_featured: Option<bool>,
    pub is_active: Option<bool>,
    pub display_order: Option<i32>,
}

/// Query parameters for plan listing
#[derive(Debug, Deserialize, IntoParams)]
pub struct PlanQuery {
    /// Include inactive plans (requires a session)
    pub all: Option<bool>,
}
