//! Member and check-in models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Gym member carrying a check-in code (rendered as a QR by the client)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// 6 uppercase base36 chars, unique across members
    pub checkin_code: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create member request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMember {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(email)]
    pub email: String,
}

/// Update member request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMember {
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub is_active: Option<bool>,
}

/// Recorded gym visit
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Checkin {
    pub id: i32,
    pub member_id: i32,
    pub checked_in_at: DateTime<Utc>,
}

/// Visit row joined with the member name, for the admin listing
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckinWithMember {
    pub id: i32,
    pub member_id: i32,
    pub member_name: String,
    pub checked_in_at: DateTime<Utc>,
}

/// Response returned to the check-in kiosk
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckinConfirmation {
    pub member_name: String,
    pub checked_in_at: DateTime<Utc>,
}

/// Query parameters for the check-in listing
#[derive(Debug, Deserialize, IntoParams)]
pub struct CheckinQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}
