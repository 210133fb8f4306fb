//! Lead (prospect) model for the capture/appointment flow

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Triage states a lead moves through in the back office
pub const LEAD_STATUSES: [&str; 5] = ["new", "contacted", "scheduled", "converted", "discarded"];

/// Captured lead from the public contact/appointment form
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: Option<String>,
    /// Visit slot the prospect asked for
    pub preferred_date: Option<DateTime<Utc>>,
    /// One of "new", "contacted", "scheduled", "converted", "discarded"
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public lead submission
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLead {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(max = 30))]
    pub phone: Option<String>,
    #[validate(length(max = 2000))]
    pub message: Option<String>,
    pub preferred_date: Option<DateTime<Utc>>,
}

/// Admin lead status update
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateLeadStatus {
    pub status: String,
}

/// Query parameters for lead listing
#[derive(Debug, Deserialize, IntoParams)]
pub struct LeadQuery {
    /// Filter by triage status
    pub status: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}
