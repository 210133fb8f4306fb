//! Member testimonial model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Testimonial displayed on the marketing site once approved
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: i32,
    pub author_name: String,
    pub content: String,
    /// 1 to 5 stars
    pub rating: Option<i32>,
    pub avatar: Option<String>,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public testimonial submission (always created unapproved)
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestimonial {
    #[validate(length(min = 1, max = 120))]
    pub author_name: String,
    #[validate(length(min = 1, max = 2000))]
    pub content: String,
    #[validate(range(min = 1, max = 5))]
    pub rating: Option<i32>,
    pub avatar: Option<String>,
}

/// Admin testimonial update (moderation)
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTestimonial {
    #[validate(length(min = 1, max = 120))]
    pub author_name: Option<String>,
    #[validate(length(min = 1, max = 2000))]
    pub content: Option<String>,
    #[validate(range(min = 1, max = 5))]
    pub rating: Option<i32>,
    pub avatar: Option<String>,
    pub is_approved: Option<bool>,
}

/// Query parameters for testimonial listing
#[derive(Debug, Deserialize, IntoParams)]
pub struct TestimonialQuery {
    /// Include unapproved testimonials (requires a session)
    pub all: Option<bool>,
}
