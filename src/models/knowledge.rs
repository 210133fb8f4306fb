//! Knowledge-base entry model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Knowledge-base entry (FAQ / help article)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeEntry {
    pub id: i32,
    pub title: String,
    /// URL-safe identifier derived from the title, unique
    pub slug: String,
    pub content: String,
    pub category: String,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create knowledge entry request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateKnowledgeEntry {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1))]
    pub content: String,
    #[validate(length(min = 1, max = 80))]
    pub category: String,
    #[serde(default)]
    pub is_published: bool,
}

/// Update knowledge entry request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateKnowledgeEntry {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub content: Option<String>,
    #[validate(length(min = 1, max = 80))]
    pub category: Option<String>,
    pub is_published: Option<bool>,
}

/// Query parameters for knowledge listing
#[derive(Debug, Deserialize, IntoParams)]
pub struct KnowledgeQuery {
    /// Filter by category
    pub category: Option<String>,
    /// Include unpublished entries (requires a session)
    pub all: Option<bool>,
}
