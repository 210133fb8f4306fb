//! Knowledge-base repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::knowledge::{CreateKnowledgeEntry, KnowledgeEntry, UpdateKnowledgeEntry},
    repository::map_unique_violation,
};

#[derive(Clone)]
pub struct KnowledgeRepository {
    pool: Pool<Postgres>,
}

impl KnowledgeRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List entries, optionally filtered by category; the public listing
    /// only shows published entries
    pub async fn list(
        &self,
        category: Option<&str>,
        include_all: bool,
    ) -> AppResult<Vec<KnowledgeEntry>> {
        let mut conditions = Vec::new();

        if !include_all {
            conditions.push("is_published".to_string());
        }
        if category.is_some() {
            conditions.push("category = $1".to_string());
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT * FROM knowledge_entries {} ORDER BY category, title",
            where_clause
        );

        let mut builder = sqlx::query_as::<_, KnowledgeEntry>(&query);
        if let Some(cat) = category {
            builder = builder.bind(cat.to_string());
        }

        let rows = builder.fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// Get an entry by ID
    pub async fn get(&self, id: i32) -> AppResult<KnowledgeEntry> {
        sqlx::query_as::<_, KnowledgeEntry>("SELECT * FROM knowledge_entries WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Knowledge entry {} not found", id)))
    }

    /// Get a published entry by slug (public fetch)
    pub async fn get_published_by_slug(&self, slug: &str) -> AppResult<KnowledgeEntry> {
        sqlx::query_as::<_, KnowledgeEntry>(
            "SELECT * FROM knowledge_entries WHERE slug = $1 AND is_published",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Knowledge entry '{}' not found", slug)))
    }

    /// Create an entry with its derived slug
    pub async fn create(&self, data: &CreateKnowledgeEntry, slug: &str) -> AppResult<KnowledgeEntry> {
        let row = sqlx::query_as::<_, KnowledgeEntry>(
            r#"
            INSERT INTO knowledge_entries (title, slug, content, category, is_published)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&data.title)
        .bind(slug)
        .bind(&data.content)
        .bind(&data.category)
        .bind(data.is_published)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "An entry with this slug already exists"))?;
        Ok(row)
    }

    /// Update an entry; the slug follows the title when it changes
    pub async fn update(
        &self,
        id: i32,
        data: &UpdateKnowledgeEntry,
        slug: Option<&str>,
    ) -> AppResult<KnowledgeEntry> {
        sqlx::query_as::<_, KnowledgeEntry>(
            r#"
            UPDATE knowledge_entries SET
                title = COALESCE($2, title),
                slug = COALESCE($3, slug),
                content = COALESCE($4, content),
                category = COALESCE($5, category),
                is_published = COALESCE($6, is_published),
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&data.title)
        .bind(slug)
        .bind(&data.content)
        .bind(&data.category)
        .bind(data.is_published)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "An entry with this slug already exists"))?
        .ok_or_else(|| AppError::NotFound(format!("Knowledge entry {} not found", id)))
    }

    /// Delete an entry
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM knowledge_entries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Knowledge entry {} not found", id)));
        }
        Ok(())
    }
}
