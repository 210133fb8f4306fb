//! Ads (marketing banners) repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::ad::{Ad, CreateAd, UpdateAd},
};

#[derive(Clone)]
pub struct AdsRepository {
    pool: Pool<Postgres>,
}

impl AdsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List ads, optionally filtered by placement slot. The public listing
    /// keeps only active banners inside their optional date window.
    pub async fn list(&self, position: Option<&str>, include_all: bool) -> AppResult<Vec<Ad>> {
        let mut conditions = Vec::new();

        if !include_all {
            conditions.push(
                "is_active AND (starts_at IS NULL OR starts_at <= now()) \
                 AND (ends_at IS NULL OR ends_at > now())"
                    .to_string(),
            );
        }
        if position.is_some() {
            conditions.push("position = $1".to_string());
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!("SELECT * FROM ads {} ORDER BY id", where_clause);

        let mut builder = sqlx::query_as::<_, Ad>(&query);
        if let Some(pos) = position {
            builder = builder.bind(pos.to_string());
        }

        let rows = builder.fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// Get an ad by ID
    pub async fn get(&self, id: i32) -> AppResult<Ad> {
        sqlx::query_as::<_, Ad>("SELECT * FROM ads WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Ad {} not found", id)))
    }

    /// Create an ad
    pub async fn create(&self, data: &CreateAd) -> AppResult<Ad> {
        let row = sqlx::query_as::<_, Ad>(
            r#"
            INSERT INTO ads (title, image, link, position, starts_at, ends_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&data.title)
        .bind(&data.image)
        .bind(&data.link)
        .bind(&data.position)
        .bind(data.starts_at)
        .bind(data.ends_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update an ad
    pub async fn update(&self, id: i32, data: &UpdateAd) -> AppResult<Ad> {
        sqlx::query_as::<_, Ad>(
            r#"
            UPDATE ads SET
                title = COALESCE($2, title),
                image = COALESCE($3, image),
                link = COALESCE($4, link),
                position = COALESCE($5, position),
                starts_at = COALESCE($6, starts_at),
                ends_at = COALESCE($7, ends_at),
                is_active = COALESCE($8, is_active),
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.image)
        .bind(&data.link)
        .bind(&data.position)
        .bind(data.starts_at)
        .bind(data.ends_at)
        .bind(data.is_active)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Ad {} not found", id)))
    }

    /// Delete an ad
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM ads WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Ad {} not found", id)));
        }
        Ok(())
    }
}
