//! Promotions repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::promotion::{CreatePromotion, Promotion, UpdatePromotion},
    repository::map_unique_violation,
};

#[derive(Clone)]
pub struct PromotionsRepository {
    pool: Pool<Postgres>,
}

impl PromotionsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List promotions; the public listing is restricted to active,
    /// unexpired rows
    pub async fn list(&self, include_all: bool) -> AppResult<Vec<Promotion>> {
        let query = if include_all {
            "SELECT * FROM promotions ORDER BY created_at DESC"
        } else {
            "SELECT * FROM promotions WHERE is_active AND valid_until > now() ORDER BY created_at DESC"
        };

        let rows = sqlx::query_as::<_, Promotion>(query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get a promotion by ID
    pub async fn get(&self, id: i32) -> AppResult<Promotion> {
        sqlx::query_as::<_, Promotion>("SELECT * FROM promotions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Promotion {} not found", id)))
    }

    /// Find a promotion by its short redirect code
    pub async fn find_by_short_code(&self, code: &str) -> AppResult<Option<Promotion>> {
        let row = sqlx::query_as::<_, Promotion>("SELECT * FROM promotions WHERE short_code = $1")
            .bind(code)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Find a promotion by its human-readable unique code
    pub async fn find_by_unique_code(&self, code: &str) -> AppResult<Option<Promotion>> {
        let row = sqlx::query_as::<_, Promotion>("SELECT * FROM promotions WHERE unique_code = $1")
            .bind(code)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Existence pre-check used by the code generation retry loop.
    /// A candidate collides if it matches either code column of any row.
    pub async fn code_exists(&self, code: &str) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM promotions WHERE unique_code = $1 OR short_code = $1)",
        )
        .bind(code)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    /// Persist a promotion with both generated codes in a single insert.
    /// The UNIQUE constraints on the code columns are the backstop for the
    /// pre-check/insert race.
    pub async fn create(
        &self,
        data: &CreatePromotion,
        unique_code: &str,
        short_code: &str,
    ) -> AppResult<Promotion> {
        let row = sqlx::query_as::<_, Promotion>(
            r#"
            INSERT INTO promotions (title, description, image, valid_until, unique_code, short_code)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.image)
        .bind(data.valid_until)
        .bind(unique_code)
        .bind(short_code)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "Promotion code already in use"))?;
        Ok(row)
    }

    /// Update a promotion; generated codes are immutable
    pub async fn update(&self, id: i32, data: &UpdatePromotion) -> AppResult<Promotion> {
        sqlx::query_as::<_, Promotion>(
            r#"
            UPDATE promotions SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                image = COALESCE($4, image),
                valid_until = COALESCE($5, valid_until),
                is_active = COALESCE($6, is_active),
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.image)
        .bind(data.valid_until)
        .bind(data.is_active)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Promotion {} not found", id)))
    }

    /// Delete a promotion
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM promotions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Promotion {} not found", id)));
        }
        Ok(())
    }

    /// Atomic in-place access counter increment; a read-modify-write from
    /// the application would lose updates under concurrent redirects.
    pub async fn increment_access_count(&self, id: i32) -> AppResult<()> {
        sqlx::query("UPDATE promotions SET access_count = access_count + 1 WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
