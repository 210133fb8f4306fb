//! Testimonials repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::testimonial::{CreateTestimonial, Testimonial, UpdateTestimonial},
};

#[derive(Clone)]
pub struct TestimonialsRepository {
    pool: Pool<Postgres>,
}

impl TestimonialsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List testimonials; the public listing only shows approved entries
    pub async fn list(&self, include_all: bool) -> AppResult<Vec<Testimonial>> {
        let query = if include_all {
            "SELECT * FROM testimonials ORDER BY created_at DESC"
        } else {
            "SELECT * FROM testimonials WHERE is_approved ORDER BY created_at DESC"
        };

        let rows = sqlx::query_as::<_, Testimonial>(query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get a testimonial by ID
    pub async fn get(&self, id: i32) -> AppResult<Testimonial> {
        sqlx::query_as::<_, Testimonial>("SELECT * FROM testimonials WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Testimonial {} not found", id)))
    }

    /// Create a testimonial (public submissions start unapproved)
    pub async fn create(&self, data: &CreateTestimonial) -> AppResult<Testimonial> {
        let row = sqlx::query_as::<_, Testimonial>(
            r#"
            INSERT INTO testimonials (author_name, content, rating, avatar)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&data.author_name)
        .bind(&data.content)
        .bind(data.rating)
        .bind(&data.avatar)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update/moderate a testimonial
    pub async fn update(&self, id: i32, data: &UpdateTestimonial) -> AppResult<Testimonial> {
        sqlx::query_as::<_, Testimonial>(
            r#"
            UPDATE testimonials SET
                author_name = COALESCE($2, author_name),
                content = COALESCE($3, content),
                rating = COALESCE($4, rating),
                avatar = COALESCE($5, avatar),
                is_approved = COALESCE($6, is_approved),
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&data.author_name)
        .bind(&data.content)
        .bind(data.rating)
        .bind(&data.avatar)
        .bind(data.is_approved)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Testimonial {} not found", id)))
    }

    /// Delete a testimonial
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM testimonials WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Testimonial {} not found", id)));
        }
        Ok(())
    }
}
