//! Plans repository

use sqlx::types::Json;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::plan::{CreatePlan, Plan, UpdatePlan},
};

#[derive(Clone)]
pub struct PlansRepository {
    pool: Pool<Postgres>,
}

impl PlansRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List plans ordered for display
    pub async fn list(&self, include_all: bool) -> AppResult<Vec<Plan>> {
        let query = if include_all {
            "SELECT * FROM plans ORDER BY display_order, id"
        } else {
            "SELECT * FROM plans WHERE is_active ORDER BY display_order, id"
        };

        let rows = sqlx::query_as::<_, Plan>(query).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// Get a plan by ID
    pub async fn get(&self, id: i32) -> AppResult<Plan> {
        sqlx::query_as::<_, Plan>("SELECT * FROM plans WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Plan {} not found", id)))
    }

    /// Create a plan
    pub async fn create(&self, data: &CreatePlan) -> AppResult<Plan> {
        let row = sqlx::query_as::<_, Plan>(
            r#"
            INSERT INTO plans (name, description, monthly_price, features, is_featured, display_order)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.monthly_price)
        .bind(Json(&data.features))
        .bind(data.is_featured)
        .bind(data.display_order)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update a plan
    pub async fn update(&self, id: i32, data: &UpdatePlan) -> AppResult<Plan> {
        sqlx::query_as::<_, Plan>(
            r#"
            UPDATE plans SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                monthly_price = COALESCE($4, monthly_price),
                features = COALESCE($5, features),
                is_featured = COALESCE($6, is_featured),
                is_active = COALESCE($7, is_active),
                display_order = COALESCE($8, display_order),
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.monthly_price)
        .bind(data.features.as_ref().map(Json))
        .bind(data.is_featured)
        .bind(data.is_active)
        .bind(data.display_order)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Plan {} not found", id)))
    }

    /// Delete a plan
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM plans WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Plan {} not found", id)));
        }
        Ok(())
    }
}
