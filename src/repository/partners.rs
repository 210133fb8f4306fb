//! Partners repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::partner::{CreatePartner, Partner, UpdatePartner},
};

#[derive(Clone)]
pub struct PartnersRepository {
    pool: Pool<Postgres>,
}

impl PartnersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List partners
    pub async fn list(&self, include_all: bool) -> AppResult<Vec<Partner>> {
        let query = if include_all {
            "SELECT * FROM partners ORDER BY name"
        } else {
            "SELECT * FROM partners WHERE is_active ORDER BY name"
        };

        let rows = sqlx::query_as::<_, Partner>(query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get a partner by ID
    pub async fn get(&self, id: i32) -> AppResult<Partner> {
        sqlx::query_as::<_, Partner>("SELECT * FROM partners WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Partner {} not found", id)))
    }

    /// Create a partner
    pub async fn create(&self, data: &CreatePartner) -> AppResult<Partner> {
        let row = sqlx::query_as::<_, Partner>(
            r#"
            INSERT INTO partners (name, description, logo, url, benefit)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.logo)
        .bind(&data.url)
        .bind(&data.benefit)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update a partner
    pub async fn update(&self, id: i32, data: &UpdatePartner) -> AppResult<Partner> {
        sqlx::query_as::<_, Partner>(
            r#"
            UPDATE partners SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                logo = COALESCE($4, logo),
                url = COALESCE($5, url),
                benefit = COALESCE($6, benefit),
                is_active = COALESCE($7, is_active),
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.logo)
        .bind(&data.url)
        .bind(&data.benefit)
        .bind(data.is_active)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Partner {} not found", id)))
    }

    /// Delete a partner
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM partners WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Partner {} not found", id)));
        }
        Ok(())
    }
}
