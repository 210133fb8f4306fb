//! Leads repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::lead::{CreateLead, Lead},
};

#[derive(Clone)]
pub struct LeadsRepository {
    pool: Pool<Postgres>,
}

impl LeadsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List leads with optional status filter, newest first, paginated.
    /// Returns the page and the total row count for the filter.
    pub async fn list(
        &self,
        status: Option<&str>,
        page: i64,
        per_page: i64,
    ) -> AppResult<(Vec<Lead>, i64)> {
        let where_clause = if status.is_some() { "WHERE status = $1" } else { "" };

        let count_query = format!("SELECT COUNT(*) FROM leads {}", where_clause);
        let mut count_builder = sqlx::query_scalar::<_, i64>(&count_query);
        if let Some(s) = status {
            count_builder = count_builder.bind(s.to_string());
        }
        let total = count_builder.fetch_one(&self.pool).await?;

        let offset = (page.max(1) - 1) * per_page;
        let (limit_idx, offset_idx) = if status.is_some() { (2, 3) } else { (1, 2) };
        let query = format!(
            "SELECT * FROM leads {} ORDER BY created_at DESC LIMIT ${} OFFSET ${}",
            where_clause, limit_idx, offset_idx
        );

        let mut builder = sqlx::query_as::<_, Lead>(&query);
        if let Some(s) = status {
            builder = builder.bind(s.to_string());
        }
        let rows = builder.bind(per_page).bind(offset).fetch_all(&self.pool).await?;

        Ok((rows, total))
    }

    /// Get a lead by ID
    pub async fn get(&self, id: i32) -> AppResult<Lead> {
        sqlx::query_as::<_, Lead>("SELECT * FROM leads WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Lead {} not found", id)))
    }

    /// Create a lead from the public form
    pub async fn create(&self, data: &CreateLead) -> AppResult<Lead> {
        let row = sqlx::query_as::<_, Lead>(
            r#"
            INSERT INTO leads (name, email, phone, message, preferred_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.message)
        .bind(data.preferred_date)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Move a lead to a new triage status
    pub async fn update_status(&self, id: i32, status: &str) -> AppResult<Lead> {
        sqlx::query_as::<_, Lead>(
            "UPDATE leads SET status = $2, updated_at = now() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Lead {} not found", id)))
    }

    /// Delete a lead
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM leads WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Lead {} not found", id)));
        }
        Ok(())
    }
}
