//! Members and check-ins repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::member::{Checkin, CheckinWithMember, CreateMember, Member, UpdateMember},
    repository::map_unique_violation,
};

#[derive(Clone)]
pub struct MembersRepository {
    pool: Pool<Postgres>,
}

impl MembersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List members
    pub async fn list(&self) -> AppResult<Vec<Member>> {
        let rows = sqlx::query_as::<_, Member>("SELECT * FROM members ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get a member by ID
    pub async fn get(&self, id: i32) -> AppResult<Member> {
        sqlx::query_as::<_, Member>("SELECT * FROM members WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Member {} not found", id)))
    }

    /// Find an active member by check-in code
    pub async fn find_active_by_checkin_code(&self, code: &str) -> AppResult<Option<Member>> {
        let row = sqlx::query_as::<_, Member>(
            "SELECT * FROM members WHERE checkin_code = $1 AND is_active",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Existence pre-check used by the check-in code generation retry loop
    pub async fn checkin_code_exists(&self, code: &str) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM members WHERE checkin_code = $1)")
                .bind(code)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    /// Create a member with a generated check-in code
    pub async fn create(&self, data: &CreateMember, checkin_code: &str) -> AppResult<Member> {
        let row = sqlx::query_as::<_, Member>(
            r#"
            INSERT INTO members (name, email, checkin_code)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(checkin_code)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "A member with this email already exists"))?;
        Ok(row)
    }

    /// Update a member; the check-in code is immutable
    pub async fn update(&self, id: i32, data: &UpdateMember) -> AppResult<Member> {
        sqlx::query_as::<_, Member>(
            r#"
            UPDATE members SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                is_active = COALESCE($4, is_active),
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.email)
        .bind(data.is_active)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "A member with this email already exists"))?
        .ok_or_else(|| AppError::NotFound(format!("Member {} not found", id)))
    }

    /// Delete a member (cascade deletes their visits)
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Member {} not found", id)));
        }
        Ok(())
    }

    /// Record a visit for a member
    pub async fn record_checkin(&self, member_id: i32) -> AppResult<Checkin> {
        let row = sqlx::query_as::<_, Checkin>(
            "INSERT INTO checkins (member_id) VALUES ($1) RETURNING *",
        )
        .bind(member_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// List recent visits with member names, newest first, paginated
    pub async fn list_checkins(
        &self,
        page: i64,
        per_page: i64,
    ) -> AppResult<(Vec<CheckinWithMember>, i64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM checkins")
            .fetch_one(&self.pool)
            .await?;

        let offset = (page.max(1) - 1) * per_page;
        let rows = sqlx::query_as::<_, CheckinWithMember>(
            r#"
            SELECT c.id, c.member_id, m.name AS member_name, c.checked_in_at
            FROM checkins c
            JOIN members m ON m.id = c.member_id
            ORDER BY c.checked_in_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(per_page)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok((rows, total))
    }
}
