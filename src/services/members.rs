//! Members and check-in service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::member::{
        CheckinConfirmation, CheckinWithMember, CreateMember, Member, UpdateMember,
    },
    repository::Repository,
    services::codes,
};

#[derive(Clone)]
pub struct MembersService {
    repository: Repository,
}

impl MembersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List members
    pub async fn list(&self) -> AppResult<Vec<Member>> {
        self.repository.members.list().await
    }

    /// Get a member by ID
    pub async fn get(&self, id: i32) -> AppResult<Member> {
        self.repository.members.get(id).await
    }

    /// Create a member with a generated check-in code, using the same
    /// bounded-retry policy as promotion codes
    pub async fn create(&self, data: CreateMember) -> AppResult<Member> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let repo = self.repository.members.clone();
        let checkin_code = codes::generate_unique(codes::random_code, move |candidate| {
            let repo = repo.clone();
            async move { repo.checkin_code_exists(&candidate).await }
        })
        .await?;

        self.repository.members.create(&data, &checkin_code).await
    }

    /// Update a member
    pub async fn update(&self, id: i32, data: UpdateMember) -> AppResult<Member> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.members.update(id, &data).await
    }

    /// Delete a member
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.members.delete(id).await
    }

    /// Resolve a check-in code and record the visit
    pub async fn check_in(&self, code: &str) -> AppResult<CheckinConfirmation> {
        let member = self
            .repository
            .members
            .find_active_by_checkin_code(code)
            .await?
            .ok_or_else(|| AppError::NotFound("Unknown check-in code".to_string()))?;

        let checkin = self.repository.members.record_checkin(member.id).await?;
        Ok(CheckinConfirmation {
            member_name: member.name,
            checked_in_at: checkin.checked_in_at,
        })
    }

    /// List recent visits for the back office
    pub async fn list_checkins(
        &self,
        page: i64,
        per_page: i64,
    ) -> AppResult<(Vec<CheckinWithMember>, i64)> {
        self.repository.members.list_checkins(page, per_page).await
    }
}
