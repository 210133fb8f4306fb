//! Lead capture and triage service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::lead::{CreateLead, Lead, LEAD_STATUSES},
    repository::Repository,
};

#[derive(Clone)]
pub struct LeadsService {
    repository: Repository,
}

impl LeadsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Capture a lead from the public form
    pub async fn create(&self, data: CreateLead) -> AppResult<Lead> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.leads.create(&data).await
    }

    /// List leads for the back office, optionally filtered by status
    pub async fn list(
        &self,
        status: Option<&str>,
        page: i64,
        per_page: i64,
    ) -> AppResult<(Vec<Lead>, i64)> {
        if let Some(status) = status {
            Self::validate_status(status)?;
        }
        self.repository.leads.list(status, page, per_page).await
    }

    /// Get a lead by ID
    pub async fn get(&self, id: i32) -> AppResult<Lead> {
        self.repository.leads.get(id).await
    }

    /// Move a lead to a new triage status
    pub async fn update_status(&self, id: i32, status: &str) -> AppResult<Lead> {
        Self::validate_status(status)?;
        self.repository.leads.update_status(id, status).await
    }

    /// Delete a lead
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.leads.delete(id).await
    }

    fn validate_status(status: &str) -> AppResult<()> {
        if LEAD_STATUSES.contains(&status) {
            Ok(())
        } else {
            Err(AppError::Validation(format!(
                "Invalid lead status '{}', expected one of: {}",
                status,
                LEAD_STATUSES.join(", ")
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_statuses_are_accepted() {
        for status in LEAD_STATUSES {
            assert!(LeadsService::validate_status(status).is_ok());
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!(matches!(
            LeadsService::validate_status("archived"),
            Err(AppError::Validation(_))
        ));
    }
}
