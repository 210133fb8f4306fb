//! Business logic services

pub mod codes;
pub mod content;
pub mod leads;
pub mod members;
pub mod pricing;
pub mod promotions;
pub mod schedule;
pub mod users;

use crate::{config::AuthConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    repository: Repository,
    pub promotions: promotions::PromotionsService,
    pub content: content::ContentService,
    pub leads: leads::LeadsService,
    pub members: members::MembersService,
    pub users: users::UsersService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig) -> Self {
        Self {
            promotions: promotions::PromotionsService::new(repository.clone()),
            content: content::ContentService::new(repository.clone()),
            leads: leads::LeadsService::new(repository.clone()),
            members: members::MembersService::new(repository.clone()),
            users: users::UsersService::new(repository.clone(), auth_config),
            repository,
        }
    }

    /// Database pool, used by the readiness probe
    pub fn pool(&self) -> &sqlx::Pool<sqlx::Postgres> {
        &self.repository.pool
    }
}
