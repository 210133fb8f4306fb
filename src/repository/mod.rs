//! Repository layer for database operations

pub mod ads;
pub mod knowledge;
pub mod leads;
pub mod members;
pub mod partners;
pub mod plans;
pub mod promotions;
pub mod testimonials;
pub mod users;

use sqlx::{Pool, Postgres};

use crate::error::AppError;

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub promotions: promotions::PromotionsRepository,
    pub plans: plans::PlansRepository,
    pub partners: partners::PartnersRepository,
    pub ads: ads::AdsRepository,
    pub testimonials: testimonials::TestimonialsRepository,
    pub knowledge: knowledge::KnowledgeRepository,
    pub leads: leads::LeadsRepository,
    pub members: members::MembersRepository,
    pub users: users::UsersRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            promotions: promotions::PromotionsRepository::new(pool.clone()),
            plans: plans::PlansRepository::new(pool.clone()),
            partners: partners::PartnersRepository::new(pool.clone()),
            ads: ads::AdsRepository::new(pool.clone()),
            testimonials: testimonials::TestimonialsRepository::new(pool.clone()),
            knowledge: knowledge::KnowledgeRepository::new(pool.clone()),
            leads: leads::LeadsRepository::new(pool.clone()),
            members: members::MembersRepository::new(pool.clone()),
            users: users::UsersRepository::new(pool.clone()),
            pool,
        }
    }
}

/// Map a Postgres unique-constraint violation to a conflict error,
/// leaving every other database error untouched.
pub(crate) fn map_unique_violation(err: sqlx::Error, message: &str) -> AppError {
    if let sqlx::Error::Database(ref db) = err {
        if db.code().as_deref() == Some("23505") {
            return AppError::Conflict(message.to_string());
        }
    }
    AppError::Database(err)
}
