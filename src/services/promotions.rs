//! Promotions service: creation with code generation, CRUD and the
//! redirect resolution used by `/promo/{code}`

use chrono::{Datelike, Utc};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::promotion::{CreatePromotion, Promotion, UpdatePromotion},
    repository::Repository,
    services::codes,
};

#[derive(Clone)]
pub struct PromotionsService {
    repository: Repository,
}

impl PromotionsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List promotions; `include_all` is reserved for authenticated sessions
    pub async fn list(&self, include_all: bool) -> AppResult<Vec<Promotion>> {
        self.repository.promotions.list(include_all).await
    }

    /// Get a promotion by ID
    pub async fn get(&self, id: i32) -> AppResult<Promotion> {
        self.repository.promotions.get(id).await
    }

    /// Create a promotion with two freshly generated, store-unique codes.
    /// Nothing is persisted when either generation loop exhausts its attempts.
    pub async fn create(&self, data: CreatePromotion) -> AppResult<Promotion> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        if data.valid_until <= Utc::now() {
            return Err(AppError::Validation(
                "validUntil must be in the future".to_string(),
            ));
        }

        let year = Utc::now().year();
        let repo = self.repository.promotions.clone();
        let unique_code = codes::generate_unique(
            || codes::promo_code(year),
            move |candidate| {
                let repo = repo.clone();
                async move { repo.code_exists(&candidate).await }
            },
        )
        .await?;

        let repo = self.repository.promotions.clone();
        let short_code = codes::generate_unique(codes::random_code, move |candidate| {
            let repo = repo.clone();
            async move { repo.code_exists(&candidate).await }
        })
        .await?;

        self.repository
            .promotions
            .create(&data, &unique_code, &short_code)
            .await
    }

    /// Update a promotion
    pub async fn update(&self, id: i32, data: UpdatePromotion) -> AppResult<Promotion> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.promotions.update(id, &data).await
    }

    /// Delete a promotion
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.promotions.delete(id).await
    }

    /// Resolve a redirect code to the promotion detail path.
    ///
    /// Lookup order: short code first, then unique code. Returns `Ok(None)`
    /// when the code is unknown, the promotion is inactive, or it has
    /// expired; on a hit the access counter is incremented before the
    /// target path is returned.
    pub async fn resolve_redirect(&self, code: &str) -> AppResult<Option<String>> {
        let promotion = match self.repository.promotions.find_by_short_code(code).await? {
            Some(p) => Some(p),
            None => self.repository.promotions.find_by_unique_code(code).await?,
        };

        let Some(promotion) = promotion else {
            return Ok(None);
        };
        if !promotion.is_active || promotion.valid_until < Utc::now() {
            return Ok(None);
        }

        self.repository
            .promotions
            .increment_access_count(promotion.id)
            .await?;

        let target = match &promotion.unique_code {
            Some(unique_code) => format!("/promotion/{}", unique_code),
            None => format!("/promotion/{}", promotion.id),
        };
        Ok(Some(target))
    }
}
