//! Site content service: plans, partners, ads, testimonials and the
//! knowledge base

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        ad::{Ad, CreateAd, UpdateAd, AD_POSITIONS},
        knowledge::{CreateKnowledgeEntry, KnowledgeEntry, UpdateKnowledgeEntry},
        partner::{CreatePartner, Partner, UpdatePartner},
        plan::{CreatePlan, Plan, UpdatePlan},
        testimonial::{CreateTestimonial, Testimonial, UpdateTestimonial},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct ContentService {
    repository: Repository,
}

impl ContentService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    // ---- Plans ----

    pub async fn list_plans(&self, include_all: bool) -> AppResult<Vec<Plan>> {
        self.repository.plans.list(include_all).await
    }

    pub async fn get_plan(&self, id: i32) -> AppResult<Plan> {
        self.repository.plans.get(id).await
    }

    pub async fn create_plan(&self, data: CreatePlan) -> AppResult<Plan> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.plans.create(&data).await
    }

    pub async fn update_plan(&self, id: i32, data: UpdatePlan) -> AppResult<Plan> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.plans.update(id, &data).await
    }

    pub async fn delete_plan(&self, id: i32) -> AppResult<()> {
        self.repository.plans.delete(id).await
    }

    // ---- Partners ----

    pub async fn list_partners(&self, include_all: bool) -> AppResult<Vec<Partner>> {
        self.repository.partners.list(include_all).await
    }

    pub async fn get_partner(&self, id: i32) -> AppResult<Partner> {
        self.repository.partners.get(id).await
    }

    pub async fn create_partner(&self, data: CreatePartner) -> AppResult<Partner> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.partners.create(&data).await
    }

    pub async fn update_partner(&self, id: i32, data: UpdatePartner) -> AppResult<Partner> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.partners.update(id, &data).await
    }

    pub async fn delete_partner(&self, id: i32) -> AppResult<()> {
        self.repository.partners.delete(id).await
    }

    // ---- Ads ----

    pub async fn list_ads(&self, position: Option<&str>, include_all: bool) -> AppResult<Vec<Ad>> {
        self.repository.ads.list(position, include_all).await
    }

    pub async fn get_ad(&self, id: i32) -> AppResult<Ad> {
        self.repository.ads.get(id).await
    }

    pub async fn create_ad(&self, data: CreateAd) -> AppResult<Ad> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        Self::validate_position(&data.position)?;
        self.repository.ads.create(&data).await
    }

    pub async fn update_ad(&self, id: i32, data: UpdateAd) -> AppResult<Ad> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        if let Some(position) = &data.position {
            Self::validate_position(position)?;
        }
        self.repository.ads.update(id, &data).await
    }

    pub async fn delete_ad(&self, id: i32) -> AppResult<()> {
        self.repository.ads.delete(id).await
    }

    // ---- Testimonials ----

    pub async fn list_testimonials(&self, include_all: bool) -> AppResult<Vec<Testimonial>> {
        self.repository.testimonials.list(include_all).await
    }

    pub async fn create_testimonial(&self, data: CreateTestimonial) -> AppResult<Testimonial> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.testimonials.create(&data).await
    }

    pub async fn update_testimonial(
        &self,
        id: i32,
        data: UpdateTestimonial,
    ) -> AppResult<Testimonial> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.testimonials.update(id, &data).await
    }

    pub async fn delete_testimonial(&self, id: i32) -> AppResult<()> {
        self.repository.testimonials.delete(id).await
    }

    // ---- Knowledge base ----

    pub async fn list_knowledge(
        &self,
        category: Option<&str>,
        include_all: bool,
    ) -> AppResult<Vec<KnowledgeEntry>> {
        self.repository.knowledge.list(category, include_all).await
    }

    pub async fn get_knowledge_by_slug(&self, slug: &str) -> AppResult<KnowledgeEntry> {
        self.repository.knowledge.get_published_by_slug(slug).await
    }

    pub async fn create_knowledge(&self, data: CreateKnowledgeEntry) -> AppResult<KnowledgeEntry> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        let slug = slugify(&data.title);
        self.repository.knowledge.create(&data, &slug).await
    }

    pub async fn update_knowledge(
        &self,
        id: i32,
        data: UpdateKnowledgeEntry,
    ) -> AppResult<KnowledgeEntry> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        // The slug follows the title when it changes
        let slug = data.title.as_deref().map(slugify);
        self.repository.knowledge.update(id, &data, slug.as_deref()).await
    }

    pub async fn delete_knowledge(&self, id: i32) -> AppResult<()> {
        self.repository.knowledge.delete(id).await
    }

    fn validate_position(position: &str) -> AppResult<()> {
        if AD_POSITIONS.contains(&position) {
            Ok(())
        } else {
            Err(AppError::Validation(format!(
                "Invalid ad position '{}', expected one of: {}",
                position,
                AD_POSITIONS.join(", ")
            )))
        }
    }
}

/// Derive a URL-safe slug from a pt-BR title: fold accents, lowercase,
/// collapse everything else into single hyphens
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_was_hyphen = true;

    for c in title.to_lowercase().chars() {
        let folded = match c {
            'á' | 'à' | 'â' | 'ã' => 'a',
            'é' | 'ê' => 'e',
            'í' => 'i',
            'ó' | 'ô' | 'õ' => 'o',
            'ú' | 'ü' => 'u',
            'ç' => 'c',
            other => other,
        };

        if folded.is_ascii_alphanumeric() {
            slug.push(folded);
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }

    slug.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_folds_accents_and_collapses_separators() {
        assert_eq!(slugify("Como funciona a musculação?"), "como-funciona-a-musculacao");
        assert_eq!(slugify("  Horários -- de   pico  "), "horarios-de-pico");
        assert_eq!(slugify("Treino HIIT 2x"), "treino-hiit-2x");
    }

    #[test]
    fn ad_positions_are_validated() {
        assert!(ContentService::validate_position("home").is_ok());
        assert!(ContentService::validate_position("footer").is_err());
    }
}
