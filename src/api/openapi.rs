//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{
    ads, auth, health, home, knowledge, leads, members, partners, plans, promotions, redirect,
    testimonials, users,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Academia API",
        version = "1.0.0",
        description = "Gym management marketing site and back office REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::login,
        auth::logout,
        auth::me,
        // Home
        home::status,
        home::annual_savings,
        // Promotions
        promotions::list_promotions,
        promotions::get_promotion,
        promotions::create_promotion,
        promotions::update_promotion,
        promotions::delete_promotion,
        redirect::promo_redirect,
        // Plans
        plans::list_plans,
        plans::get_plan,
        plans::create_plan,
        plans::update_plan,
        plans::delete_plan,
        // Partners
        partners::list_partners,
        partners::get_partner,
        partners::create_partner,
        partners::update_partner,
        partners::delete_partner,
        // Ads
        ads::list_ads,
        ads::get_ad,
        ads::create_ad,
        ads::update_ad,
        ads::delete_ad,
        // Testimonials
        testimonials::list_testimonials,
        testimonials::create_testimonial,
        testimonials::update_testimonial,
        testimonials::delete_testimonial,
        // Knowledge base
        knowledge::list_entries,
        knowledge::get_entry,
        knowledge::create_entry,
        knowledge::update_entry,
        knowledge::delete_entry,
        // Leads
        leads::create_lead,
        leads::list_leads,
        leads::get_lead,
        leads::update_lead_status,
        leads::delete_lead,
        // Members & check-ins
        members::list_members,
        members::get_member,
        members::create_member,
        members::update_member,
        members::delete_member,
        members::check_in,
        members::list_checkins,
        // Users
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
    ),
    components(
        schemas(
            // Auth
            auth::UserInfo,
            crate::models::user::LoginRequest,
            crate::models::user::User,
            crate::models::user::CreateUser,
            crate::models::user::UpdateUser,
            crate::models::user::Role,
            // Home
            crate::models::home::GymStatus,
            crate::models::home::AnnualSavings,
            crate::models::home::BillingCycle,
            // Promotions
            crate::models::promotion::Promotion,
            crate::models::promotion::CreatePromotion,
            crate::models::promotion::UpdatePromotion,
            // Plans
            crate::models::plan::Plan,
            crate::models::plan::CreatePlan,
            crate::models::plan::UpdatePlan,
            // Partners
            crate::models::partner::Partner,
            crate::models::partner::CreatePartner,
            crate::models::partner::UpdatePartner,
            // Ads
            crate::models::ad::Ad,
            crate::models::ad::CreateAd,
            crate::models::ad::UpdateAd,
            // Testimonials
            crate::models::testimonial::Testimonial,
            crate::models::testimonial::CreateTestimonial,
            crate::models::testimonial::UpdateTestimonial,
            // Knowledge base
            crate::models::knowledge::KnowledgeEntry,
            crate::models::knowledge::CreateKnowledgeEntry,
            crate::models::knowledge::UpdateKnowledgeEntry,
            // Leads
            crate::models::lead::Lead,
            crate::models::lead::CreateLead,
            crate::models::lead::UpdateLeadStatus,
            // Members & check-ins
            crate::models::member::Member,
            crate::models::member::CreateMember,
            crate::models::member::UpdateMember,
            crate::models::member::Checkin,
            crate::models::member::CheckinWithMember,
            crate::models::member::CheckinConfirmation,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Service health"),
        (name = "auth", description = "Session authentication"),
        (name = "home", description = "Public home endpoints"),
        (name = "promotions", description = "Promotions and promo redirects"),
        (name = "plans", description = "Membership plans"),
        (name = "partners", description = "Partner businesses"),
        (name = "ads", description = "Marketing banners"),
        (name = "testimonials", description = "Member testimonials"),
        (name = "knowledge", description = "Knowledge base"),
        (name = "leads", description = "Lead capture and triage"),
        (name = "members", description = "Members and check-ins"),
        (name = "users", description = "Back-office users")
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI router
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
