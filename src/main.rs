//! Academia Server - Gym Management System
//!
//! REST API server for the gym marketing site and its back office.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use academia_server::{api, config::AppConfig, repository::Repository, services::Services, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("academia_server={},tower_http=debug", config.logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.json_output() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting Academia Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository, config.auth.clone());

    // Seed the default admin on an empty users table
    services
        .users
        .ensure_default_admin()
        .await
        .expect("Failed to ensure default admin account");

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(server_host.parse().expect("Invalid host address"), server_port);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Authentication
        .route("/auth/login", post(api::auth::login))
        .route("/auth/logout", post(api::auth::logout))
        .route("/auth/me", get(api::auth::me))
        // Public home endpoints
        .route("/homev2/status", get(api::home::status))
        .route("/homev2/annual-savings", get(api::home::annual_savings))
        // Promotions
        .route("/promotions", get(api::promotions::list_promotions))
        .route("/promotions", post(api::promotions::create_promotion))
        .route("/promotions/:id", get(api::promotions::get_promotion))
        .route("/promotions/:id", put(api::promotions::update_promotion))
        .route("/promotions/:id", delete(api::promotions::delete_promotion))
        // Promo redirector
        .route("/promo/:code", get(api::redirect::promo_redirect))
        // Plans
        .route("/plans", get(api::plans::list_plans))
        .route("/plans", post(api::plans::create_plan))
        .route("/plans/:id", get(api::plans::get_plan))
        .route("/plans/:id", put(api::plans::update_plan))
        .route("/plans/:id", delete(api::plans::delete_plan))
        // Partners
        .route("/partners", get(api::partners::list_partners))
        .route("/partners", post(api::partners::create_partner))
        .route("/partners/:id", get(api::partners::get_partner))
        .route("/partners/:id", put(api::partners::update_partner))
        .route("/partners/:id", delete(api::partners::delete_partner))
        // Ads
        .route("/ads", get(api::ads::list_ads))
        .route("/ads", post(api::ads::create_ad))
        .route("/ads/:id", get(api::ads::get_ad))
        .route("/ads/:id", put(api::ads::update_ad))
        .route("/ads/:id", delete(api::ads::delete_ad))
        // Testimonials
        .route("/testimonials", get(api::testimonials::list_testimonials))
        .route("/testimonials", post(api::testimonials::create_testimonial))
        .route("/testimonials/:id", put(api::testimonials::update_testimonial))
        .route("/testimonials/:id", delete(api::testimonials::delete_testimonial))
        // Knowledge base
        .route("/knowledge", get(api::knowledge::list_entries))
        .route("/knowledge", post(api::knowledge::create_entry))
        // The path parameter is a slug for public reads and a numeric ID
        // for admin writes; axum requires a single name per segment
        .route("/knowledge/:key", get(api::knowledge::get_entry))
        .route("/knowledge/:key", put(api::knowledge::update_entry))
        .route("/knowledge/:key", delete(api::knowledge::delete_entry))
        // Leads
        .route("/leads", post(api::leads::create_lead))
        .route("/leads", get(api::leads::list_leads))
        .route("/leads/:id", get(api::leads::get_lead))
        .route("/leads/:id/status", put(api::leads::update_lead_status))
        .route("/leads/:id", delete(api::leads::delete_lead))
        // Members & check-ins
        .route("/members", get(api::members::list_members))
        .route("/members", post(api::members::create_member))
        .route("/members/:id", get(api::members::get_member))
        .route("/members/:id", put(api::members::update_member))
        .route("/members/:id", delete(api::members::delete_member))
        .route("/checkin/:code", post(api::members::check_in))
        .route("/checkins", get(api::members::list_checkins))
        // Users
        .route("/users", get(api::users::list_users))
        .route("/users", post(api::users::create_user))
        .route("/users/:id", get(api::users::get_user))
        .route("/users/:id", put(api::users::update_user))
        .route("/users/:id", delete(api::users::delete_user))
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .merge(routes)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
