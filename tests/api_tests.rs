//! API integration tests
//!
//! These run against a live server with a migrated database:
//! cargo test -- --ignored

use reqwest::{redirect::Policy, Client};
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080";

/// Helper to build a client holding an admin session cookie
async fn get_admin_client() -> Client {
    let client = Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to build client");

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "email": "admin@academia.local",
            "password": "admin"
        }))
        .send()
        .await
        .expect("Failed to send login request");

    assert!(response.status().is_success(), "Admin login failed");
    client
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_login_and_me() {
    let client = get_admin_client().await;

    let response = client
        .get(format!("{}/auth/me", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["email"], "admin@academia.local");
    assert_eq!(body["role"], "admin");
}

#[tokio::test]
#[ignore]
async fn test_login_invalid_credentials() {
    let client = Client::new();

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({
            "email": "admin@academia.local",
            "password": "wrong"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_unauthenticated_promotion_create_is_rejected() {
    let client = Client::new();

    let response = client
        .post(format!("{}/promotions", BASE_URL))
        .json(&json!({
            "title": "No session",
            "description": "Should fail",
            "validUntil": "2099-01-01T00:00:00Z"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_home_status_envelope() {
    let client = Client::new();

    let response = client
        .get(format!("{}/homev2/status", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], true);
    assert!(body["data"]["isOpen"].is_boolean());
    assert!(body["data"]["nextStatus"].is_string());
    assert!(body["data"]["nextTime"].is_string());
    assert!(body["data"]["currentTime"].is_string());
    assert!(body["data"]["dayName"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_annual_savings_monthly() {
    let client = Client::new();

    let response = client
        .get(format!(
            "{}/homev2/annual-savings?monthlyPrice=100&billingCycle=monthly",
            BASE_URL
        ))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["monthlyPrice"], 100);
    assert_eq!(body["data"]["yearlyPrice"], 1020);
    assert_eq!(body["data"]["savings"], 180);
    assert_eq!(body["data"]["discountPercentage"], 15);
    assert_eq!(body["data"]["billingCycle"], "monthly");
}

#[tokio::test]
#[ignore]
async fn test_annual_savings_rejects_non_positive_price() {
    let client = Client::new();

    let response = client
        .get(format!(
            "{}/homev2/annual-savings?monthlyPrice=0&billingCycle=monthly",
            BASE_URL
        ))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_promotion_lifecycle_and_redirect() {
    let admin = get_admin_client().await;

    // Create a promotion; both codes are generated server-side
    let response = admin
        .post(format!("{}/promotions", BASE_URL))
        .json(&json!({
            "title": "Plano anual com desconto",
            "description": "Oferta de teste",
            "validUntil": "2099-01-01T00:00:00Z"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    let promo_id = body["id"].as_i64().expect("No promotion ID");
    let unique_code = body["uniqueCode"].as_str().expect("No unique code").to_string();
    let short_code = body["shortCode"].as_str().expect("No short code").to_string();
    assert_eq!(body["accessCount"], 0);

    // PROMO-<year>-<6 base36 chars>
    let parts: Vec<&str> = unique_code.splitn(3, '-').collect();
    assert_eq!(parts[0], "PROMO");
    assert_eq!(parts[1].len(), 4);
    assert!(parts[1].chars().all(|c| c.is_ascii_digit()));
    assert_eq!(parts[2].len(), 6);
    assert!(parts[2].chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    assert_eq!(short_code.len(), 6);

    // Each redirect hits the detail page and increments the counter
    let no_redirect = Client::builder()
        .redirect(Policy::none())
        .build()
        .expect("Failed to build client");

    for _ in 0..2 {
        let response = no_redirect
            .get(format!("{}/promo/{}", BASE_URL, short_code))
            .send()
            .await
            .expect("Failed to send request");

        assert!(response.status().is_redirection());
        let location = response
            .headers()
            .get("location")
            .expect("No location header")
            .to_str()
            .unwrap();
        assert_eq!(location, format!("/promotion/{}", unique_code));
    }

    // The unique code resolves too
    let response = no_redirect
        .get(format!("{}/promo/{}", BASE_URL, unique_code))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_redirection());

    let response = admin
        .get(format!("{}/promotions/{}", BASE_URL, promo_id))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["accessCount"], 3);

    // Deactivated promotions redirect home
    let response = admin
        .put(format!("{}/promotions/{}", BASE_URL, promo_id))
        .json(&json!({ "isActive": false }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let response = no_redirect
        .get(format!("{}/promo/{}", BASE_URL, short_code))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_redirection());
    assert_eq!(response.headers()["location"], "/");

    // Cleanup
    let response = admin
        .delete(format!("{}/promotions/{}", BASE_URL, promo_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_promotion_with_past_validity_is_rejected() {
    let admin = get_admin_client().await;

    let response = admin
        .post(format!("{}/promotions", BASE_URL))
        .json(&json!({
            "title": "Expirada",
            "description": "Data no passado",
            "validUntil": "2000-01-01T00:00:00Z"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_promotion_with_missing_fields_is_rejected() {
    let admin = get_admin_client().await;

    // No validUntil; body deserialization failures must surface as 400
    let response = admin
        .post(format!("{}/promotions", BASE_URL))
        .json(&json!({
            "title": "Oferta incompleta",
            "description": "Sem data de validade"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_unknown_promo_code_redirects_home() {
    let client = Client::builder()
        .redirect(Policy::none())
        .build()
        .expect("Failed to build client");

    let response = client
        .get(format!("{}/promo/NOSUCH", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_redirection());
    assert_eq!(response.headers()["location"], "/");
}

#[tokio::test]
#[ignore]
async fn test_lead_capture() {
    let client = Client::new();

    let response = client
        .post(format!("{}/leads", BASE_URL))
        .json(&json!({
            "name": "Maria Silva",
            "email": "maria@example.com",
            "phone": "+55 11 99999-0000",
            "message": "Quero agendar uma visita"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "new");
    let lead_id = body["id"].as_i64().expect("No lead ID");

    // Cleanup
    let admin = get_admin_client().await;
    let response = admin
        .delete(format!("{}/leads/{}", BASE_URL, lead_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_lead_with_invalid_email_is_rejected() {
    let client = Client::new();

    let response = client
        .post(format!("{}/leads", BASE_URL))
        .json(&json!({
            "name": "Sem Email",
            "email": "not-an-email"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_testimonial_submission_needs_moderation() {
    let client = Client::new();

    let response = client
        .post(format!("{}/testimonials", BASE_URL))
        .json(&json!({
            "authorName": "João",
            "content": "Melhor academia da cidade!",
            "rating": 5
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["isApproved"], false);
    let id = body["id"].as_i64().expect("No testimonial ID");

    // Unapproved entries stay out of the public listing
    let response = client
        .get(format!("{}/testimonials", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    let listing: Value = response.json().await.expect("Failed to parse response");
    assert!(listing
        .as_array()
        .unwrap()
        .iter()
        .all(|t| t["id"].as_i64() != Some(id)));

    // Cleanup
    let admin = get_admin_client().await;
    let response = admin
        .delete(format!("{}/testimonials/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_member_checkin_flow() {
    let admin = get_admin_client().await;

    let response = admin
        .post(format!("{}/members", BASE_URL))
        .json(&json!({
            "name": "Carlos Teste",
            "email": "carlos.checkin@example.com"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    let member_id = body["id"].as_i64().expect("No member ID");
    let code = body["checkinCode"].as_str().expect("No check-in code").to_string();
    assert_eq!(code.len(), 6);

    // Check in with the generated code
    let client = Client::new();
    let response = client
        .post(format!("{}/checkin/{}", BASE_URL, code))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["memberName"], "Carlos Teste");

    // Unknown codes are rejected
    let response = client
        .post(format!("{}/checkin/XXXXXX", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);

    // Cleanup
    let response = admin
        .delete(format!("{}/members/{}", BASE_URL, member_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 204);
}

#[tokio::test]
#[ignore]
async fn test_public_plan_listing() {
    let client = Client::new();

    let response = client
        .get(format!("{}/plans", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.is_array());
    // The public listing never exposes inactive plans
    assert!(body
        .as_array()
        .unwrap()
        .iter()
        .all(|p| p["isActive"] == true));
}

#[tokio::test]
#[ignore]
async fn test_full_listing_requires_session() {
    let client = Client::new();

    let response = client
        .get(format!("{}/promotions?all=true", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}
