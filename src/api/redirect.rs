//! Promo code redirector
//!
//! `/promo/{code}` always answers with a redirect. Unknown codes, inactive
//! or expired promotions, and storage failures all degrade to a redirect
//! to the site root instead of an error page; failures are still logged
//! for operators.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::AppState;

/// Resolve a short or unique promo code and redirect to the promotion
/// detail page, or to the site root
#[utoipa::path(
    get,
    path = "/promo/{code}",
    tag = "promotions",
    params(
        ("code" = String, Path, description = "Short code or unique code")
    ),
    responses(
        (status = 307, description = "Redirect to the promotion detail page or the site root")
    )
)]
pub async fn promo_redirect(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Redirect {
    match state.services.promotions.resolve_redirect(&code).await {
        Ok(Some(target)) => Redirect::temporary(&target),
        Ok(None) => Redirect::temporary("/"),
        Err(e) => {
            tracing::warn!("Promo redirect failed for '{}': {}", code, e);
            Redirect::temporary("/")
        }
    }
}
