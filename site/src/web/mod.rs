//! Web layer: marketing pages and the contact submission endpoints.
//!
//! The handlers stay thin: gate, normalize, run the shared submission
//! pipeline, render. The form endpoint answers with a flash cookie and a
//! redirect; the API endpoint answers with a JSON body that also reports
//! delivery status.

pub mod flash;
pub mod handlers;
pub mod pages;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub use flash::{set_flash, Flash, FLASH_COOKIE};
pub use handlers::{contact, submit_contact, ApiError, ApiSuccess, AppState};
pub use pages::{about, health, home, pricing, solutions, support, HealthResponse};

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/solutions", get(solutions))
        .route("/pricing", get(pricing))
        .route("/about", get(about))
        .route("/support", get(support))
        .route("/health", get(health))
        .route("/contact", post(contact))
        .route("/submit-contact", post(submit_contact))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
