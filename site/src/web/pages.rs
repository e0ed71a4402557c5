//! Marketing page routes.
//!
//! Pages are static HTML compiled into the binary; there is no template
//! engine and no per-request state.

use axum::response::Html;
use axum::Json;
use serde::Serialize;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn home() -> Html<&'static str> {
    Html(include_str!("../../public/home.html"))
}

pub async fn solutions() -> Html<&'static str> {
    Html(include_str!("../../public/solutions.html"))
}

pub async fn pricing() -> Html<&'static str> {
    Html(include_str!("../../public/pricing.html"))
}

pub async fn about() -> Html<&'static str> {
    Html(include_str!("../../public/about.html"))
}

pub async fn support() -> Html<&'static str> {
    Html(include_str!("../../public/support.html"))
}
