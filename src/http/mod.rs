//! HTTP API over the matching engine
//!
//! Routes:
//! - `GET /` health check
//! - `POST /parse_html_test_steps` match steps against a page
//! - `POST /generate_selenium_script` match, then ask the configured
//!   generator for an automation script

use crate::config::ServerOptions;
use crate::error::LocatorError;
use crate::matcher::{StepMatchRecord, TestStep, match_all};
use crate::script::{GeneratedScript, TextGenerator, generate_script};
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Shared state of the HTTP API
#[derive(Clone, Default)]
pub struct AppState {
    generator: Option<Arc<dyn TextGenerator>>,
}

impl AppState {
    /// State without a script generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the script generator
    pub fn with_generator(mut self, generator: Arc<dyn TextGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }
}

/// Request body shared by both POST routes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HtmlTestParseRequest {
    /// HTML source to parse
    pub html: String,

    /// Test steps referencing elements of the page
    pub test_steps: Vec<TestStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HtmlTestParseResponse {
    pub elements: Vec<StepMatchRecord>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for LocatorError {
    fn into_response(self) -> Response {
        let status = match &self {
            LocatorError::GeneratorUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            LocatorError::GenerationFailed(_) => StatusCode::BAD_GATEWAY,
            LocatorError::DocumentParseFailed(_) | LocatorError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            LocatorError::UnknownTool(_) => StatusCode::NOT_FOUND,
            LocatorError::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ErrorBody { detail: self.to_string() })).into_response()
    }
}

/// Build the API router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/parse_html_test_steps", post(parse_html_test_steps))
        .route("/generate_selenium_script", post(generate_selenium_script))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve the API until the process is stopped
pub async fn serve(options: &ServerOptions, state: AppState) -> std::io::Result<()> {
    let bind_addr = options.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    log::info!("HTTP API listening on http://{}", bind_addr);

    axum::serve(listener, router(state)).await
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Healthy" }))
}

async fn parse_html_test_steps(Json(payload): Json<HtmlTestParseRequest>) -> Json<HtmlTestParseResponse> {
    let elements = match_all(&payload.html, &payload.test_steps);
    Json(HtmlTestParseResponse { elements })
}

async fn generate_selenium_script(
    State(state): State<AppState>,
    Json(payload): Json<HtmlTestParseRequest>,
) -> Result<Json<GeneratedScript>, LocatorError> {
    let generator = state.generator.ok_or(LocatorError::GeneratorUnavailable)?;
    let generated = generate_script(generator.as_ref(), &payload.html, &payload.test_steps).await?;

    Ok(Json(generated))
}
