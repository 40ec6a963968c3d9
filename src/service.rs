//! HTTP surface: the seal API router and its error mapping.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use serde_json::json;
use tower_http::cors::CorsLayer;

use crate::assets::SealAssets;
use crate::encode::png_data_uri;
use crate::render::SealRenderer;
use crate::score::Score;
use crate::Error;

/// Shared per-process state: the renderer over the immutable assets.
#[derive(Clone)]
pub struct AppState {
    renderer: Arc<SealRenderer>,
}

/// Build the service router over the loaded assets.
///
/// Routes: `/` greeting, `/health`, and `GET /api/imagen-score/{score}`.
/// CORS is fully permissive, matching the service's public-widget use.
pub fn router(assets: Arc<SealAssets>) -> Router {
    let state = AppState {
        renderer: Arc::new(SealRenderer::new(assets)),
    };

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/imagen-score/{score}", get(seal_image))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn root() -> &'static str {
    "Welcome to the accessibility seal generation API."
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "healthy" }))
}

/// Success body: both seal variants as PNG data URIs.
#[derive(Serialize)]
struct SealResponse {
    white_seal: String,
    black_seal: String,
}

async fn seal_image(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Json<SealResponse>, ApiError> {
    let score: Score = raw.parse()?;

    // The render is pure CPU-bound pixel work; keep it off the async
    // runtime threads.
    let renderer = state.renderer.clone();
    let pair = tokio::task::spawn_blocking(move || renderer.render_pair(&score))
        .await
        .map_err(|e| Error::ImageProcessing(format!("render task failed: {e}")))??;

    tracing::debug!(score = %score, "rendered seal pair");

    Ok(Json(SealResponse {
        white_seal: png_data_uri(&pair.white)?,
        black_seal: png_data_uri(&pair.black)?,
    }))
}

/// Wrapper mapping crate errors onto HTTP responses: validation failures
/// become 400s with the bare message, everything else a 500.
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::InvalidScore(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(error = %self.0, "seal generation failed");
        }
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
