// Web server — Axum JSON endpoints for the suggestion page.
//
// Two POST routes carry all the logic: /generate for one option button and
// /ai_suggestions for the mixed list. Page templates are served elsewhere.

use anyhow::Result;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::pipeline::Pipeline;

pub mod handlers;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Pipeline,
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(config: Config, pipeline: Pipeline) -> Result<()> {
    let addr = format!("{}:{}", config.bind, config.port);
    let app = build_router(AppState { pipeline });

    info!("castwords listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/generate", post(handlers::generate::generate))
        .route("/ai_suggestions", post(handlers::suggestions::ai_suggestions))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check — reports which keyword strategy is serving.
async fn health(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({
            "status": "ok",
            "toolkit": state.pipeline.strategy_name(),
        })),
    )
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}
