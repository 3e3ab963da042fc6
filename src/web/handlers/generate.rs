// POST /generate — one batch of n-grams for an option button.
//
// Body: {"text", "option", "mode"}, all optional strings defaulting to "".
// A `null` body counts as an empty object. Returns {"result": [...]}.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::web::{api_error, AppState};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GenerateRequest {
    pub text: String,
    /// e.g. "1word", "2word_podcasts", "3word_audio"
    pub option: String,
    pub mode: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub result: Vec<String>,
}

pub async fn generate(
    State(state): State<AppState>,
    Json(body): Json<Option<GenerateRequest>>,
) -> Response {
    let body = body.unwrap_or_default();
    let pipeline = state.pipeline.clone();
    let task = tokio::task::spawn_blocking(move || {
        pipeline.generate(&body.text, &body.option, &body.mode)
    });

    match task.await {
        Ok(result) => Json(GenerateResponse { result }).into_response(),
        Err(e) => {
            error!(error = %e, "Generate task failed");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Phrase generation failed")
        }
    }
}
