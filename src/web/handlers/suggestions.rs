// POST /ai_suggestions — mixed 1-3 word suggestions.
//
// Body: {"text", "mode"}; mode defaults to "podcasts" when absent, and a
// `null` body counts as an empty object.
// Returns {"suggestions": [...]} with at most 12 entries.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::pipeline::suggestions::DEFAULT_MODE;
use crate::web::{api_error, AppState};

#[derive(Debug, Deserialize)]
pub struct SuggestionsRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_mode")]
    pub mode: String,
}

fn default_mode() -> String {
    DEFAULT_MODE.to_string()
}

impl Default for SuggestionsRequest {
    fn default() -> Self {
        Self {
            text: String::new(),
            mode: default_mode(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<String>,
}

pub async fn ai_suggestions(
    State(state): State<AppState>,
    Json(body): Json<Option<SuggestionsRequest>>,
) -> Response {
    let body = body.unwrap_or_default();
    let pipeline = state.pipeline.clone();
    let task =
        tokio::task::spawn_blocking(move || pipeline.ai_suggestions(&body.text, &body.mode));

    match task.await {
        Ok(suggestions) => Json(SuggestionsResponse { suggestions }).into_response(),
        Err(e) => {
            error!(error = %e, "Suggestions task failed");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Suggestion generation failed")
        }
    }
}
