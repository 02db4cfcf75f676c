use super::engine::{undo, update};
use crate::conditions::parser::extract_conditions;
use crate::context::AppContext;
use crate::error::SearchError;
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize, Serialize)]
pub struct FeedbackRequest {
    pub q: String,
    #[serde(default)]
    pub undo: bool,
    #[serde(default)]
    pub relevant: Vec<u64>,
    #[serde(default)]
    pub irrelevant: Vec<u64>,
}

/// POST /query/update
///
/// Adjusts the cached vector for the request's query string and overwrites
/// its cached results. Responds 204 on success, 404 when the query has no
/// cached vector, 400 on a malformed filter block. The adjustment is not
/// idempotent; callers must not retry a failed update blindly.
pub async fn handle_feedback(
    Extension(ctx): Extension<Arc<AppContext>>,
    Json(req): Json<FeedbackRequest>,
) -> StatusCode {
    // cache keys are filter-stripped, so strip the same way the query path does
    let key = match extract_conditions(&req.q) {
        Ok((residual, _)) => residual,
        Err(err) => {
            tracing::debug!("Rejected feedback request: {}", err);
            return StatusCode::BAD_REQUEST;
        }
    };

    let result = if req.undo {
        undo(
            &ctx.query_cache,
            &ctx.documents,
            &key,
            &req.relevant,
            &req.irrelevant,
            ctx.config.feedback_alpha,
            ctx.config.feedback_beta,
        )
    } else {
        update(
            &ctx.query_cache,
            &ctx.documents,
            &key,
            &req.relevant,
            &req.irrelevant,
            ctx.config.feedback_alpha,
            ctx.config.feedback_beta,
        )
    };

    match result {
        Ok(_) => StatusCode::NO_CONTENT,
        Err(SearchError::NotFound(query)) => {
            tracing::debug!("Feedback for uncached query '{}'", query);
            StatusCode::NOT_FOUND
        }
        Err(SearchError::Parse(_)) => StatusCode::BAD_REQUEST,
        Err(err) => {
            tracing::error!("Feedback failed: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
