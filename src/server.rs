//! HTTP surface.
//!
//! `GET /articles/{documentId}` fetches the document from the configured
//! [`ArticleSource`], validates it, and answers with the report as JSON.
//! Status codes are decided here and nowhere else.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use crate::error::{Error, Result};
use crate::report::ArticleReport;
use crate::source::ArticleSource;
use crate::validate::validate_article;

/// Body of a successful response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleResponse {
    /// Always `"OK"`.
    pub status: String,
    pub data: ArticleReport,
}

/// Body of a 400 response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BadRequestBody {
    pub error: String,
}

/// Body of a 500 response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureBody {
    pub message: String,
}

#[derive(Clone)]
struct AppState {
    source: Arc<dyn ArticleSource>,
}

/// Build the application router around an article source.
pub fn router(source: Arc<dyn ArticleSource>) -> Router {
    Router::new()
        .route("/articles", get(missing_document_id))
        .route("/articles/", get(missing_document_id))
        .route("/articles/{document_id}", get(get_article))
        .layer(CorsLayer::permissive())
        .with_state(AppState { source })
}

/// Fetch one document and validate it off the async runtime.
///
/// # Errors
///
/// Propagates fetch and validation errors; a failed blocking task becomes
/// [`Error::ValidationInternal`].
pub async fn fetch_and_validate(
    source: &dyn ArticleSource,
    document_id: &str,
) -> Result<ArticleReport> {
    let raw_html = source.fetch_raw_html(document_id).await?;

    // Parsed documents are not Send; keep the whole parse on one blocking thread
    tokio::task::spawn_blocking(move || validate_article(&raw_html))
        .await
        .map_err(|e| Error::ValidationInternal(format!("validation task failed: {e}")))?
}

async fn get_article(State(state): State<AppState>, Path(document_id): Path<String>) -> Response {
    if document_id.trim().is_empty() {
        return missing_document_id().await;
    }

    tracing::info!(document_id = %document_id, "validating article");
    match fetch_and_validate(state.source.as_ref(), &document_id).await {
        Ok(report) => {
            tracing::info!(
                document_id = %document_id,
                issues = report.issues.total_count,
                "article validated"
            );
            let body = ArticleResponse {
                status: "OK".to_string(),
                data: report,
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(error) => {
            tracing::warn!(document_id = %document_id, %error, "article validation failed");
            let body = FailureBody {
                message: format!("Error occurred {error}"),
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}

async fn missing_document_id() -> Response {
    let body = BadRequestBody {
        error: "No document id provided".to_string(),
    };
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}
