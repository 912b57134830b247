//! Article sources.
//!
//! An [`ArticleSource`] turns a document identifier into raw HTML. The
//! production source exports Google Docs through the Drive v3 REST API.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::config::ServiceConfig;
use crate::encoding::decode_html;
use crate::error::{Error, Result};

/// Longest slice of an upstream error body kept in error messages.
const ERROR_EXCERPT_CHARS: usize = 200;

/// Anything that can deliver the raw HTML of an article.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Fetch the HTML for `document_id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Fetch`] when the document cannot be retrieved.
    async fn fetch_raw_html(&self, document_id: &str) -> Result<String>;
}

/// Exports Google Docs as HTML via `files.export`.
#[derive(Debug, Clone)]
pub struct DriveExportSource {
    client: reqwest::Client,
    api_base: Url,
    access_token: Option<String>,
}

impl DriveExportSource {
    /// Build a source from service configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the API base is not a valid URL or the
    /// HTTP client cannot be constructed.
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let api_base = Url::parse(&config.drive_api_base).map_err(|e| {
            Error::Config(format!(
                "invalid Drive API base {:?}: {e}",
                config.drive_api_base
            ))
        })?;
        if api_base.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "Drive API base {:?} cannot carry a path",
                config.drive_api_base
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))?;

        if config.drive_access_token.is_none() {
            tracing::warn!(
                "no GOOGLE_DRIVE_ACCESS_TOKEN configured; Drive exports will be unauthenticated"
            );
        }

        Ok(Self {
            client,
            api_base,
            access_token: config.drive_access_token.clone(),
        })
    }

    /// URL of the HTML export for `document_id`.
    ///
    /// The identifier is percent-encoded as a single path segment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Fetch`] for an empty identifier.
    pub fn export_url(&self, document_id: &str) -> Result<Url> {
        if document_id.trim().is_empty() {
            return Err(Error::Fetch("document id is empty".to_string()));
        }

        let mut url = self.api_base.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| Error::Config("Drive API base cannot carry a path".to_string()))?;
            segments
                .pop_if_empty()
                .extend(["drive", "v3", "files", document_id, "export"]);
        }
        url.query_pairs_mut().append_pair("mimeType", "text/html");
        Ok(url)
    }
}

#[async_trait]
impl ArticleSource for DriveExportSource {
    async fn fetch_raw_html(&self, document_id: &str) -> Result<String> {
        let url = self.export_url(document_id)?;
        tracing::debug!(%url, "exporting document from Drive");

        let mut request = self.client.get(url);
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Fetch(format!("request to Drive failed: {e}")))?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = response
            .bytes()
            .await
            .map_err(|e| Error::Fetch(format!("reading Drive response failed: {e}")))?;

        if !status.is_success() {
            let excerpt: String = String::from_utf8_lossy(&body)
                .chars()
                .take(ERROR_EXCERPT_CHARS)
                .collect();
            tracing::warn!(%status, document_id, "Drive export rejected");
            return Err(Error::Fetch(format!(
                "Drive export returned {status}: {}",
                excerpt.trim()
            )));
        }

        Ok(decode_html(&body, content_type.as_deref()))
    }
}
