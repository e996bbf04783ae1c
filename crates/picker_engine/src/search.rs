use std::time::Duration;

use engine_logging::{engine_debug, engine_warn};
use futures_util::StreamExt;
use reqwest::StatusCode;
use url::Url;

use crate::types::ErrorBody;
use crate::{CharacterPage, CharacterRecord, FailureKind, SearchError};

pub const DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com/api";

#[derive(Debug, Clone)]
pub struct SearchSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 2 * 1024 * 1024,
        }
    }
}

/// Name search against the character catalog; first page only.
#[async_trait::async_trait]
pub trait Searcher: Send + Sync {
    async fn search(&self, name: Option<&str>) -> Result<Vec<CharacterRecord>, SearchError>;
}

/// Holds one pooled `reqwest::Client` for every search it runs.
#[derive(Debug, Clone)]
pub struct ReqwestSearcher {
    settings: SearchSettings,
    client: reqwest::Client,
}

impl ReqwestSearcher {
    pub fn new(settings: SearchSettings) -> Result<Self, SearchError> {
        let client = build_client(&settings)?;
        Ok(Self { settings, client })
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    /// `{base}/character/?name=...`; an absent name is sent as empty.
    pub fn endpoint(&self, name: Option<&str>) -> Result<Url, SearchError> {
        let base = self.settings.base_url.trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}/character/"))
            .map_err(|err| SearchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        url.query_pairs_mut().append_pair("name", name.unwrap_or(""));
        Ok(url)
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, SearchError> {
        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(SearchError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(SearchError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }
}

#[async_trait::async_trait]
impl Searcher for ReqwestSearcher {
    async fn search(&self, name: Option<&str>) -> Result<Vec<CharacterRecord>, SearchError> {
        let url = self.endpoint(name)?;

        let response = self
            .client
            .get(url).send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        let body = self.read_body(response).await?;

        if !status.is_success() {
            let provider_error = serde_json::from_slice::<ErrorBody>(&body).ok();
            // The catalog reports "no match" as 404 with an error body.
            if status == StatusCode::NOT_FOUND {
                if let Some(error) = &provider_error {
                    engine_debug!("catalog has no match for {:?}: {}", name, error.error);
                    return Ok(Vec::new());
                }
            }
            let message = provider_error
                .map(|body| body.error)
                .unwrap_or_else(|| status.to_string());
            engine_warn!("catalog answered {} for {:?}: {}", status, name, message);
            return Err(SearchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                message,
            ));
        }

        let page: CharacterPage = serde_json::from_slice(&body)
            .map_err(|err| SearchError::new(FailureKind::Decode, err.to_string()))?;
        engine_debug!(
            "catalog returned {} rows for {:?} (total {:?})",
            page.results.len(),
            name,
            page.info.as_ref().map(|info| info.count)
        );
        Ok(page.results)
    }
}

fn build_client(settings: &SearchSettings) -> Result<reqwest::Client, SearchError> {
    reqwest::Client::builder()
        .connect_timeout(settings.connect_timeout)
        .timeout(settings.request_timeout)
        .build()
        .map_err(|err| SearchError::new(FailureKind::Network, err.to_string()))
}

fn map_reqwest_error(err: reqwest::Error) -> SearchError {
    if err.is_timeout() {
        return SearchError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return SearchError::new(FailureKind::Decode, err.to_string());
    }
    SearchError::new(FailureKind::Network, err.to_string())
}
