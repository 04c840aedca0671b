use std::time::Duration;

use futures_util::StreamExt;
use scout_logging::{scout_debug, scout_info, scout_warn};
use url::Url;

use crate::types::ErrorBody;
use crate::{FailureKind, FetchError, ScrapeRequest, ScrapeResponse};

pub const SCRAPE_JOBS_PATH: &str = "scrape_jobs";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Root of the scraping service, e.g. `http://127.0.0.1:5000`.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            connect_timeout: Duration::from_secs(10),
            // Scraping runs while we wait, so allow far more than a page load.
            request_timeout: Duration::from_secs(120),
            max_bytes: 8 * 1024 * 1024,
        }
    }
}

/// Resolves `path` below `base`, keeping any path prefix `base` already has.
pub fn endpoint_url(base: &str, path: &str) -> Result<Url, FetchError> {
    let mut base = Url::parse(base.trim())
        .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
    if !matches!(base.scheme(), "http" | "https") {
        return Err(FetchError::new(
            FailureKind::InvalidUrl,
            format!("unsupported scheme {}", base.scheme()),
        ));
    }
    if !base.path().ends_with('/') {
        let with_slash = format!("{}/", base.path());
        base.set_path(&with_slash);
    }
    base.join(path)
        .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))
}

#[async_trait::async_trait]
pub trait JobSearcher: Send + Sync {
    async fn search(&self, keywords: &[String]) -> Result<ScrapeResponse, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestSearcher {
    settings: ClientSettings,
}

impl ReqwestSearcher {
    pub fn new(settings: ClientSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, FetchError> {
        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(too_large(max_bytes, content_len));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(too_large(max_bytes, next_len));
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }
}

#[async_trait::async_trait]
impl JobSearcher for ReqwestSearcher {
    async fn search(&self, keywords: &[String]) -> Result<ScrapeResponse, FetchError> {
        let endpoint = endpoint_url(&self.settings.base_url, SCRAPE_JOBS_PATH)?;
        let client = self.build_client()?;
        scout_debug!("POST {} keywords={:?}", endpoint, keywords);

        let response = client
            .post(endpoint)
            .json(&ScrapeRequest { keywords })
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            // The body is only a hint for the log; it may be anything.
            if let Ok(body) = self.read_body(response).await {
                match serde_json::from_slice::<ErrorBody>(&body) {
                    Ok(ErrorBody { error }) => {
                        scout_warn!("Service answered {}: {}", status, error)
                    }
                    Err(_) => scout_warn!("Service answered {} ({} bytes)", status, body.len()),
                }
            }
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body = self.read_body(response).await?;
        let parsed: ScrapeResponse = serde_json::from_slice(&body)
            .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))?;
        scout_info!(
            "Search returned jobs={} keywords={} total_jobs={:?}",
            parsed.jobs.len(),
            parsed
                .companies_by_keyword
                .as_ref()
                .map_or(0, |groups| groups.0.len()),
            parsed.total_jobs
        );
        Ok(parsed)
    }
}

fn too_large(max_bytes: u64, actual: u64) -> FetchError {
    FetchError::new(
        FailureKind::TooLarge {
            max_bytes,
            actual: Some(actual),
        },
        "response too large",
    )
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return FetchError::new(FailureKind::Decode, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
