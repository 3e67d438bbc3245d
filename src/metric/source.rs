//! External metric sources.
//!
//! # Responsibilities
//! - Define the contract the refresh task polls
//! - Fetch the repository star count from the GitHub REST API

use std::future::Future;
use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::Deserialize;
use thiserror::Error;

use crate::config::StarsConfig;

/// Errors that can occur while fetching an external metric.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection or protocol failure.
    #[error("request failed: {0}")]
    Request(String),

    /// Upstream answered with a non-success status.
    #[error("upstream returned status {0}")]
    Status(u16),

    /// Body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// Fetch did not complete in time.
    #[error("timed out after {0} seconds")]
    Timeout(u64),
}

/// A numeric value living outside the process.
///
/// Implementations perform network I/O and may fail or hang; callers bound
/// them with a timeout and never call them from a request handler.
pub trait MetricSource: Send + Sync + 'static {
    /// Short label used in logs and metrics.
    fn name(&self) -> &str;

    /// Fetch the current value once.
    fn fetch(&self) -> impl Future<Output = Result<u64, FetchError>> + Send;
}

#[derive(Debug, Deserialize)]
struct RepositoryInfo {
    stargazers_count: u64,
}

/// Star count of a GitHub repository.
#[derive(Debug, Clone)]
pub struct GitHubStars {
    client: reqwest::Client,
    endpoint: String,
    token: Option<String>,
}

impl GitHubStars {
    pub fn new(config: &StarsConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout() + Duration::from_secs(1))
            .build()
            .map_err(|e| FetchError::Request(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: repository_endpoint(&config.api_base_url, &config.owner, &config.repo),
            token: config.token.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn repository_endpoint(base: &str, owner: &str, repo: &str) -> String {
    format!("{}/repos/{}/{}", base.trim_end_matches('/'), owner, repo)
}

impl MetricSource for GitHubStars {
    fn name(&self) -> &str {
        "github_stars"
    }

    async fn fetch(&self) -> Result<u64, FetchError> {
        let mut request = self
            .client
            .get(&self.endpoint)
            .header(USER_AGENT, concat!("docs-server/", env!("CARGO_PKG_VERSION")))
            .header(ACCEPT, "application/vnd.github+json");

        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        let response = request
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let info: RepositoryInfo = response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        Ok(info.stargazers_count)
    }
}
