use anyhow::Context;
use log::debug;
use reqwest::{
    Client,
    header::{HeaderMap, HeaderValue, USER_AGENT},
};

use crate::{
    FetcherError, Repository, RepositoryFetcher, Response, StdResult, UserRepositoriesRequest,
};

/// The REST production endpoint for GitHub.
pub const GITHUB_REST_ENDPOINT: &str = "https://api.github.com";

/// The `User-Agent` sent with every request.
pub const DEFAULT_USER_AGENT: &str = "swiftui-app";

/// Configuration of the REST fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestFetcherConfig {
    /// The API base URL, without trailing slash.
    pub endpoint: String,

    /// The value of the `User-Agent` header.
    pub user_agent: String,
}

impl Default for RestFetcherConfig {
    fn default() -> Self {
        Self {
            endpoint: GITHUB_REST_ENDPOINT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl From<reqwest::Error> for FetcherError {
    fn from(error: reqwest::Error) -> Self {
        FetcherError::Transport(error.to_string())
    }
}

/// Fetches repository data from the GitHub REST API.
pub struct RestFetcher {
    client: Client,
    endpoint: String,
}

impl RestFetcher {
    /// Creates a new `RestFetcher` instance with the given configuration.
    pub fn try_new(config: RestFetcherConfig) -> StdResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .with_context(|| format!("Invalid user agent: {}", config.user_agent))?,
        );
        let client = Client::builder()
            .default_headers(headers)
            .build()
            .with_context(|| "Failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
        })
    }

    fn decode(body: &[u8], status: u16) -> Result<Vec<Repository>, FetcherError> {
        serde_json::from_slice::<Vec<Repository>>(body)
            .map_err(|e| FetcherError::Decode(format!("{e} (HTTP status {status})")))
    }
}

#[async_trait::async_trait]
impl RepositoryFetcher for RestFetcher {
    async fn fetch(&self, request: &UserRepositoriesRequest) -> Result<Response, FetcherError> {
        let url = format!("{}{}", self.endpoint, request.path());
        let response = self.client.get(&url).send().await?;
        let status = response.status().as_u16();
        debug!("Received HTTP status {status} for {request}");
        let body = response.bytes().await?;

        Ok(Response::new(Self::decode(&body, status)?, status))
    }
}
