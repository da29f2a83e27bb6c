use engine_logging::{engine_debug, engine_warn};
use reel_core::{
    is_suggestable, FailureKind, LoadError, MovieDetail, MovieSummary, SearchPage,
    MAX_SUGGESTIONS, RATE_LIMIT_MARKER,
};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use crate::config::GatewayConfig;
use crate::wire::{is_true, DetailBody, SearchBody};

const NO_MOVIES_MESSAGE: &str = "No movies found";
const DETAIL_NOT_FOUND_MESSAGE: &str = "Movie not found";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    #[error("{0}")]
    NotFound(String),
    #[error("API Request limit reached! Please try again later.")]
    RateLimited,
    #[error("API key is invalid or unauthorized. Please check your API key.")]
    Unauthorized,
    #[error("Network error: {0}")]
    Network(String),
    /// Non-success HTTP status whose body carried the service's own `Error` text.
    #[error("{0}")]
    Service(String),
}

impl GatewayError {
    pub fn kind(&self) -> FailureKind {
        match self {
            GatewayError::NotFound(_) => FailureKind::NotFound,
            GatewayError::RateLimited => FailureKind::RateLimited,
            GatewayError::Unauthorized => FailureKind::Unauthorized,
            GatewayError::Network(_) | GatewayError::Service(_) => FailureKind::Network,
        }
    }
}

impl From<GatewayError> for LoadError {
    fn from(err: GatewayError) -> Self {
        LoadError::new(err.kind(), err.to_string())
    }
}

/// The three query kinds the client issues against the movie database.
///
/// Implementations do not retry; the caller decides whether to ask again.
#[async_trait::async_trait]
pub trait MovieGateway: Send + Sync {
    /// One page of results for `query`. `page` starts at 1.
    async fn search(&self, query: &str, page: u32) -> Result<SearchPage, GatewayError>;

    /// Up to [`MAX_SUGGESTIONS`] matches; every failure degrades to an empty list.
    async fn suggest(&self, query: &str) -> Vec<MovieSummary> {
        if !is_suggestable(query) {
            return Vec::new();
        }
        match self.search(query.trim(), 1).await {
            Ok(page) => page.items.into_iter().take(MAX_SUGGESTIONS).collect(),
            Err(err) => {
                engine_debug!("suggestions for {:?} swallowed error: {}", query, err);
                Vec::new()
            }
        }
    }

    async fn get_by_id(&self, id: &str) -> Result<MovieDetail, GatewayError>;
}

#[derive(Debug, Clone)]
pub struct OmdbGateway {
    config: GatewayConfig,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ErrorBody {
    #[serde(rename = "Error")]
    error: Option<String>,
}

impl OmdbGateway {
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        let mut builder = reqwest::Client::builder().connect_timeout(config.connect_timeout);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| GatewayError::Network(err.to_string()))?;
        Ok(Self { config, client })
    }

    fn request_url(&self, params: &[(&str, &str)]) -> Url {
        let mut url = self.config.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            if let Some(key) = self.config.api_key.as_deref() {
                pairs.append_pair("apikey", key);
            }
            for (name, value) in params {
                pairs.append_pair(name, value);
            }
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, params: &[(&str, &str)]) -> Result<T, GatewayError> {
        let response = self
            .client
            .get(self.request_url(params))
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(GatewayError::Unauthorized);
        }
        let body = response.bytes().await.map_err(map_reqwest_error)?;

        if !status.is_success() {
            let service_error = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(|body| body.error);
            return Err(match service_error {
                Some(message) if message.contains(RATE_LIMIT_MARKER) => GatewayError::RateLimited,
                Some(message) => GatewayError::Service(message),
                None => GatewayError::Network(status.to_string()),
            });
        }

        serde_json::from_slice(&body)
            .map_err(|err| GatewayError::Network(format!("invalid response body: {err}")))
    }
}

#[async_trait::async_trait]
impl MovieGateway for OmdbGateway {
    async fn search(&self, query: &str, page: u32) -> Result<SearchPage, GatewayError> {
        engine_debug!("search query={:?} page={}", query, page);
        let page = page.max(1).to_string();
        let body: SearchBody = self.get_json(&[("s", query), ("page", page.as_str())]).await?;

        if !is_true(&body.response) {
            let message = body.error.unwrap_or_else(|| NO_MOVIES_MESSAGE.to_string());
            engine_warn!("search query={:?} rejected: {}", query, message);
            return Err(if message.contains(RATE_LIMIT_MARKER) {
                GatewayError::RateLimited
            } else {
                GatewayError::NotFound(message)
            });
        }

        let raw_total = body.total_results.unwrap_or_default();
        let total_count = raw_total
            .trim()
            .parse::<usize>()
            .map_err(|_| GatewayError::Network(format!("invalid totalResults {raw_total:?}")))?;

        Ok(SearchPage {
            items: body.search.into_iter().map(MovieSummary::from).collect(),
            total_count,
        })
    }

    async fn get_by_id(&self, id: &str) -> Result<MovieDetail, GatewayError> {
        engine_debug!("detail id={:?}", id);
        let body: DetailBody = self.get_json(&[("i", id), ("plot", "full")]).await?;

        if !is_true(&body.response) {
            let message = body.error.unwrap_or_default();
            engine_warn!("detail id={:?} rejected: {}", id, message);
            return Err(if message.contains(RATE_LIMIT_MARKER) {
                GatewayError::RateLimited
            } else {
                GatewayError::NotFound(DETAIL_NOT_FOUND_MESSAGE.to_string())
            });
        }

        Ok(body.into())
    }
}

fn map_reqwest_error(err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        return GatewayError::Network(format!("request timed out: {err}"));
    }
    GatewayError::Network(err.to_string())
}
