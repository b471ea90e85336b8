//! HTTP client for the LLM API endpoint

use std::time::Duration;
use async_trait::async_trait;
use tracing::{debug, warn};
use crate::QueryError;

pub const DEFAULT_BASE_URL: &str = "https://www.wolframalpha.com/api/v1/llm-api";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A single knowledge query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    /// Natural-language query, English
    pub input: String,
    /// Cap on response length in characters
    pub maxchars: Option<u32>,
    /// Unit system preference ("metric", "imperial")
    pub units: Option<String>,
    /// Location hint for location-dependent queries
    pub location: Option<String>,
}

impl QueryParams {
    pub fn new(input: impl Into<String>) -> Self {
        QueryParams {
            input: input.into(),
            ..Default::default()
        }
    }

    pub fn with_maxchars(mut self, maxchars: u32) -> Self {
        self.maxchars = Some(maxchars);
        self
    }

    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = Some(units.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Query-string pairs; empty `units`/`location` are left out
    fn to_pairs(&self, app_id: &str) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("input", self.input.clone()), ("appid", app_id.to_string())];
        if let Some(maxchars) = self.maxchars {
            pairs.push(("maxchars", maxchars.to_string()));
        }
        if let Some(units) = self.units.as_deref().filter(|u| !u.is_empty()) {
            pairs.push(("units", units.to_string()));
        }
        if let Some(location) = self.location.as_deref().filter(|l| !l.is_empty()) {
            pairs.push(("location", location.to_string()));
        }
        pairs
    }
}

/// Successful answer text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub text: String,
    /// Length of `text` in characters (not bytes)
    pub characters: usize,
}

impl Answer {
    pub fn new(text: String) -> Self {
        let characters = text.chars().count();
        Answer { text, characters }
    }
}

/// Source of knowledge-engine answers
#[async_trait]
pub trait KnowledgeQuery: Send + Sync {
    async fn query(&self, params: &QueryParams) -> Result<Answer, QueryError>;
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Missing App ID is reported per query, not at construction
    pub app_id: Option<String>,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            app_id: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

pub struct WolframClient {
    config: ClientConfig,
    client: reqwest::Client,
}

impl WolframClient {
    pub fn new(config: ClientConfig) -> Result<Self, QueryError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| QueryError::Network(format!("failed to build HTTP client: {}", e)))?;

        Ok(WolframClient { config, client })
    }
}

#[async_trait]
impl KnowledgeQuery for WolframClient {
    async fn query(&self, params: &QueryParams) -> Result<Answer, QueryError> {
        let app_id = self
            .config
            .app_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or(QueryError::MissingCredential)?;

        debug!(input = %params.input, maxchars = ?params.maxchars, "querying Wolfram|Alpha");

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&params.to_pairs(app_id))
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        let outcome = interpret_response(status, body);
        if let Err(ref e) = outcome {
            warn!(status, error = %e, "query failed");
        }
        outcome
    }
}

impl WolframClient {
    fn transport_error(&self, err: reqwest::Error) -> QueryError {
        if err.is_timeout() {
            QueryError::Timeout {
                secs: self.config.timeout.as_secs(),
            }
        } else {
            QueryError::Network(err.to_string())
        }
    }
}

/// Translate an HTTP status and body into an answer or failure kind
pub fn interpret_response(status: u16, body: String) -> Result<Answer, QueryError> {
    match status {
        200 => Ok(Answer::new(body)),
        400 => Err(QueryError::BadRequest),
        401 | 403 => {
            let lowered = body.to_lowercase();
            if lowered.contains("invalid appid") {
                Err(QueryError::InvalidAppId { status })
            } else if lowered.contains("appid missing") {
                Err(QueryError::MissingAppId { status })
            } else {
                Err(QueryError::Authentication { status })
            }
        }
        501 => Err(QueryError::NotInterpretable {
            suggestion: Some(body).filter(|b| !b.is_empty()),
        }),
        _ => Err(QueryError::UnexpectedStatus { status, body }),
    }
}
