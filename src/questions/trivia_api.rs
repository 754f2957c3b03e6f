//! Question source backed by The Trivia API (`/v2/questions`).
//!
//! One `GET` per batch. The endpoint answers with a JSON array of question
//! objects; anything else is a [`SourceError::Parse`], and an empty array is
//! a [`SourceError::Empty`] so the session never starts on an invalid index.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};

use super::source::{QuestionSource, SourceError};
use super::types::{ApiQuestion, QuestionRecord};

pub const DEFAULT_TRIVIA_API_URL: &str = "https://the-trivia-api.com/v2/questions";

/// Optional query parameters. All unset means the bare endpoint is requested.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriviaQuery {
    pub limit: Option<u32>,
    pub categories: Vec<String>,
    pub difficulties: Vec<String>,
}

impl TriviaQuery {
    fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        if !self.categories.is_empty() {
            params.push(("categories", self.categories.join(",")));
        }
        if !self.difficulties.is_empty() {
            params.push(("difficulties", self.difficulties.join(",")));
        }
        params
    }
}

pub struct TriviaApiSource {
    url: String,
    query: TriviaQuery,
    client: reqwest::Client,
}

impl TriviaApiSource {
    pub fn new(url: Option<String>, query: TriviaQuery, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                warn!("Failed to build HTTP client with timeout, using defaults: {}", e);
                reqwest::Client::new()
            });

        Self {
            url: url.unwrap_or_else(|| DEFAULT_TRIVIA_API_URL.to_string()),
            query,
            client,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl QuestionSource for TriviaApiSource {
    fn name(&self) -> &str {
        "trivia-api"
    }

    async fn fetch_batch(&self) -> Result<Vec<QuestionRecord>, SourceError> {
        let params = self.query.to_params();
        info!("Fetching question batch: url={}, params={:?}", self.url, params);

        let mut request = self.client.get(&self.url);
        if !params.is_empty() {
            request = request.query(&params);
        }

        let response = request
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        debug!("Trivia API response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Trivia API error: {} - {}", status, err_body);
            return Err(SourceError::Api {
                status,
                message: err_body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let questions: Vec<ApiQuestion> = serde_json::from_str(&body).map_err(|e| {
            warn!("Trivia API body did not parse: {}", e);
            SourceError::Parse(e.to_string())
        })?;

        if questions.is_empty() {
            warn!("Trivia API returned an empty batch");
            return Err(SourceError::Empty);
        }

        info!("Fetched {} questions", questions.len());
        Ok(questions.into_iter().map(QuestionRecord::from).collect())
    }
}
