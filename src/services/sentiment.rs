//! News sentiment scoring via an OpenAI-compatible chat endpoint.
//!
//! The scorer is an opaque capability `(title, summary) -> {sentiment,
//! score, one_liner}`. A failed call for one item becomes
//! [`SentimentOutcome::Unavailable`] so the aggregator can treat it as
//! neutral without losing the distinction.

use crate::models::market::NewsItem;
use crate::models::signal::{SentimentLabel, SentimentOutcome, SentimentScore};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

const SYSTEM_PROMPT: &str = "You are a financial news analyst. Given a headline and summary, \
reply with a JSON object only: {\"sentiment\": \"bullish\"|\"bearish\"|\"neutral\", \
\"score\": number in [-1.0, 1.0], \"one_liner\": short impact summary}.";

#[derive(Debug)]
pub enum SentimentError {
    Http(reqwest::Error),
    Api(String),
    /// The model answered but not with the expected JSON shape.
    Parse(String),
    /// No API key configured; scoring is disabled.
    Unconfigured,
}

impl fmt::Display for SentimentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentimentError::Http(e) => write!(f, "http error: {}", e),
            SentimentError::Api(msg) => write!(f, "scoring api error: {}", msg),
            SentimentError::Parse(msg) => write!(f, "unparsable scoring reply: {}", msg),
            SentimentError::Unconfigured => write!(f, "sentiment scoring is not configured"),
        }
    }
}

impl std::error::Error for SentimentError {}

impl From<reqwest::Error> for SentimentError {
    fn from(e: reqwest::Error) -> Self {
        SentimentError::Http(e)
    }
}

#[async_trait]
pub trait SentimentScorer: Send + Sync {
    async fn score(&self, title: &str, summary: &str) -> Result<SentimentScore, SentimentError>;
}

pub struct LlmSentimentScorer {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
}

impl LlmSentimentScorer {
    pub fn new(api_key: Option<String>, model: &str) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, api_key, model)
    }

    /// Reads `OPENAI_API_KEY` and `SENTIMENT_MODEL` from the environment.
    pub fn from_env() -> Self {
        let model =
            std::env::var("SENTIMENT_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Self::new(std::env::var("OPENAI_API_KEY").ok(), &model)
    }

    pub fn with_base_url(base_url: &str, api_key: Option<String>, model: &str) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(20))
                .build()
                .unwrap_or_default(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl SentimentScorer for LlmSentimentScorer {
    async fn score(&self, title: &str, summary: &str) -> Result<SentimentScore, SentimentError> {
        let api_key = self.api_key.as_ref().ok_or(SentimentError::Unconfigured)?;

        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": format!("Title: {}\nSummary: {}", title, summary) },
            ],
            "temperature": 0.0,
        });

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json::<ChatResponse>()
            .await?;

        let content = response
            .choices
            .first()
            .map(|c| c.message.content.as_str())
            .ok_or_else(|| SentimentError::Api("reply carried no choices".to_string()))?;

        let payload: SentimentPayload = serde_json::from_str(content.trim())
            .map_err(|e| SentimentError::Parse(format!("{}: {}", e, content)))?;

        Ok(SentimentScore {
            sentiment: payload.sentiment,
            score: payload.score.clamp(-1.0, 1.0),
            one_liner: payload.one_liner,
        })
    }
}

/// Score up to `limit` news items, converting each failure into an
/// `Unavailable` outcome instead of propagating it.
pub async fn score_items(
    scorer: &dyn SentimentScorer,
    items: &[NewsItem],
    limit: usize,
) -> Vec<SentimentOutcome> {
    let mut outcomes = Vec::with_capacity(items.len().min(limit));
    for item in items.iter().take(limit) {
        let summary = item.summary.as_deref().unwrap_or("");
        match scorer.score(&item.title, summary).await {
            Ok(score) => outcomes.push(SentimentOutcome::Scored(score)),
            Err(e) => {
                warn!(title = %item.title, error = %e, "sentiment scoring unavailable for item");
                outcomes.push(SentimentOutcome::Unavailable {
                    reason: e.to_string(),
                });
            }
        }
    }
    outcomes
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: String,
}

#[derive(Serialize, Deserialize)]
struct SentimentPayload {
    sentiment: SentimentLabel,
    score: f64,
    one_liner: String,
}
