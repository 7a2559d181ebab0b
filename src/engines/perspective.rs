use crate::domain::model::{EngineInfo, SafeText};
use crate::domain::ports::Scorer;
use crate::utils::error::{Result, ScoreError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

static INFO: EngineInfo = EngineInfo {
    label: "toxicity",
    min: 0.0,
    max: 1.0,
    min_meaning: "not toxic",
    max_meaning: "toxic",
};

const ENGINE: &str = "toxicity";

/// Remote toxicity engine speaking the Perspective `comments:analyze` wire
/// format. Quota-limited, so it only runs when the request opts in. The
/// HTTP client carries the per-call timeout and is built once, then reused
/// across requests; scoring never mutates it.
pub struct ToxicityScorer {
    client: Client,
    endpoint: String,
    api_key: String,
    char_limit: usize,
}

impl ToxicityScorer {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        char_limit: usize,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            char_limit,
        })
    }
}

#[async_trait]
impl Scorer for ToxicityScorer {
    fn info(&self) -> &EngineInfo {
        &INFO
    }

    fn opt_in_only(&self) -> bool {
        true
    }

    async fn score(&self, text: &SafeText) -> Result<f64> {
        // Engine-side length ceiling, checked before any network traffic.
        if text.char_len() > self.char_limit {
            return Err(ScoreError::EngineError {
                engine: ENGINE,
                message: format!("line too long (max {} characters)", self.char_limit),
            });
        }

        let body = AnalyzeRequest {
            comment: Comment { text: text.as_str() },
            languages: ["en"],
            requested_attributes: RequestedAttributes {
                toxicity: AttributeConfig {},
            },
        };

        tracing::debug!("POST {} ({} chars)", self.endpoint, text.char_len());
        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(ScoreError::EngineError {
                engine: ENGINE,
                message: format!("service returned {}: {}", status, detail.trim()),
            });
        }

        let parsed: AnalyzeResponse = response.json().await?;
        let span = parsed
            .attribute_scores
            .toxicity
            .span_scores
            .first()
            .ok_or_else(|| ScoreError::MalformedResponse {
                engine: ENGINE,
                message: "no span scores in response".to_string(),
            })?;

        Ok(span.score.value)
    }
}

#[derive(Debug, Serialize)]
struct AnalyzeRequest<'a> {
    comment: Comment<'a>,
    languages: [&'static str; 1],
    #[serde(rename = "requestedAttributes")]
    requested_attributes: RequestedAttributes,
}

#[derive(Debug, Serialize)]
struct Comment<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct RequestedAttributes {
    #[serde(rename = "TOXICITY")]
    toxicity: AttributeConfig,
}

#[derive(Debug, Serialize)]
struct AttributeConfig {}

#[derive(Debug, Deserialize)]
struct AnalyzeResponse {
    #[serde(rename = "attributeScores")]
    attribute_scores: AttributeScores,
}

#[derive(Debug, Deserialize)]
struct AttributeScores {
    #[serde(rename = "TOXICITY")]
    toxicity: AttributeResult,
}

#[derive(Debug, Deserialize)]
struct AttributeResult {
    #[serde(rename = "spanScores")]
    span_scores: Vec<SpanScore>,
}

#[derive(Debug, Deserialize)]
struct SpanScore {
    score: Score,
}

#[derive(Debug, Deserialize)]
struct Score {
    value: f64,
}
