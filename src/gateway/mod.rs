//! The prompt gateway: three stateless request/response contracts forwarded
//! to an external generative model.
//!
//! Each call is single-shot and unordered with respect to other calls.
//! There is no queueing, retry, caching, or cancellation here; callers that
//! care about overlapping calls use a [`tracker::RequestTracker`] to keep
//! last-request-wins deterministic.

pub mod gemini;
pub mod tracker;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;
use std::future::Future;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SummarizeRequest {
    pub title: String,
    pub description: String,
    pub comments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
    pub sentiment: Sentiment,
}

#[derive(Debug, Clone, Serialize)]
pub struct SentimentRequest {
    /// All comments concatenated into one blob, as the analyzer widget
    /// sends them.
    pub comments: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SentimentResponse {
    pub sentiment: Sentiment,
    pub explanation: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TranscribeRequest {
    /// Audio as a data URI: `data:<mimetype>;base64,<encoded_data>`.
    pub audio: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TranscribeResponse {
    pub transcription: String,
}

/// An inline media attachment sent alongside the prompt text.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaPart {
    pub mime_type: String,
    /// Base64 payload, already stripped of the data-URI prefix.
    pub data: String,
}

/// A single model request: prompt text, optional media, and the JSON
/// schema the response must satisfy.
#[derive(Debug, Clone)]
pub struct Prompt {
    pub text: String,
    pub media: Option<MediaPart>,
    pub response_schema: Value,
}

/// Seam between the gateway and the model transport. The production
/// implementation is [`gemini::GeminiClient`]; tests substitute a stub.
pub trait ModelClient {
    /// Sends one prompt and returns the model's structured-output payload
    /// as raw JSON.
    fn generate(&self, prompt: &Prompt) -> impl Future<Output = Result<Value>>;
}

pub struct PromptGateway<C: ModelClient> {
    client: C,
}

impl<C: ModelClient> PromptGateway<C> {
    pub fn new(client: C) -> Self {
        PromptGateway { client }
    }

    /// Summarizes a report and its comments; the summary targets 50 words
    /// but the limit is advisory, not enforced.
    pub async fn summarize(&self, request: &SummarizeRequest) -> Result<SummarizeResponse> {
        let mut text = format!(
            "Summarize the following civic issue report and analyze the sentiment of the comments.\n\n\
             Title: {}\n\
             Description: {}\n\
             Comments:\n",
            request.title, request.description
        );
        for comment in &request.comments {
            text.push_str("- ");
            text.push_str(comment);
            text.push('\n');
        }
        text.push_str(
            "\nProvide a concise summary of the issue report, no more than 50 words. \
             Also, determine the overall sentiment (positive, neutral, or negative) \
             expressed in the comments section.",
        );

        let prompt = Prompt {
            text,
            media: None,
            response_schema: json!({
                "type": "OBJECT",
                "properties": {
                    "summary": { "type": "STRING" },
                    "sentiment": { "type": "STRING", "enum": ["positive", "neutral", "negative"] }
                },
                "required": ["summary", "sentiment"]
            }),
        };

        debug!(title = %request.title, comments = request.comments.len(), "summarize request");
        let value = self.client.generate(&prompt).await?;
        serde_json::from_value(value).context("Summarize response failed schema validation")
    }

    pub async fn analyze_sentiment(&self, request: &SentimentRequest) -> Result<SentimentResponse> {
        let prompt = Prompt {
            text: format!(
                "Analyze the sentiment of the following comments related to a civic issue report. \
                 Determine if the overall sentiment is positive, neutral, or negative. \
                 Provide a brief explanation for your assessment.\n\n\
                 Comments: {}",
                request.comments
            ),
            media: None,
            response_schema: json!({
                "type": "OBJECT",
                "properties": {
                    "sentiment": { "type": "STRING", "enum": ["positive", "neutral", "negative"] },
                    "explanation": { "type": "STRING" }
                },
                "required": ["sentiment", "explanation"]
            }),
        };

        debug!(chars = request.comments.len(), "sentiment request");
        let value = self.client.generate(&prompt).await?;
        serde_json::from_value(value).context("Sentiment response failed schema validation")
    }

    pub async fn transcribe(&self, request: &TranscribeRequest) -> Result<TranscribeResponse> {
        let (mime_type, data) = gemini::split_data_uri(&request.audio)?;

        let prompt = Prompt {
            text: "Please transcribe the following audio file.".to_string(),
            media: Some(MediaPart { mime_type, data }),
            response_schema: json!({
                "type": "OBJECT",
                "properties": {
                    "transcription": { "type": "STRING" }
                },
                "required": ["transcription"]
            }),
        };

        debug!("transcribe request");
        let value = self.client.generate(&prompt).await?;
        serde_json::from_value(value).context("Transcribe response failed schema validation")
    }
}
