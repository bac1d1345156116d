//! Production model client: the Google Generative Language API with JSON
//! structured output.

use anyhow::{bail, Context, Result};
use base64::prelude::*;
use serde_json::{json, Value};
use tracing::debug;

use super::{ModelClient, Prompt};

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        GeminiClient {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    fn request_body(prompt: &Prompt) -> Value {
        let mut parts = vec![json!({ "text": prompt.text })];
        if let Some(media) = &prompt.media {
            parts.push(json!({
                "inlineData": {
                    "mimeType": media.mime_type,
                    "data": media.data,
                }
            }));
        }
        json!({
            "contents": [{ "parts": parts }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": prompt.response_schema,
            }
        })
    }
}

impl ModelClient for GeminiClient {
    async fn generate(&self, prompt: &Prompt) -> Result<Value> {
        let url = format!("{}/models/{}:generateContent", API_BASE, self.model);
        debug!(model = %self.model, "calling generateContent");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&Self::request_body(prompt))
            .send()
            .await
            .context("Request to the generative model failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("Model request failed with status {}: {}", status, body);
        }

        let body: Value = response
            .json()
            .await
            .context("Model response was not valid JSON")?;
        let text = body
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(Value::as_str)
            .context("Model response carried no candidate text")?;
        serde_json::from_str(text).context("Model returned a non-JSON structured output")
    }
}

/// Splits a `data:<mimetype>;base64,<encoded_data>` URI into its MIME type
/// and base64 payload.
pub fn split_data_uri(uri: &str) -> Result<(String, String)> {
    let rest = uri
        .strip_prefix("data:")
        .context("Audio must be a data URI (data:<mimetype>;base64,<data>)")?;
    let (mime_type, data) = rest
        .split_once(";base64,")
        .context("Data URI must be base64 encoded")?;
    if mime_type.is_empty() {
        bail!("Data URI is missing its MIME type");
    }
    Ok((mime_type.to_string(), data.to_string()))
}

/// Encodes raw bytes as a base64 data URI.
pub fn to_data_uri(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, BASE64_STANDARD.encode(bytes))
}
