use std::time::Duration;

use serde_json::{json, Value};

use crate::error::{PlannerError, Result};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Thin client for the generative-language `generateContent` endpoint.
///
/// The credential travels as a query parameter per the upstream API shape.
#[derive(Clone, Debug)]
pub struct GeminiClient {
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into();
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Issue a single `generateContent` call.
    ///
    /// Exactly one attempt per invocation; retry and backoff are the
    /// caller's concern. An empty credential fails before any network I/O.
    pub async fn generate_content(
        &self,
        model: &str,
        body: &Value,
        timeout: Duration,
    ) -> Result<Value> {
        if !self.has_api_key() {
            return Err(PlannerError::Credential);
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| PlannerError::Unknown(format!("Failed to build HTTP client: {err}")))?;

        let request_url = build_generate_url(&self.base_url, model, &self.api_key);

        let response = client
            .post(&request_url)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|err| PlannerError::Upstream(format!("HTTP request failed: {err}")))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|err| PlannerError::Upstream(format!("Failed to read response: {err}")))?;

        if !status.is_success() {
            let parsed: Option<Value> = serde_json::from_str(&response_text).ok();
            let api_message = parsed
                .as_ref()
                .and_then(|body| body.get("error"))
                .and_then(|error| error.get("message"))
                .and_then(|value| value.as_str())
                .map(|s| s.to_string())
                .unwrap_or_else(|| response_text.clone());

            return Err(PlannerError::Upstream(format!(
                "HTTP {} error: {}",
                status, api_message
            )));
        }

        let response_json: Value = serde_json::from_str(&response_text)
            .map_err(|err| PlannerError::Upstream(format!("Failed to parse JSON: {err}")))?;

        Ok(response_json)
    }
}

fn build_generate_url(base_url: &str, model: &str, api_key: &str) -> String {
    let trimmed = base_url.trim_end_matches('/');
    format!("{trimmed}/models/{model}:generateContent?key={api_key}")
}

/// Request body for a `generateContent` call with the fixed generation
/// parameters used across the planner.
#[derive(Clone, Debug)]
pub struct GenerateContentRequest {
    prompt: String,
    temperature: f64,
    top_k: u32,
    top_p: f64,
    max_output_tokens: u32,
}

impl GenerateContentRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            temperature: 0.7,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 8192,
        }
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }

    pub fn into_value(self) -> Value {
        json!({
            "contents": [
                {
                    "parts": [
                        { "text": self.prompt }
                    ]
                }
            ],
            "generationConfig": {
                "temperature": self.temperature,
                "topK": self.top_k,
                "topP": self.top_p,
                "maxOutputTokens": self.max_output_tokens,
            }
        })
    }
}
