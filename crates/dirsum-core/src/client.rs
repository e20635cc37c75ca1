//! Completion client for the Gemini `generateContent` endpoint
//!
//! One blocking request per call, no retries. Every failure is turned into a
//! bracketed marker string so callers can show the result as-is.

use reqwest::blocking::Client;
use serde::Serialize;
use serde_json::Value;

use crate::{Config, DirsumError, Result, MISSING_API_KEY_MARKER, NO_TEXT_MARKER};

/// Anything that turns a prompt into display-ready text.
///
/// Implementations must not fail: errors come back as text.
pub trait Completer {
    fn complete(&self, prompt: &str) -> String;
}

/// Request body for `generateContent`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_p: f32,
    max_output_tokens: u32,
}

/// Gemini API client
pub struct GeminiClient {
    api_key: String,
    endpoint: String,
    generation: GenerationConfig,
    client: Client,
}

impl GeminiClient {
    /// Create a client for the model and endpoint named in `config`.
    ///
    /// An empty `api_key` is accepted; every call then short-circuits to the
    /// missing-key marker without touching the network.
    pub fn new(api_key: impl Into<String>, config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| DirsumError::Http(e.to_string()))?;

        Ok(Self {
            api_key: api_key.into(),
            endpoint: format!(
                "{}/{}:generateContent",
                config.api_base.trim_end_matches('/'),
                config.model
            ),
            generation: GenerationConfig {
                temperature: config.temperature,
                top_p: config.top_p,
                max_output_tokens: config.max_output_tokens,
            },
            client,
        })
    }

    /// POST the prompt and return the raw response body.
    fn send(&self, prompt: &str) -> std::result::Result<String, reqwest::Error> {
        let body = GenerateRequest {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
            generation_config: self.generation,
        };

        self.client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()?
            .error_for_status()?
            .text()
    }
}

impl Completer for GeminiClient {
    fn complete(&self, prompt: &str) -> String {
        if self.api_key.is_empty() {
            return MISSING_API_KEY_MARKER.to_string();
        }

        tracing::debug!("Sending {} char prompt to {}", prompt.len(), self.endpoint);

        let raw = match self.send(prompt) {
            Ok(raw) => raw,
            Err(e) => {
                // The URL carries the API key as a query parameter
                let e = e.without_url();
                tracing::warn!("Completion request failed: {}", e);
                return format!("[API Request Error: {e}]");
            }
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(body) => interpret_response(&body, &raw),
            Err(e) => {
                tracing::warn!("Completion response was not JSON: {}", e);
                format!("[API Request Error: {e}]")
            }
        }
    }
}

/// Pull `candidates[0].content.parts[0].text` out of a response body.
///
/// Missing or empty `candidates`/`parts` means the response had an
/// unexpected format and is echoed back; a body whose fields exist but
/// can't be indexed the expected way could not be parsed.
pub fn interpret_response(body: &Value, raw: &str) -> String {
    const UNPARSEABLE: &str = "[API Error: Could not parse the summary from the API response]";
    let unexpected = || format!("[API Error: Unexpected response format. Response: {}]", raw.trim());

    let Some(body) = body.as_object() else {
        return UNPARSEABLE.to_string();
    };

    let candidate = match body.get("candidates") {
        Some(Value::Array(candidates)) if !candidates.is_empty() => &candidates[0],
        Some(Value::Array(_)) | Some(Value::Null) | None => return unexpected(),
        Some(_) => return UNPARSEABLE.to_string(),
    };
    let Some(candidate) = candidate.as_object() else {
        return UNPARSEABLE.to_string();
    };

    let parts = match candidate.get("content") {
        Some(Value::Object(content)) => content.get("parts"),
        Some(Value::Null) | None => None,
        Some(_) => return UNPARSEABLE.to_string(),
    };
    let part = match parts {
        Some(Value::Array(parts)) if !parts.is_empty() => &parts[0],
        Some(Value::Array(_)) | Some(Value::Null) | None => return unexpected(),
        Some(_) => return UNPARSEABLE.to_string(),
    };
    let Some(part) = part.as_object() else {
        return UNPARSEABLE.to_string();
    };

    match part.get("text") {
        Some(Value::String(text)) => text.trim().to_string(),
        None => NO_TEXT_MARKER.to_string(),
        Some(_) => UNPARSEABLE.to_string(),
    }
}

/// Whether `text` is one of the failure markers [`GeminiClient`] returns
/// instead of a model answer.
pub fn is_completion_error(text: &str) -> bool {
    text == MISSING_API_KEY_MARKER
        || text == NO_TEXT_MARKER
        || text.starts_with("[API Request Error: ")
        || text.starts_with("[API Error: ")
}
