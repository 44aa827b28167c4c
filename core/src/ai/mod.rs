//! AI gateway: generative text for the dashboard's assistant panels.
//!
//! Uses the Gemini `generateContent` endpoint to produce compliance audits,
//! marketing copy, artist bios and delivery packages.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use orbitx::ai::{GatewayReply, GeminiClient, GenerateRequest, TextGenerator};
//!
//! let client = GeminiClient::from_env()?;
//! let request = GenerateRequest::new("Write a tagline for a lo-fi single");
//! let reply = GatewayReply::resolve(client.generate(&request).await, "No tagline today.");
//! println!("{}", reply.text());
//! ```
//!
//! Every call site goes through [`GatewayReply`] so a failed call never
//! blocks the flow that issued it.

pub mod prompt;

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_MODEL, GEMINI_API_BASE};
use crate::error::{AiError, AiResult};

// =============================================================================
// Gateway seam
// =============================================================================

/// A single text generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    /// Model override; the client default is used when `None`.
    pub model: Option<String>,
    /// User prompt.
    pub prompt: String,
    /// Optional system instruction.
    pub system_instruction: Option<String>,
}

impl GenerateRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            model: None,
            prompt: prompt.into(),
            system_instruction: None,
        }
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

/// Anything that can turn a prompt into text.
pub trait TextGenerator {
    fn generate(&self, request: &GenerateRequest) -> impl Future<Output = AiResult<String>>;
}

impl<G: TextGenerator> TextGenerator for &G {
    fn generate(&self, request: &GenerateRequest) -> impl Future<Output = AiResult<String>> {
        (**self).generate(request)
    }
}

/// Outcome of a gateway call as seen by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayReply {
    /// The model produced this text.
    Generated(String),
    /// The call failed; `text` is the call site's stand-in copy.
    Fallback { text: String, error: AiError },
}

impl GatewayReply {
    /// Resolve a gateway result, substituting `fallback` on any error.
    pub fn resolve(result: AiResult<String>, fallback: &str) -> Self {
        Self::resolve_with(result, |_| fallback.to_string())
    }

    /// Resolve a gateway result, choosing the stand-in text per error.
    pub fn resolve_with(result: AiResult<String>, fallback: impl FnOnce(&AiError) -> String) -> Self {
        match result {
            Ok(text) => GatewayReply::Generated(text),
            Err(error) => {
                log::error!("❌ AI gateway call failed: {}", error);
                GatewayReply::Fallback {
                    text: fallback(&error),
                    error,
                }
            }
        }
    }

    pub fn text(&self) -> &str {
        match self {
            GatewayReply::Generated(text) => text,
            GatewayReply::Fallback { text, .. } => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            GatewayReply::Generated(text) => text,
            GatewayReply::Fallback { text, .. } => text,
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, GatewayReply::Generated(_))
    }
}

/// Treat an empty completion as a blank success.
///
/// For flows where the reply is informational and a missing candidate must
/// not fail the step that asked for it.
pub fn allow_empty(result: AiResult<String>) -> AiResult<String> {
    match result {
        Err(AiError::EmptyResponse) => Ok(String::new()),
        other => other,
    }
}

// =============================================================================
// Gemini client
// =============================================================================

/// Gemini API client.
#[derive(Clone)]
pub struct GeminiClient {
    api_key: String,
    model: String,
    base_url: String,
    http: reqwest::Client,
}

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

/// Gemini API response structure
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Gemini API error response
#[derive(Debug, Deserialize)]
struct GeminiError {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

impl GeminiClient {
    /// Create a new client with explicit API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: GEMINI_API_BASE.to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Create a client from the `GEMINI_API_KEY` environment variable
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> AiResult<Self> {
        // Try loading .env file
        let _ = dotenvy::dotenv();

        let api_key = std::env::var(crate::config::API_KEY_ENV).map_err(|_| {
            AiError::MissingApiKey(format!("{} not set", crate::config::API_KEY_ENV))
        })?;

        Ok(Self::new(api_key))
    }

    /// Set the default model
    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    /// Point the client at another endpoint (proxies, tests)
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }

    /// Call the Gemini API
    async fn call_api(&self, request: &GenerateRequest) -> AiResult<String> {
        if self.api_key.is_empty() {
            return Err(AiError::MissingApiKey(format!(
                "{} not configured",
                crate::config::API_KEY_ENV
            )));
        }

        let model = request.model.as_deref().unwrap_or(&self.model);
        log::debug!("📡 Calling Gemini API (model: {}, prompt: {} chars)", model, request.prompt.len());

        let response = self
            .http
            .post(self.endpoint(model))
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(&build_body(request))
            .send()
            .await
            .map_err(|e| AiError::RequestFailed(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AiError::RequestFailed(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(classify_error(status, &body));
        }

        let text = extract_text(&body)?;
        log::debug!("✓ Received {} bytes", text.len());
        Ok(text)
    }
}

impl TextGenerator for GeminiClient {
    async fn generate(&self, request: &GenerateRequest) -> AiResult<String> {
        self.call_api(request).await
    }
}

fn build_body(request: &GenerateRequest) -> GeminiRequest<'_> {
    GeminiRequest {
        contents: vec![Content {
            role: Some("user"),
            parts: vec![Part { text: &request.prompt }],
        }],
        system_instruction: request.system_instruction.as_deref().map(|text| Content {
            role: None,
            parts: vec![Part { text }],
        }),
    }
}

/// Map a non-success status and body to an [`AiError`].
fn classify_error(status: u16, body: &str) -> AiError {
    let message = serde_json::from_str::<GeminiError>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| format!("HTTP {}: {}", status, body));

    match status {
        401 | 403 => AiError::Unauthorized(message),
        429 => AiError::QuotaExceeded(message),
        _ => AiError::ApiError(message),
    }
}

/// Join the text parts of the first candidate.
fn extract_text(body: &str) -> AiResult<String> {
    let response: GeminiResponse =
        serde_json::from_str(body).map_err(|e| AiError::InvalidJson(e.to_string()))?;

    let text = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(AiError::EmptyResponse);
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedGateway;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_from_env_reads_key() {
        let key = crate::config::API_KEY_ENV;

        std::env::remove_var(key);
        assert!(matches!(GeminiClient::from_env(), Err(AiError::MissingApiKey(_))));

        std::env::set_var(key, "test-key");
        let client = GeminiClient::from_env().unwrap();
        assert_eq!(client.api_key, "test-key");
        assert_eq!(client.model, DEFAULT_MODEL);
        std::env::remove_var(key);
    }

    #[test]
    fn test_extract_text_joins_parts() {
        let body = r#"{
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "1. Title ok. "}, {"text": "2. Genre ok."}]},
                "finishReason": "STOP"
            }]
        }"#;
        assert_eq!(extract_text(body).unwrap(), "1. Title ok. 2. Genre ok.");
    }

    #[test]
    fn test_extract_text_empty_candidates() {
        assert_eq!(extract_text(r#"{"candidates": []}"#), Err(AiError::EmptyResponse));
        assert_eq!(extract_text("{}"), Err(AiError::EmptyResponse));
    }

    #[test]
    fn test_extract_text_invalid_json() {
        assert!(matches!(extract_text("<html>"), Err(AiError::InvalidJson(_))));
    }

    #[test]
    fn test_classify_error_status() {
        let body = r#"{"error": {"code": 429, "message": "Resource exhausted", "status": "RESOURCE_EXHAUSTED"}}"#;
        assert_eq!(classify_error(429, body), AiError::QuotaExceeded("Resource exhausted".into()));

        let body = r#"{"error": {"code": 403, "message": "API key not valid"}}"#;
        assert_eq!(classify_error(403, body), AiError::Unauthorized("API key not valid".into()));

        assert_eq!(
            classify_error(500, "oops"),
            AiError::ApiError("HTTP 500: oops".into())
        );
    }

    #[test]
    fn test_body_shape() {
        let request = GenerateRequest::new("Audit this").with_system_instruction("You are strict.");
        let value = serde_json::to_value(build_body(&request)).unwrap();

        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(value["contents"][0]["parts"][0]["text"], "Audit this");
        assert_eq!(value["systemInstruction"]["parts"][0]["text"], "You are strict.");
        assert!(value["systemInstruction"].get("role").is_none());

        let bare = serde_json::to_value(build_body(&GenerateRequest::new("hi"))).unwrap();
        assert!(bare.get("systemInstruction").is_none());
    }

    #[test]
    fn test_endpoint_uses_model() {
        let client = GeminiClient::new("key").with_base_url("http://localhost:8080/");
        assert_eq!(
            client.endpoint(client.model()),
            "http://localhost:8080/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[tokio::test]
    async fn test_missing_key_fails_without_network() {
        let client = GeminiClient::new("");
        let result = client.generate(&GenerateRequest::new("hi")).await;
        assert!(matches!(result, Err(AiError::MissingApiKey(_))));
    }

    #[tokio::test]
    async fn test_reply_resolution() {
        let gateway = ScriptedGateway::failing(AiError::RequestFailed("offline".into()));
        let reply = GatewayReply::resolve(gateway.generate(&GenerateRequest::new("x")).await, "fallback");
        assert!(!reply.is_generated());
        assert_eq!(reply.text(), "fallback");

        let gateway = ScriptedGateway::replying(["generated"]);
        let reply = GatewayReply::resolve(gateway.generate(&GenerateRequest::new("x")).await, "fallback");
        assert_eq!(reply, GatewayReply::Generated("generated".into()));
    }

    #[test]
    fn test_resolve_with_picks_text_per_error() {
        let pick = |e: &AiError| match e {
            AiError::EmptyResponse => "nothing".to_string(),
            _ => "broken".to_string(),
        };
        assert_eq!(GatewayReply::resolve_with(Err(AiError::EmptyResponse), pick).into_text(), "nothing");
        assert_eq!(
            GatewayReply::resolve_with(Err(AiError::ApiError("x".into())), pick).into_text(),
            "broken"
        );
    }
}
