//! Gemini gateway construction.

use orbitx::GeminiClient;

use crate::config::{GEMINI_API_KEY, MODEL};

/// Client configured from the build-time key and model.
///
/// A missing key is not fatal: every call then fails with
/// `MissingApiKey` and the views fall back to their canned text.
pub fn gemini_client() -> GeminiClient {
    if GEMINI_API_KEY.is_empty() {
        log::warn!("⚠️  GEMINI_API_KEY was not set at build time, AI features will use fallbacks");
    }

    log::debug!("🤖 Using model {}", MODEL);
    GeminiClient::new(GEMINI_API_KEY).with_model(MODEL)
}
