//! Error types for the OrbitX domain layer.
//!
//! - [`AiError`] - AI gateway client errors
//! - [`StorageError`] - Browser key-value store errors
//!
//! Neither is fatal. Gateway failures are folded into a
//! [`GatewayReply::Fallback`](crate::ai::GatewayReply) at the call site and
//! storage failures degrade to an empty provider list.

use thiserror::Error;

// =============================================================================
// AI Gateway Errors
// =============================================================================

/// Errors from the generative text gateway.
///
/// Payloads are plain strings so the error can be cloned into UI state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AiError {
    /// No API key was configured.
    #[error("Missing API key: {0}")]
    MissingApiKey(String),

    /// Transport failure before a response arrived.
    #[error("HTTP request failed: {0}")]
    RequestFailed(String),

    /// The key was rejected (401/403).
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Rate limit or quota exhausted (429).
    #[error("Quota exceeded: {0}")]
    QuotaExceeded(String),

    /// Any other non-success response.
    #[error("API error: {0}")]
    ApiError(String),

    /// The body could not be decoded.
    #[error("Invalid JSON response: {0}")]
    InvalidJson(String),

    /// The model answered with no text.
    #[error("Empty completion")]
    EmptyResponse,
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors from a [`KeyValueStore`](crate::providers::KeyValueStore).
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing store could not be reached (private mode, no window).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// A write was refused (quota, security policy).
    #[error("Failed to write key '{key}': {message}")]
    WriteFailed { key: String, message: String },

    /// Stored value is not the expected JSON shape.
    #[error("Storage JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for gateway operations.
pub type AiResult<T> = Result<T, AiError>;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_error_display() {
        let err = AiError::QuotaExceeded("slow down".into());
        assert_eq!(err.to_string(), "Quota exceeded: slow down");
        assert_eq!(AiError::EmptyResponse.to_string(), "Empty completion");
    }

    #[test]
    fn test_storage_error_from_json() {
        let json_err = serde_json::from_str::<Vec<String>>("{not json").unwrap_err();
        let err: StorageError = json_err.into();
        assert!(err.to_string().starts_with("Storage JSON error"));
    }

    #[test]
    fn test_write_failed_format() {
        let err = StorageError::WriteFailed {
            key: "orbitx_connected_providers".into(),
            message: "QuotaExceededError".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("orbitx_connected_providers"));
        assert!(msg.contains("QuotaExceededError"));
    }
}
