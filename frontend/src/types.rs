//! Common types shared across the frontend.
//!
//! # Categories
//!
//! - **Services** - handles every component pulls from context
//! - **Error Types** - browser-side failures

use std::fmt;
use std::rc::Rc;

use leptos::*;
use orbitx::{ConnectedProviders, GeminiClient, ProviderStore};

use crate::services::{BrowserClock, LocalStorage};

// =============================================================================
// Services
// =============================================================================

/// Connected-provider store persisted in `localStorage`.
pub type SharedStore = Rc<ProviderStore<LocalStorage>>;

/// Handles provided once by [`crate::App`] and read with `expect_context`.
#[derive(Clone)]
pub struct AppServices {
    /// Gemini gateway.
    pub gateway: Rc<GeminiClient>,
    pub clock: BrowserClock,
    pub store: SharedStore,
    /// Mirror of `store`, kept current through its subscription.
    pub connected: RwSignal<ConnectedProviders>,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend errors that never reach the gateway.
#[derive(Clone, Debug)]
pub enum AppError {
    /// No `window` (not running in a browser).
    NoWindow,
    /// Clipboard write rejected.
    Clipboard(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NoWindow => write!(f, "Browser window unavailable"),
            AppError::Clipboard(msg) => write!(f, "Clipboard error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
