//! # OrbitX - music & video distribution dashboard core
//!
//! Platform-independent state machines, fixed data and the Gemini gateway
//! behind the OrbitX Music web client. Everything here is plain Rust and is
//! unit-tested natively; the `orbitx-frontend` crate renders it with Leptos.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │    Shell    │────▶│  Dashboard  │────▶│   Wizards   │────▶│   Gateway   │
//! │ (landing +  │     │ (11 tabs)   │     │ (audio/video│     │  (Gemini +  │
//! │    auth)    │     │             │     │  studio/OAC)│     │  fallbacks) │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//!                            │
//!                            ▼
//!                     ┌─────────────┐
//!                     │ProviderStore│  persisted, observable
//!                     └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Gateway and storage errors
//! - [`config`] - Endpoints, storage keys, simulated delays, wallet figures
//! - [`clock`] - Injectable time source
//! - [`ai`] - Text generation gateway and prompt builders
//! - [`providers`] - Connected providers store
//! - [`integrations`] - Provider sync flow
//! - [`shell`] / [`auth`] - Top-level view and simulated sign-in
//! - [`release`] / [`video`] - Distribution wizards
//! - [`studio`] / [`oac`] - AI Studio and Official Artist Channel tools
//! - [`catalog`] / [`wallet`] / [`analytics`] - Read-mostly dashboard views
//! - [`dashboard`] / [`content`] - Navigation and static copy

// Core modules
pub mod clock;
pub mod config;
pub mod error;

// Gateway
pub mod ai;

// State
pub mod integrations;
pub mod providers;

// Shell
pub mod auth;
pub mod dashboard;
pub mod shell;

// Wizards
pub mod oac;
pub mod release;
pub mod studio;
pub mod video;
pub mod wizard;

// Views
pub mod analytics;
pub mod catalog;
pub mod content;
pub mod wallet;

#[cfg(test)]
mod test_support;

// =============================================================================
// Re-exports - Errors
// =============================================================================

pub use error::{AiError, AiResult, StorageError, StorageResult};

// =============================================================================
// Re-exports - Gateway
// =============================================================================

pub use ai::{GatewayReply, GeminiClient, GenerateRequest, TextGenerator};
pub use clock::{Clock, InstantClock};

#[cfg(not(target_arch = "wasm32"))]
pub use clock::TokioClock;

// =============================================================================
// Re-exports - State
// =============================================================================

pub use dashboard::Tab;
pub use providers::{ConnectedProviders, KeyValueStore, MemoryStore, Provider, ProviderStore, SubscriptionId};
pub use release::ReleaseType;
pub use shell::{AuthMode, Shell, View};
pub use wizard::Step;
