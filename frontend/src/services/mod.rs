//! Browser-side implementations of the core seams.
//!
//! # Services
//!
//! - [`clock`] - timer-backed [`orbitx::Clock`]
//! - [`storage`] - `localStorage`-backed [`orbitx::KeyValueStore`]
//! - [`clipboard`] - best-effort copy to clipboard
//! - [`gateway`] - Gemini client from build-time configuration

pub mod clipboard;
pub mod clock;
pub mod gateway;
pub mod storage;

pub use clipboard::*;
pub use clock::*;
pub use gateway::*;
pub use storage::*;
