//! Application configuration.
//!
//! Build-time settings for the OrbitX web client. The Gemini key and model
//! are read from the environment when the WASM bundle is compiled, so a
//! rebuild is needed to change them.

use orbitx::config::DEFAULT_MODEL;

/// Application name, shown in the sidebar and document title.
pub const APP_NAME: &str = "OrbitX Music";

/// Gemini API key baked in at build time. Empty when unset.
pub const GEMINI_API_KEY: &str = match option_env!("GEMINI_API_KEY") {
    Some(key) => key,
    None => "",
};

/// Model override (`ORBITX_MODEL`), falling back to the default model.
pub const MODEL: &str = match option_env!("ORBITX_MODEL") {
    Some(model) => model,
    None => DEFAULT_MODEL,
};

/// Display name of the signed-in artist.
pub const ARTIST_NAME: &str = "Artist Name";

pub const SEARCH_PLACEHOLDER: &str = "Search your tracks or albums...";

pub const PROFILE_IMAGE: &str = "https://picsum.photos/seed/artist/100/100";
