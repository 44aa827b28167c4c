//! Domain configuration.
//!
//! Every simulated latency and fixed figure the dashboard shows lives here so
//! views and tests agree on the same numbers.

use std::time::Duration;

/// Generative Language API base URL.
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used by every AI panel unless overridden.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Environment variable holding the API key for native use.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Browser storage key for the connected provider list.
pub const PROVIDERS_STORAGE_KEY: &str = "orbitx_connected_providers";

/// Simulated sign-in round trip.
pub const AUTH_DELAY: Duration = Duration::from_millis(1500);

/// Wait between "Begin Distribution" and the catalog redirect.
pub const DISTRIBUTION_DELAY: Duration = Duration::from_millis(2000);

/// Video delivery pipeline stage delays.
pub mod delivery {
    use std::time::Duration;

    pub const PIPELINE_INIT: Duration = Duration::from_millis(800);
    pub const VEVO_CONNECT: Duration = Duration::from_millis(1000);
    pub const APPLE_CONNECT: Duration = Duration::from_millis(1200);
    pub const APPLE_VALIDATE: Duration = Duration::from_millis(1000);
    pub const MASTER_UPLOAD: Duration = Duration::from_millis(2000);
    pub const EDGE_MIRROR: Duration = Duration::from_millis(1200);
}

/// Base wallet balance in USD before provider earnings.
pub const BASE_BALANCE: f64 = 212.25;

/// Earnings credited when Distrokid is connected.
pub const DISTROKID_EARNINGS: f64 = 142.50;

/// Earnings credited when Amuse is connected.
pub const AMUSE_EARNINGS: f64 = 84.20;

/// Royalty advance the artist is shown as eligible for.
pub const ADVANCE_ELIGIBLE: &str = "$1,200.00";

/// Next scheduled payout.
pub const NEXT_PAYOUT_DATE: &str = "May 15, 2024";
