//! UI components for the OrbitX Music client.
//!
//! # Shell
//! - [`Landing`] - Public marketing page ([`Hero`], [`Footer`])
//! - [`AuthModal`] - Login / signup dialog
//! - [`Dashboard`] - Sidebar, [`Header`] and the active tab
//!
//! # Dashboard Tabs
//! - [`Overview`] - Stats, growth chart and shortcuts
//! - [`CatalogView`] - Delivery status per release
//! - [`UploadSection`] - Audio / video release wizard
//! - [`VideoDistribution`] - Vevo / Apple Music Video pipeline with [`DeliveryLog`]
//! - [`Integrations`] - Distributor API connections
//! - [`YouTubeOac`] - Official Artist Channel request
//! - [`AnalyticsView`], [`WalletView`], [`AiStudio`], [`Plans`]
//!
//! # Shared
//! - [`StepIndicator`] - Numbered wizard progress

mod ai_studio;
mod analytics;
mod auth_modal;
mod catalog;
mod dashboard;
mod footer;
mod header;
mod hero;
mod integrations;
mod landing;
mod logs;
mod oac;
mod overview;
mod plans;
mod progress;
mod upload;
mod video;
mod wallet;

pub use ai_studio::*;
pub use analytics::*;
pub use auth_modal::*;
pub use catalog::*;
pub use dashboard::*;
pub use footer::*;
pub use header::*;
pub use hero::*;
pub use integrations::*;
pub use landing::*;
pub use logs::*;
pub use oac::*;
pub use overview::*;
pub use plans::*;
pub use progress::*;
pub use upload::*;
pub use video::*;
pub use wallet::*;
