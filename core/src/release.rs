//! Release upload wizard.
//!
//! ```text
//!   0 type ──▶ 1 assets ──▶ 2 metadata ──audit──▶ 3 confirm ──distribute──▶ catalog
//!              ◀── back     ◀── back              ◀── modify
//! ```
//!
//! The audit never blocks: a gateway failure still lands on step 3 with
//! stand-in copy.

use std::fmt;

use crate::ai::{prompt, GatewayReply, GenerateRequest, TextGenerator};
use crate::clock::Clock;
use crate::config::DISTRIBUTION_DELAY;
use crate::wizard::Step;

/// Genres offered by the metadata form.
pub const GENRES: [&str; 8] = [
    "Pop",
    "Rock",
    "Folk",
    "Hip Hop",
    "Classical",
    "Electronic",
    "Jazz",
    "R&B",
];

/// Shown on the confirm step when the audit produced nothing.
pub const AUDIT_FALLBACK: &str = "Audit completed with no warnings.";

/// Kind of release being distributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum ReleaseType {
    #[default]
    Audio,
    Video,
}

impl ReleaseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseType::Audio => "Audio",
            ReleaseType::Video => "Video",
        }
    }

    /// Stores listed on the confirm step, before "+220 More".
    pub fn targets(&self) -> &'static [&'static str] {
        match self {
            ReleaseType::Audio => &["Spotify", "Apple Music", "Amazon", "Tidal", "Deezer"],
            ReleaseType::Video => &["Vevo", "Apple Music", "Tidal", "Amazon Video"],
        }
    }

    pub fn media_label(&self) -> &'static str {
        match self {
            ReleaseType::Audio => "Audio File (WAV 24-bit preferred)",
            ReleaseType::Video => "Video File (ProRes or MP4 1080p+)",
        }
    }

    pub fn media_limit(&self) -> &'static str {
        match self {
            ReleaseType::Audio => "Max 250MB",
            ReleaseType::Video => "Max 5GB",
        }
    }

    pub fn artwork_label(&self) -> &'static str {
        match self {
            ReleaseType::Audio => "Cover Art (3000x3000px)",
            ReleaseType::Video => "Vevo-Compliant Thumbnail",
        }
    }
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata collected on step 2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseDraft {
    pub title: String,
    pub artist: String,
    pub genre: String,
    pub release_date: String,
    pub isrc: String,
    pub language: String,
    pub description: String,
    pub release_type: ReleaseType,
}

impl Default for ReleaseDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            artist: String::new(),
            genre: GENRES[0].to_string(),
            release_date: String::new(),
            isrc: String::new(),
            language: "English".to_string(),
            description: String::new(),
            release_type: ReleaseType::Audio,
        }
    }
}

/// Upload wizard state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UploadWizard {
    pub step: Step,
    pub draft: ReleaseDraft,
    /// Audit text; empty means nothing to report.
    pub audit: String,
    pub submitting: bool,
}

impl UploadWizard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Step 0: pick Audio or Video and move to assets.
    pub fn select_type(&mut self, release_type: ReleaseType) {
        if self.step != Step::FIRST {
            return;
        }
        self.draft.release_type = release_type;
        self.step = self.step.next();
    }

    /// "Next Step" on the assets page.
    pub fn next(&mut self) {
        if self.step.index() == 1 {
            self.step = self.step.next();
        }
    }

    /// "Back" / "Modify Details".
    pub fn back(&mut self) {
        if !self.submitting {
            self.step = self.step.back();
        }
    }

    /// Mark the audit in flight and hand back its prompt.
    ///
    /// `None` when not on the metadata step or already busy.
    pub fn begin_audit(&mut self) -> Option<GenerateRequest> {
        if self.submitting || self.step.index() != 2 {
            return None;
        }
        self.submitting = true;
        Some(GenerateRequest::new(prompt::release_audit(&self.draft)))
    }

    /// Record the audit outcome and advance to confirm, success or not.
    pub fn finish_audit(&mut self, reply: GatewayReply) {
        self.audit = reply.into_text();
        self.submitting = false;
        self.step = self.step.next();
    }

    /// Text for the "Gemini AI Audit Result" card.
    pub fn audit_summary(&self) -> &str {
        if self.audit.trim().is_empty() {
            AUDIT_FALLBACK
        } else {
            &self.audit
        }
    }

    /// Mark distribution in flight. `false` when not on confirm or busy.
    pub fn begin_distribution(&mut self) -> bool {
        if self.submitting || !self.step.is_last() {
            return false;
        }
        self.submitting = true;
        true
    }

    pub fn finish_distribution(&mut self) {
        self.submitting = false;
    }
}

/// Issue the metadata audit. Failures become an empty report.
pub async fn run_audit<G: TextGenerator>(gateway: &G, request: &GenerateRequest) -> GatewayReply {
    log::info!("🔍 Running metadata audit...");
    GatewayReply::resolve(gateway.generate(request).await, "")
}

/// Simulated store hand-off before the catalog redirect.
pub async fn distribute<C: Clock>(clock: &C, draft: &ReleaseDraft) {
    log::info!("🚀 Starting distribution of '{}' ({})", draft.title, draft.release_type);
    clock.sleep(DISTRIBUTION_DELAY).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::InstantClock;
    use crate::error::AiError;
    use crate::test_support::ScriptedGateway;

    fn at_metadata(release_type: ReleaseType) -> UploadWizard {
        let mut wizard = UploadWizard::new();
        wizard.select_type(release_type);
        wizard.next();
        wizard.draft.title = "Midnight Drive".into();
        wizard
    }

    #[test]
    fn test_defaults() {
        let wizard = UploadWizard::new();
        assert_eq!(wizard.step, Step::FIRST);
        assert_eq!(wizard.draft.genre, "Pop");
        assert_eq!(wizard.draft.language, "English");
    }

    #[test]
    fn test_navigation() {
        let mut wizard = UploadWizard::new();
        wizard.next();
        assert_eq!(wizard.step.index(), 0, "next is not offered on the type step");

        wizard.select_type(ReleaseType::Video);
        assert_eq!(wizard.step.index(), 1);
        assert_eq!(wizard.draft.release_type, ReleaseType::Video);

        wizard.back();
        assert_eq!(wizard.step.index(), 0);
        wizard.back();
        assert_eq!(wizard.step.index(), 0);
    }

    #[tokio::test]
    async fn test_audit_success_reaches_confirm() {
        let mut wizard = at_metadata(ReleaseType::Audio);
        let gateway = ScriptedGateway::replying(["1. Title OK\n2. Genre 92%\n3. No flags"]);

        let request = wizard.begin_audit().unwrap();
        assert!(wizard.submitting);
        assert!(wizard.begin_audit().is_none());

        wizard.finish_audit(run_audit(&gateway, &request).await);

        assert_eq!(wizard.step.index(), 3);
        assert!(!wizard.submitting);
        assert!(wizard.audit_summary().contains("Genre 92%"));
        assert!(gateway.prompts()[0].contains("Spotify and Tidal"));
    }

    #[tokio::test]
    async fn test_audit_failure_still_advances() {
        let mut wizard = at_metadata(ReleaseType::Video);
        let gateway = ScriptedGateway::failing(AiError::RequestFailed("offline".into()));

        let request = wizard.begin_audit().unwrap();
        wizard.finish_audit(run_audit(&gateway, &request).await);

        assert_eq!(wizard.step.index(), 3);
        assert_eq!(wizard.audit_summary(), AUDIT_FALLBACK);
        assert_eq!(wizard.draft.release_type.targets().len(), 4);
    }

    #[tokio::test]
    async fn test_distribution_waits_then_completes() {
        let mut wizard = at_metadata(ReleaseType::Audio);
        assert!(!wizard.begin_distribution());

        wizard.finish_audit(GatewayReply::Generated(String::new()));
        assert!(wizard.begin_distribution());
        assert!(!wizard.begin_distribution());

        let clock = InstantClock::default();
        distribute(&clock, &wizard.draft).await;
        wizard.finish_distribution();

        assert_eq!(clock.sleeps(), vec![DISTRIBUTION_DELAY]);
        assert!(!wizard.submitting);
    }

    #[test]
    fn test_modify_details_returns_to_metadata() {
        let mut wizard = at_metadata(ReleaseType::Audio);
        wizard.finish_audit(GatewayReply::Generated("ok".into()));
        wizard.back();
        assert_eq!(wizard.step.index(), 2);
    }
}
