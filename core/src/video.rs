//! Video distribution wizard and the multi-stage delivery pipeline.
//!
//! Steps: 0 master assets, 1 metadata, 2 compliance review, 3 delivery.
//! Delivery is a scripted sequence of timestamped log lines with one
//! gateway call in the middle that fabricates the Apple Transporter package.
//! If that call fails the pipeline stops where it is.

use crate::ai::{self, prompt, GatewayReply, GenerateRequest, TextGenerator};
use crate::clock::Clock;
use crate::config::delivery;
use crate::error::AiResult;
use crate::release::GENRES;
use crate::wizard::Step;

/// Shown on the review step when the audit produced nothing.
pub const AUDIT_FALLBACK: &str =
    "Audit complete. Metadata follows Apple Music Video and Vevo submission guidelines.";

/// Stores listed on the review step.
pub const DISTRIBUTION_TARGETS: [&str; 4] =
    ["Apple Music Video", "Vevo Global", "Tidal 4K", "Amazon Video Central"];

/// Music video metadata draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoMetadata {
    pub title: String,
    pub artist: String,
    pub director: String,
    pub producer: String,
    pub production_company: String,
    pub label: String,
    pub isrc: String,
    pub upc: String,
    pub genre: String,
    pub release_date: String,
    pub explicit: bool,
    pub description: String,
}

impl Default for VideoMetadata {
    fn default() -> Self {
        Self {
            title: String::new(),
            artist: String::new(),
            director: String::new(),
            producer: String::new(),
            production_company: String::new(),
            label: String::new(),
            isrc: String::new(),
            upc: String::new(),
            genre: GENRES[0].to_string(),
            release_date: String::new(),
            explicit: false,
            description: String::new(),
        }
    }
}

/// Progress reported by [`deliver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryEvent {
    /// A timestamped log line.
    Log(String),
    /// The generated Transporter XML.
    Package(String),
    /// Pipeline ended, successfully or not.
    Finished,
}

/// Video wizard state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VideoWizard {
    pub step: Step,
    pub metadata: VideoMetadata,
    pub report: String,
    pub submitting: bool,
    pub delivery_log: Vec<String>,
    pub package: Option<String>,
}

impl VideoWizard {
    pub fn new() -> Self {
        Self::default()
    }

    /// "Configure Metadata" on the assets step.
    pub fn configure_metadata(&mut self) {
        if self.step == Step::FIRST {
            self.step = self.step.next();
        }
    }

    /// "Back" / "Back to Metadata". Not available once delivery started.
    pub fn back(&mut self) {
        if !self.submitting && !self.step.is_last() {
            self.step = self.step.back();
        }
    }

    /// The audit button needs a title and nothing in flight.
    pub fn can_audit(&self) -> bool {
        self.step.index() == 1 && !self.submitting && !self.metadata.title.trim().is_empty()
    }

    pub fn begin_audit(&mut self) -> Option<GenerateRequest> {
        if !self.can_audit() {
            return None;
        }
        self.submitting = true;
        Some(GenerateRequest::new(prompt::video_audit(&self.metadata)))
    }

    /// Record the audit and move to review, success or not.
    pub fn finish_audit(&mut self, reply: GatewayReply) {
        self.report = reply.into_text();
        self.submitting = false;
        self.step = self.step.next();
    }

    pub fn report_summary(&self) -> &str {
        if self.report.trim().is_empty() {
            AUDIT_FALLBACK
        } else {
            &self.report
        }
    }

    /// "Start Global Delivery": jump to step 3 with a fresh log.
    pub fn begin_delivery(&mut self) -> bool {
        if self.submitting || self.step.index() != 2 {
            return false;
        }
        self.submitting = true;
        self.step = self.step.next();
        self.delivery_log.clear();
        self.package = None;
        true
    }

    pub fn apply(&mut self, event: DeliveryEvent) {
        match event {
            DeliveryEvent::Log(line) => self.delivery_log.push(line),
            DeliveryEvent::Package(xml) => self.package = Some(xml),
            DeliveryEvent::Finished => self.submitting = false,
        }
    }

    pub fn delivery_headline(&self) -> &'static str {
        if self.submitting {
            "Processing Multi-Stage Delivery..."
        } else {
            "Delivery Initiated Successfully!"
        }
    }
}

fn stamp<C: Clock>(clock: &C, message: &str) -> DeliveryEvent {
    let line = format!("{}: {}", clock.timestamp(), message);
    log::info!("📦 {}", line);
    DeliveryEvent::Log(line)
}

/// Issue the compliance audit. Failures become an empty report.
pub async fn run_audit<G: TextGenerator>(gateway: &G, request: &GenerateRequest) -> GatewayReply {
    log::info!("🔍 Running video compliance audit...");
    GatewayReply::resolve(gateway.generate(request).await, "")
}

/// Run the scripted delivery pipeline, reporting each stage via `emit`.
///
/// Returns the Transporter package on success, or `None` when the gateway
/// answered with an empty completion. On any other gateway failure an error
/// line is emitted, later stages are skipped and the error is returned.
/// [`DeliveryEvent::Finished`] is emitted last in every case.
pub async fn deliver<G, C>(
    gateway: &G,
    clock: &C,
    metadata: &VideoMetadata,
    mut emit: impl FnMut(DeliveryEvent),
) -> AiResult<Option<String>>
where
    G: TextGenerator,
    C: Clock,
{
    emit(stamp(clock, "Initializing Multi-Platform Video Distribution Pipeline..."));
    clock.sleep(delivery::PIPELINE_INIT).await;

    emit(stamp(clock, "Connecting to Vevo Partner Portal API..."));
    clock.sleep(delivery::VEVO_CONNECT).await;
    emit(stamp(clock, "Vevo Metadata Package (DDEX) generated."));

    emit(stamp(clock, "Establishing secure connection to Apple iTunes Connect Ingestion Node..."));
    clock.sleep(delivery::APPLE_CONNECT).await;
    emit(stamp(clock, "Validating Apple Music Video Technical Specs (4K ProRes 422 HQ)..."));
    clock.sleep(delivery::APPLE_VALIDATE).await;
    emit(stamp(clock, "Packaging Apple Music Video Metadata (Transporter Format)..."));

    let request = GenerateRequest::new(prompt::transporter_package(metadata));
    let package = match ai::allow_empty(gateway.generate(&request).await) {
        Ok(xml) if xml.is_empty() => None,
        Ok(xml) => Some(xml),
        Err(e) => {
            log::error!("❌ Delivery aborted: {}", e);
            emit(stamp(clock, &format!("Error during multi-stage delivery: {}", e)));
            emit(DeliveryEvent::Finished);
            return Err(e);
        }
    };
    if let Some(xml) = &package {
        emit(DeliveryEvent::Package(xml.clone()));
    }
    emit(stamp(clock, "Apple Music metadata package verified."));

    emit(stamp(clock, "Uploading 4K Master Asset to Primary Distribution Hub..."));
    clock.sleep(delivery::MASTER_UPLOAD).await;

    emit(stamp(clock, "Mirroring to European and Asian Delivery Edge Nodes..."));
    clock.sleep(delivery::EDGE_MIRROR).await;

    emit(stamp(clock, "Syndication status: PENDING QUALITY CONTROL (Apple Music Video)."));
    emit(stamp(clock, "Syndication status: INGESTING (Vevo)."));
    emit(DeliveryEvent::Finished);

    Ok(package)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::InstantClock;
    use crate::error::AiError;
    use crate::test_support::ScriptedGateway;
    use chrono::NaiveTime;
    use std::time::Duration;

    fn at_review() -> VideoWizard {
        let mut wizard = VideoWizard::new();
        wizard.configure_metadata();
        wizard.metadata.title = "Neon Nights".into();
        wizard.metadata.isrc = "QM-AAA-24-00001".into();
        let _ = wizard.begin_audit();
        wizard.finish_audit(GatewayReply::Generated("All clear.".into()));
        wizard
    }

    fn clock() -> InstantClock {
        InstantClock::at(NaiveTime::from_hms_opt(14, 2, 9).unwrap())
    }

    #[test]
    fn test_audit_requires_title() {
        let mut wizard = VideoWizard::new();
        wizard.configure_metadata();
        assert!(!wizard.can_audit());
        assert!(wizard.begin_audit().is_none());

        wizard.metadata.title = "Moonlight".into();
        assert!(wizard.can_audit());
        let request = wizard.begin_audit().unwrap();
        assert!(request.prompt.contains("Title: Moonlight"));
        assert!(!wizard.can_audit());
    }

    #[tokio::test]
    async fn test_audit_failure_reaches_review() {
        let mut wizard = VideoWizard::new();
        wizard.configure_metadata();
        wizard.metadata.title = "Moonlight".into();
        let gateway = ScriptedGateway::failing(AiError::QuotaExceeded("429".into()));

        let request = wizard.begin_audit().unwrap();
        wizard.finish_audit(run_audit(&gateway, &request).await);

        assert_eq!(wizard.step.index(), 2);
        assert_eq!(wizard.report_summary(), AUDIT_FALLBACK);
    }

    #[tokio::test]
    async fn test_delivery_success_sequence() {
        let mut wizard = at_review();
        assert!(wizard.begin_delivery());
        assert_eq!(wizard.step.index(), 3);
        assert_eq!(wizard.delivery_headline(), "Processing Multi-Stage Delivery...");

        let gateway = ScriptedGateway::replying(["<package><video/></package>"]);
        let clock = clock();
        let metadata = wizard.metadata.clone();

        let result = deliver(&gateway, &clock, &metadata, |event| wizard.apply(event)).await;

        assert_eq!(result.unwrap().as_deref(), Some("<package><video/></package>"));
        assert!(!wizard.submitting);
        assert_eq!(wizard.package.as_deref(), Some("<package><video/></package>"));
        assert_eq!(wizard.delivery_log.len(), 11);
        assert_eq!(
            wizard.delivery_log[0],
            "14:02:09: Initializing Multi-Platform Video Distribution Pipeline..."
        );
        assert_eq!(
            wizard.delivery_log.last().map(String::as_str),
            Some("14:02:09: Syndication status: INGESTING (Vevo).")
        );
        assert_eq!(
            clock.sleeps(),
            [800, 1000, 1200, 1000, 2000, 1200].map(Duration::from_millis).to_vec()
        );
        assert!(gateway.prompts()[0].contains("ISRC: QM-AAA-24-00001"));
        assert_eq!(wizard.delivery_headline(), "Delivery Initiated Successfully!");
    }

    #[tokio::test]
    async fn test_delivery_failure_stops_pipeline() {
        let mut wizard = at_review();
        wizard.begin_delivery();

        let gateway = ScriptedGateway::failing(AiError::RequestFailed("connection reset".into()));
        let clock = clock();
        let metadata = wizard.metadata.clone();

        let result = deliver(&gateway, &clock, &metadata, |event| wizard.apply(event)).await;

        assert!(result.is_err());
        assert!(!wizard.submitting);
        assert!(wizard.package.is_none());
        assert_eq!(wizard.delivery_log.len(), 7);
        assert_eq!(
            wizard.delivery_log[6],
            "14:02:09: Error during multi-stage delivery: HTTP request failed: connection reset"
        );
        assert_eq!(clock.sleeps().len(), 4);
    }

    #[tokio::test]
    async fn test_delivery_empty_completion_runs_to_end() {
        let mut wizard = at_review();
        wizard.begin_delivery();

        let gateway = ScriptedGateway::failing(AiError::EmptyResponse);
        let clock = clock();
        let metadata = wizard.metadata.clone();

        let result = deliver(&gateway, &clock, &metadata, |event| wizard.apply(event)).await;

        assert_eq!(result.unwrap(), None);
        assert!(!wizard.submitting);
        assert!(wizard.package.is_none());
        assert_eq!(wizard.delivery_log.len(), 11);
        assert_eq!(
            wizard.delivery_log[9],
            "14:02:09: Syndication status: PENDING QUALITY CONTROL (Apple Music Video)."
        );
        assert_eq!(
            wizard.delivery_log[10],
            "14:02:09: Syndication status: INGESTING (Vevo)."
        );
        assert_eq!(clock.sleeps().len(), 6);
    }

    #[test]
    fn test_back_navigation() {
        let mut wizard = at_review();
        wizard.back();
        assert_eq!(wizard.step.index(), 1);
        wizard.back();
        wizard.back();
        assert_eq!(wizard.step, Step::FIRST);

        let mut delivering = at_review();
        delivering.begin_delivery();
        delivering.back();
        assert_eq!(delivering.step.index(), 3);
    }
}
