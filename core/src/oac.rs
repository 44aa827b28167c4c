//! YouTube Official Artist Channel request and management.

use crate::ai::{prompt, GatewayReply, GenerateRequest, TextGenerator};
use crate::error::AiError;

/// Shown when bio generation fails.
pub const BIO_FAILURE: &str = "Failed to generate bio. Please try again.";

/// Which half of the OAC page is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OacView {
    #[default]
    Request,
    Manage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Ready,
    Pending,
}

/// One entry in the verification timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerificationStep {
    pub number: u8,
    pub title: &'static str,
    pub status: StepStatus,
}

pub const VERIFICATION_STEPS: [VerificationStep; 4] = [
    VerificationStep { number: 1, title: "Submit Links", status: StepStatus::Ready },
    VerificationStep { number: 2, title: "Internal Audit", status: StepStatus::Pending },
    VerificationStep { number: 3, title: "Google Review", status: StepStatus::Pending },
    VerificationStep { number: 4, title: "OAC Active", status: StepStatus::Pending },
];

pub const EXPECTED_COMPLETION: &str = "Expected completion: ~14 days";

/// Request form plus page state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OacRequest {
    pub view: OacView,
    pub personal_channel: String,
    pub topic_channel: String,
    pub agreed_to_requirements: bool,
    pub submitted: bool,
}

impl OacRequest {
    /// Both URLs present and the requirements box ticked.
    pub fn can_submit(&self) -> bool {
        self.agreed_to_requirements
            && !self.personal_channel.trim().is_empty()
            && !self.topic_channel.trim().is_empty()
    }

    /// Returns whether the request was accepted.
    pub fn submit(&mut self) -> bool {
        if self.can_submit() {
            log::info!("📨 OAC verification requested for {}", self.personal_channel);
            self.submitted = true;
        }
        self.submitted
    }

    /// Confirmation screen replaces the page only in request view.
    pub fn shows_confirmation(&self) -> bool {
        self.submitted && self.view == OacView::Request
    }

    /// "Go to OAC Management".
    pub fn go_to_management(&mut self) {
        self.submitted = false;
        self.view = OacView::Manage;
    }

    pub fn show(&mut self, view: OacView) {
        self.view = view;
    }
}

/// Bio generator state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BioGenerator {
    pub traits: String,
    pub bio: String,
    pub generating: bool,
}

impl BioGenerator {
    pub fn can_generate(&self) -> bool {
        !self.generating && !self.traits.trim().is_empty()
    }

    pub fn begin(&mut self) -> Option<GenerateRequest> {
        if !self.can_generate() {
            return None;
        }
        self.generating = true;
        Some(GenerateRequest::new(prompt::artist_bio(&self.traits)))
    }

    pub fn finish(&mut self, reply: GatewayReply) {
        self.bio = reply.into_text();
        self.generating = false;
    }
}

/// Generate a bio. An empty completion leaves the suggestion blank.
pub async fn generate_bio<G: TextGenerator>(gateway: &G, request: &GenerateRequest) -> GatewayReply {
    GatewayReply::resolve_with(gateway.generate(request).await, |e| match e {
        AiError::EmptyResponse => String::new(),
        _ => BIO_FAILURE.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedGateway;

    fn filled() -> OacRequest {
        OacRequest {
            personal_channel: "https://www.youtube.com/channel/UC123".into(),
            topic_channel: "https://www.youtube.com/channel/UC123_Topic".into(),
            agreed_to_requirements: true,
            ..OacRequest::default()
        }
    }

    #[test]
    fn test_submit_requires_everything() {
        let mut request = OacRequest {
            agreed_to_requirements: false,
            ..filled()
        };
        assert!(!request.submit());

        let mut request2 = OacRequest {
            topic_channel: String::new(),
            ..filled()
        };
        assert!(!request2.submit());

        request.agreed_to_requirements = true;
        assert!(request.submit());
        assert!(request.shows_confirmation());
    }

    #[test]
    fn test_go_to_management() {
        let mut request = filled();
        request.submit();
        request.go_to_management();
        assert_eq!(request.view, OacView::Manage);
        assert!(!request.submitted);
        assert!(!request.shows_confirmation());
    }

    #[test]
    fn test_blank_traits_make_no_call() {
        let mut bio = BioGenerator {
            traits: " \n ".into(),
            ..BioGenerator::default()
        };
        assert!(!bio.can_generate());
        assert!(bio.begin().is_none());
        assert!(!bio.generating);
    }

    #[tokio::test]
    async fn test_bio_generation() {
        let mut bio = BioGenerator {
            traits: "Indie pop from Austin".into(),
            ..BioGenerator::default()
        };
        let gateway = ScriptedGateway::replying(["Meet the voice of Austin indie pop."]);

        let request = bio.begin().unwrap();
        bio.finish(generate_bio(&gateway, &request).await);

        assert_eq!(bio.bio, "Meet the voice of Austin indie pop.");
        assert!(gateway.prompts()[0].contains("Indie pop from Austin"));
    }

    #[tokio::test]
    async fn test_bio_failure_text() {
        let gateway = ScriptedGateway::failing(AiError::ApiError("boom".into()));
        let request = GenerateRequest::new(prompt::artist_bio("x"));
        assert_eq!(generate_bio(&gateway, &request).await.text(), BIO_FAILURE);

        let empty = ScriptedGateway::failing(AiError::EmptyResponse);
        assert_eq!(generate_bio(&empty, &request).await.text(), "");
    }

    #[test]
    fn test_timeline() {
        assert_eq!(VERIFICATION_STEPS[0].status, StepStatus::Ready);
        assert!(VERIFICATION_STEPS[1..].iter().all(|s| s.status == StepStatus::Pending));
    }
}
