//! AI Studio: four single-shot assistant modes over one description box.

use crate::ai::{prompt, GatewayReply, GenerateRequest, TextGenerator};
use crate::error::AiError;

/// Shown when the model answers with nothing.
pub const NO_RESULTS: &str = "Sorry, no results found.";

/// Shown when the call fails.
pub const REQUEST_FAILED: &str = "Error processing request.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum StudioMode {
    #[default]
    Mastering,
    Marketing,
    Video,
    Social,
}

impl StudioMode {
    pub const ALL: [StudioMode; 4] = [
        StudioMode::Mastering,
        StudioMode::Marketing,
        StudioMode::Video,
        StudioMode::Social,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StudioMode::Mastering => "AI Mastering",
            StudioMode::Marketing => "Smart Links",
            StudioMode::Video => "Vevo SEO",
            StudioMode::Social => "DIY Ad Campaign",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            StudioMode::Mastering => {
                "e.g., Heavy electronic track with aggressive bass. Needs more clarity in vocals..."
            }
            StudioMode::Marketing => "e.g., Chill lo-fi track for Spotify 'Lo-fi Beats' pitching...",
            StudioMode::Video => "e.g., Music video shot in a rainy city, neon aesthetic...",
            StudioMode::Social => "e.g., Promoting a summer anthem to Gen Z audience on TikTok...",
        }
    }

    /// Gateway request for `description` in this mode.
    pub fn request(&self, description: &str) -> GenerateRequest {
        GenerateRequest::new(prompt::studio(*self, description))
            .with_system_instruction(prompt::studio_system_instruction(*self))
    }
}

/// Panel state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StudioPanel {
    pub mode: StudioMode,
    pub description: String,
    pub response: String,
    pub loading: bool,
}

impl StudioPanel {
    /// Switching mode discards the previous answer.
    pub fn switch_mode(&mut self, mode: StudioMode) {
        self.mode = mode;
        self.response.clear();
    }

    pub fn can_generate(&self) -> bool {
        !self.loading && !self.description.trim().is_empty()
    }

    /// Mark a call in flight. `None` for a blank description or while busy.
    pub fn begin(&mut self) -> Option<GenerateRequest> {
        if !self.can_generate() {
            return None;
        }
        self.loading = true;
        Some(self.mode.request(&self.description))
    }

    pub fn finish(&mut self, reply: GatewayReply) {
        self.response = reply.into_text();
        self.loading = false;
    }
}

/// Run one studio request.
pub async fn generate<G: TextGenerator>(gateway: &G, request: &GenerateRequest) -> GatewayReply {
    GatewayReply::resolve_with(gateway.generate(request).await, |e| match e {
        AiError::EmptyResponse => NO_RESULTS.to_string(),
        _ => REQUEST_FAILED.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedGateway;

    #[test]
    fn test_blank_description_makes_no_call() {
        let mut panel = StudioPanel {
            description: "   ".into(),
            ..StudioPanel::default()
        };
        assert!(panel.begin().is_none());
        assert!(!panel.loading);
    }

    #[test]
    fn test_switch_mode_clears_response() {
        let mut panel = StudioPanel {
            response: "old report".into(),
            ..StudioPanel::default()
        };
        panel.switch_mode(StudioMode::Social);
        assert_eq!(panel.mode, StudioMode::Social);
        assert!(panel.response.is_empty());
    }

    #[tokio::test]
    async fn test_generate_sends_system_instruction() {
        let mut panel = StudioPanel {
            mode: StudioMode::Video,
            description: "rainy neon city".into(),
            ..StudioPanel::default()
        };
        let gateway = ScriptedGateway::replying(["1. Optimized Title: Neon Rain"]);

        let request = panel.begin().unwrap();
        assert!(panel.begin().is_none());
        panel.finish(generate(&gateway, &request).await);

        assert_eq!(panel.response, "1. Optimized Title: Neon Rain");
        assert!(!panel.loading);
        let sent = &gateway.requests()[0];
        assert!(sent.system_instruction.as_deref().unwrap().contains("Vevo/YouTube SEO"));
    }

    #[tokio::test]
    async fn test_fallback_texts() {
        let empty = ScriptedGateway::failing(AiError::EmptyResponse);
        let request = StudioMode::Mastering.request("bass heavy");
        assert_eq!(generate(&empty, &request).await.text(), NO_RESULTS);

        let broken = ScriptedGateway::failing(AiError::RequestFailed("offline".into()));
        assert_eq!(generate(&broken, &request).await.text(), REQUEST_FAILED);
    }

    #[test]
    fn test_labels() {
        let labels: Vec<&str> = StudioMode::ALL.iter().map(StudioMode::label).collect();
        assert_eq!(labels, ["AI Mastering", "Smart Links", "Vevo SEO", "DIY Ad Campaign"]);
    }
}
