//! Prompt templates for every AI panel.

use crate::providers::Provider;
use crate::release::{ReleaseDraft, ReleaseType};
use crate::studio::StudioMode;
use crate::video::VideoMetadata;

/// Three-point metadata audit for the release wizard.
pub fn release_audit(draft: &ReleaseDraft) -> String {
    let platforms = match draft.release_type {
        ReleaseType::Video => "Vevo and Apple Music Video",
        ReleaseType::Audio => "Spotify and Tidal",
    };

    format!(
        r#"Act as a Metadata Compliance Officer for {platforms}.
Audit this release:
Title: {title}
Artist: {artist}
Genre: {genre}
Description: {description}

Provide a brief 3-point compliance check:
1. Title format suitability.
2. Genre match probability.
3. Potential platform flags (prohibited keywords etc).
Keep it very concise."#,
        platforms = platforms,
        title = draft.title,
        artist = draft.artist,
        genre = draft.genre,
        description = draft.description,
    )
}

/// Four-point audit for the video distribution wizard.
pub fn video_audit(metadata: &VideoMetadata) -> String {
    format!(
        r#"Act as a Professional Music Video Compliance Auditor for Apple Music Video and Vevo.
Check this music video submission for metadata standards:
- Title: {title} (Compliance: Must be title-case, no [Official Video] tags)
- Artist: {artist}
- Director: {director}
- Production Company: {company}
- Description: {description}

Provide a strict audit report with 4 concise points regarding compliance with:
1. Apple Music Video Editorial Guidelines (Clean visuals, no end cards).
2. Vevo Formatting Standards.
3. ISRC and Metadata consistency.
4. Metadata-to-Video synchronization."#,
        title = metadata.title,
        artist = metadata.artist,
        director = metadata.director,
        company = metadata.production_company,
        description = metadata.description,
    )
}

/// Apple Transporter XML snippet requested mid-delivery.
pub fn transporter_package(metadata: &VideoMetadata) -> String {
    format!(
        r#"Generate a fictional but realistic XML snippet for Apple Music Video Transporter ingestion.
Metadata: Title: {}, Artist: {}, ISRC: {}, Genre: {}.
Format: XML. Only return the code."#,
        metadata.title, metadata.artist, metadata.isrc, metadata.genre
    )
}

/// Simulated catalog handshake for an integration card.
pub fn provider_sync(provider: Provider) -> String {
    let name = provider.as_str();
    format!(
        r#"Simulate an API response for connecting to {name}.
The user is linking their {name} account to OrbitX Music for catalog management and royalty syncing.
Return a brief summary of a fictional artist catalog from this provider.
Include:
1. Number of releases found.
2. Total lifetime revenue ($).
3. A success message confirming that metadata and earnings are being synced.
Format it in a concise, dashboard-friendly list."#
    )
}

/// YouTube Official Artist Channel "About" bio.
pub fn artist_bio(traits: &str) -> String {
    format!(
        r#"Create a professional and engaging YouTube Artist Bio for an artist with these traits: {traits}.
The bio should be suitable for the "About" section of an Official Artist Channel.
Include a strong opening, mention of musical style, and a call to action.
Keep it under 150 words."#
    )
}

/// System instruction for an AI Studio mode.
pub fn studio_system_instruction(mode: StudioMode) -> &'static str {
    match mode {
        StudioMode::Mastering => {
            "You are an AI Mixing & Mastering Engineer. We provide proprietary AI-powered mixing and mastering tools to give artists professional sound before release."
        }
        StudioMode::Marketing => {
            "You are a Music Marketing Expert. specializing in playlist pitching and smart links."
        }
        StudioMode::Video => {
            "You are a Vevo/YouTube SEO Expert. We specialize in metadata optimization for direct distribution to the Vevo platform."
        }
        StudioMode::Social => "You are a DIY Marketing Growth Hacker for musicians.",
    }
}

/// User prompt for an AI Studio mode.
pub fn studio(mode: StudioMode, description: &str) -> String {
    match mode {
        StudioMode::Mastering => format!(
            r#"Analyze the following track description for AI-assisted mastering: "{description}".
Provide a detailed "Pre-Release Sound Report":
1. Recommended EQ Profile for professional clarity.
2. Dynamic Range Optimization settings.
3. Stereo Enhancement suggestion.
4. Final LUFS (Loudness) target for Spotify vs Apple Music."#
        ),
        StudioMode::Marketing => format!(
            r#"Generate a Marketing Suite for this track: "{description}".
1. Playlist Pitching Draft: A compelling 200-character pitch for Spotify Editorial.
2. Smart Link Tagline: A short, viral-ready tagline for your Bio link.
3. Pre-save Buzz Campaign: 3 creative ideas to build hype before release."#
        ),
        StudioMode::Video => format!(
            r#"Generate Vevo and YouTube SEO metadata for a music video described as: "{description}".
1. Optimized Title (Compliance-safe).
2. Vevo-formatted Description with Artist/Director credits.
3. 3 High-CTR Thumbnail Concepts.
4. YouTube Tag Cloud (maximized for discovery)."#
        ),
        StudioMode::Social => format!(
            r#"Create a DIY Social Media Ad Campaign strategy for: "{description}".
1. 7-Day Content Calendar for Instagram Reels/TikTok.
2. Ad Copy Suite: Generate 3 high-converting ad captions.
3. Hook Ideas: 5 different video hook ideas for short-form content."#
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_audit_targets_platforms() {
        let mut draft = ReleaseDraft {
            title: "Midnight Drive".into(),
            artist: "Nova".into(),
            ..ReleaseDraft::default()
        };
        let audio = release_audit(&draft);
        assert!(audio.contains("Spotify and Tidal"));
        assert!(audio.contains("Title: Midnight Drive"));
        assert!(audio.contains("Genre: Pop"));

        draft.release_type = ReleaseType::Video;
        assert!(release_audit(&draft).contains("Vevo and Apple Music Video"));
    }

    #[test]
    fn test_video_prompts_include_metadata() {
        let metadata = VideoMetadata {
            title: "Neon Nights".into(),
            director: "A. Reyes".into(),
            isrc: "USRC17607839".into(),
            ..VideoMetadata::default()
        };
        let audit = video_audit(&metadata);
        assert!(audit.contains("Director: A. Reyes"));
        assert!(audit.contains("4 concise points"));

        let package = transporter_package(&metadata);
        assert!(package.contains("ISRC: USRC17607839"));
        assert!(package.contains("Only return the code."));
    }

    #[test]
    fn test_provider_sync_names_provider() {
        let prompt = provider_sync(Provider::Amuse);
        assert!(prompt.starts_with("Simulate an API response for connecting to Amuse."));
        assert!(prompt.contains("linking their Amuse account"));
    }

    #[test]
    fn test_studio_prompts_differ_per_mode() {
        let prompts: Vec<String> = StudioMode::ALL
            .iter()
            .map(|mode| studio(*mode, "rainy neon city"))
            .collect();
        assert!(prompts.iter().all(|p| p.contains("rainy neon city")));
        assert!(prompts[0].contains("LUFS"));
        assert!(prompts[3].contains("7-Day Content Calendar"));
        assert_ne!(
            studio_system_instruction(StudioMode::Video),
            studio_system_instruction(StudioMode::Social)
        );
    }

    #[test]
    fn test_artist_bio_word_limit() {
        assert!(artist_bio("dreamy synth-pop").contains("under 150 words"));
    }
}
