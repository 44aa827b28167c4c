//! Static marketing and dashboard copy that views render from data.

use crate::dashboard::Tab;

// =============================================================================
// Overview
// =============================================================================

/// Headline stat card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub icon: &'static str,
    pub accent: &'static str,
}

pub const OVERVIEW_STATS: [StatCard; 4] = [
    StatCard { label: "Audio Streams", value: "124,500", change: "+12%", icon: "▶", accent: "indigo" },
    StatCard { label: "Video Views", value: "38,200", change: "+24%", icon: "◼", accent: "rose" },
    StatCard { label: "Total Earnings", value: "$ 842.15", change: "+8%", icon: "$", accent: "emerald" },
    StatCard { label: "Monthly Listeners", value: "12,800", change: "+15%", icon: "☺", accent: "amber" },
];

/// Overview shortcut; `target` is `None` for actions with no destination yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub target: Option<Tab>,
}

pub const QUICK_ACTIONS: [QuickAction; 3] = [
    QuickAction { title: "New Video Release", subtitle: "To Vevo & Apple Music", target: Some(Tab::Upload) },
    QuickAction { title: "Smart Link", subtitle: "For cross-platform sharing", target: None },
    QuickAction { title: "OAC Verification", subtitle: "Official Artist Channel", target: Some(Tab::Oac) },
];

/// Tile in the Recent Releases strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentRelease {
    pub id: u32,
    pub title: String,
    pub is_video: bool,
    pub plays: String,
}

impl RecentRelease {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            title: format!("Release Title {}", id),
            is_video: id % 2 == 0,
            plays: format!("{}.2k", id * 3),
        }
    }

    pub fn kind_label(&self) -> &'static str {
        if self.is_video {
            "Music Video"
        } else {
            "Audio Single"
        }
    }

    pub fn artwork_url(&self) -> String {
        format!("https://picsum.photos/seed/album{}/300/300", self.id)
    }
}

pub fn recent_releases() -> Vec<RecentRelease> {
    (1..=4).map(RecentRelease::new).collect()
}

// =============================================================================
// Plans
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub icon: &'static str,
    pub current: bool,
    pub popular: bool,
    pub cta: &'static str,
}

pub const PLANS: [Plan; 3] = [
    Plan {
        name: "Free Plan",
        price: "$0",
        description: "Perfect for new artists",
        features: &[
            "Unlimited Audio Uploads",
            "80% Royalty Share",
            "Standard Distribution",
            "Basic Analytics",
        ],
        icon: "⚡",
        current: true,
        popular: false,
        cta: "Current Plan",
    },
    Plan {
        name: "Pro Artist",
        price: "$19.99",
        description: "For professional careers",
        features: &[
            "Unlimited Audio Uploads",
            "Music Video Distribution",
            "100% Royalty Share",
            "Fast Distribution",
            "AI Mastering & Video Tools",
            "Smart Links",
        ],
        icon: "★",
        current: false,
        popular: true,
        cta: "Upgrade Now",
    },
    Plan {
        name: "Label Plan",
        price: "$99.99",
        description: "Manage multiple artists",
        features: &[
            "Unlimited Artist Seats",
            "Unlimited Music Video Distribution",
            "100% Royalty Share",
            "Priority Support",
            "YouTube OAC Support",
            "Vevo Verification",
        ],
        icon: "⛨",
        current: false,
        popular: false,
        cta: "Contact Sales",
    },
];

pub const BILLING_PERIOD: &str = "/ year";

// =============================================================================
// Landing
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 6] = [
    Feature {
        icon: "🌐",
        title: "Unlimited Distribution",
        description: "Upload unlimited songs with no monthly or annual fees (even on the free plan). Global reach to 220+ platforms.",
    },
    Feature {
        icon: "🏅",
        title: "YouTube OAC",
        description: "We help you convert your YouTube channel into an Official Artist Channel (OAC).",
    },
    Feature {
        icon: "⚡",
        title: "AI Mixing & Mastering",
        description: "Proprietary AI-powered mixing and mastering tools to give artists a professional sound before release.",
    },
    Feature {
        icon: "📈",
        title: "Analytics Dashboard",
        description: "Detailed data and graphs showing how many people are listening and how much is being earned from each country.",
    },
    Feature {
        icon: "▶",
        title: "Smart Links & Pre-save",
        description: "Create pre-save links to build hype before your music releases.",
    },
    Feature {
        icon: "👥",
        title: "Playlist Pitching",
        description: "Apply directly to major playlists. DIY marketing tools for social media engagement.",
    },
];

pub const VIDEO_HIGHLIGHTS: [&str; 4] = [
    "Official Vevo Channel Creation",
    "4K ProRes Video Delivery",
    "Metadata SEO for Video",
    "Apple Music TV Syndication",
];

/// Payout perk on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Perk {
    pub title: &'static str,
    pub description: &'static str,
}

pub const PAYOUT_PERKS: [Perk; 3] = [
    Perk {
        title: "100% Royalties",
        description: "Artists keep 100% of their earned royalties. We never take a cut of your earnings.",
    },
    Perk {
        title: "Royalty Advances",
        description: "Get advances on future earnings based on your previous song performance.",
    },
    Perk {
        title: "Fast Payouts",
        description: "Withdraw funds faster than other platforms. No complex thresholds.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_releases() {
        let releases = recent_releases();
        assert_eq!(releases.len(), 4);
        assert_eq!(releases[0].title, "Release Title 1");
        assert_eq!(releases[0].kind_label(), "Audio Single");
        assert!(releases[1].is_video);
        assert_eq!(releases[3].plays, "12.2k");
    }

    #[test]
    fn test_quick_actions_targets() {
        assert_eq!(QUICK_ACTIONS[0].target, Some(Tab::Upload));
        assert_eq!(QUICK_ACTIONS[1].target, None);
        assert_eq!(QUICK_ACTIONS[2].target, Some(Tab::Oac));
    }

    #[test]
    fn test_plans() {
        assert_eq!(PLANS.iter().filter(|p| p.current).count(), 1);
        assert_eq!(PLANS.iter().filter(|p| p.popular).count(), 1);
        assert_eq!(PLANS[1].features.len(), 6);
        assert_eq!(PLANS[2].cta, "Contact Sales");
    }
}
