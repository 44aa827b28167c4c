//! Dashboard navigation.

/// Dashboard tab, in sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Overview,
    Catalog,
    Upload,
    VideoDistribution,
    Integrations,
    Oac,
    Analytics,
    Wallet,
    AiStudio,
    Plans,
    Settings,
}

/// Tabs reachable from the mobile bottom bar.
pub const MOBILE_TAB_COUNT: usize = 5;

impl Tab {
    pub const ALL: [Tab; 11] = [
        Tab::Overview,
        Tab::Catalog,
        Tab::Upload,
        Tab::VideoDistribution,
        Tab::Integrations,
        Tab::Oac,
        Tab::Analytics,
        Tab::Wallet,
        Tab::AiStudio,
        Tab::Plans,
        Tab::Settings,
    ];

    /// Stable identifier (also used as the DOM key).
    pub fn id(&self) -> &'static str {
        match self {
            Tab::Overview => "overview",
            Tab::Catalog => "catalog",
            Tab::Upload => "upload",
            Tab::VideoDistribution => "video-dist",
            Tab::Integrations => "integrations",
            Tab::Oac => "oac",
            Tab::Analytics => "analytics",
            Tab::Wallet => "wallet",
            Tab::AiStudio => "ai-studio",
            Tab::Plans => "plans",
            Tab::Settings => "settings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Catalog => "My Catalog",
            Tab::Upload => "Audio Distribution",
            Tab::VideoDistribution => "Video Distribution",
            Tab::Integrations => "API Integrations",
            Tab::Oac => "YouTube OAC",
            Tab::Analytics => "Analytics",
            Tab::Wallet => "Royalties",
            Tab::AiStudio => "AI Studio",
            Tab::Plans => "Subscription",
            Tab::Settings => "Settings",
        }
    }

    /// Sidebar glyph.
    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Overview => "▦",
            Tab::Catalog => "☰",
            Tab::Upload => "⇪",
            Tab::VideoDistribution => "▶",
            Tab::Integrations => "⛓",
            Tab::Oac => "◉",
            Tab::Analytics => "▥",
            Tab::Wallet => "◈",
            Tab::AiStudio => "✦",
            Tab::Plans => "▭",
            Tab::Settings => "⚙",
        }
    }

    pub fn from_id(id: &str) -> Option<Tab> {
        Self::ALL.into_iter().find(|tab| tab.id() == id)
    }

    pub fn mobile() -> &'static [Tab] {
        &Self::ALL[..MOBILE_TAB_COUNT]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_id(tab.id()), Some(tab));
        }
        assert_eq!(Tab::from_id("billing"), None);
    }

    #[test]
    fn test_sidebar_order() {
        assert_eq!(Tab::ALL[0], Tab::default());
        assert_eq!(Tab::VideoDistribution.id(), "video-dist");
        assert_eq!(Tab::Wallet.label(), "Royalties");
    }

    #[test]
    fn test_mobile_tabs() {
        assert_eq!(
            Tab::mobile(),
            &[Tab::Overview, Tab::Catalog, Tab::Upload, Tab::VideoDistribution, Tab::Integrations]
        );
    }
}
