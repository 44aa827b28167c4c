//! Catalog & distribution status board.
//!
//! Display-only: two native sample releases, plus synced external releases
//! for linked providers. The only interaction is the source filter.

use std::fmt;

use crate::providers::{ConnectedProviders, Provider};
use crate::release::ReleaseType;

/// Where a catalog item was distributed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    OrbitX,
    External(Provider),
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::OrbitX => "OrbitX",
            Source::External(provider) => provider.as_str(),
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, Source::OrbitX)
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Overall release status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseStatus {
    Distributing,
    Live,
    MetadataCheck,
    QualityControl,
    Ingesting,
    Synced,
}

impl ReleaseStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ReleaseStatus::Distributing => "Distributing",
            ReleaseStatus::Live => "Live",
            ReleaseStatus::MetadataCheck => "Metadata Check",
            ReleaseStatus::QualityControl => "Quality Control",
            ReleaseStatus::Ingesting => "Ingesting",
            ReleaseStatus::Synced => "Synced",
        }
    }
}

/// Per-store delivery status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformStatus {
    Pending,
    Processing,
    Live,
    Error,
    QcCheck,
    Ingesting,
    Synced,
}

impl PlatformStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformStatus::Pending => "pending",
            PlatformStatus::Processing => "processing",
            PlatformStatus::Live => "live",
            PlatformStatus::Error => "error",
            PlatformStatus::QcCheck => "qc_check",
            PlatformStatus::Ingesting => "ingesting",
            PlatformStatus::Synced => "synced",
        }
    }

    /// Glyph and Tailwind text color for the status chip.
    pub fn icon(&self) -> (&'static str, &'static str) {
        match self {
            PlatformStatus::Live | PlatformStatus::Synced => ("✓", "text-emerald-500"),
            PlatformStatus::Processing => ("◷", "text-amber-500"),
            PlatformStatus::Ingesting => ("〰", "text-indigo-400"),
            PlatformStatus::QcCheck => ("⌕", "text-purple-400"),
            PlatformStatus::Error => ("!", "text-rose-500"),
            PlatformStatus::Pending => ("◷", "text-slate-500"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformDelivery {
    pub name: &'static str,
    pub status: PlatformStatus,
    pub link: Option<&'static str>,
}

impl PlatformDelivery {
    fn new(name: &'static str, status: PlatformStatus) -> Self {
        Self { name, status, link: None }
    }

    fn linked(name: &'static str, status: PlatformStatus) -> Self {
        Self { name, status, link: Some("#") }
    }
}

/// Delivery progress percentage, always within 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Progress(u8);

impl Progress {
    pub fn new(percent: i32) -> Self {
        Progress(percent.clamp(0, 100) as u8)
    }

    pub fn percent(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    pub id: &'static str,
    pub title: &'static str,
    pub artist: &'static str,
    pub kind: ReleaseType,
    pub source: Source,
    pub status: ReleaseStatus,
    pub progress: Progress,
    pub release_date: &'static str,
    pub platforms: Vec<PlatformDelivery>,
}

impl CatalogItem {
    pub fn cover_url(&self) -> String {
        format!("https://picsum.photos/seed/{}/200/200", self.id)
    }
}

/// Source filter tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogFilter {
    #[default]
    All,
    OrbitX,
    External,
}

impl CatalogFilter {
    pub const ALL: [CatalogFilter; 3] = [CatalogFilter::All, CatalogFilter::OrbitX, CatalogFilter::External];

    pub fn label(&self) -> &'static str {
        match self {
            CatalogFilter::All => "All",
            CatalogFilter::OrbitX => "OrbitX",
            CatalogFilter::External => "External",
        }
    }

    pub fn matches(&self, item: &CatalogItem) -> bool {
        match self {
            CatalogFilter::All => true,
            CatalogFilter::OrbitX => item.source.is_native(),
            CatalogFilter::External => !item.source.is_native(),
        }
    }
}

pub const SEATS_LABEL: &str = "Seats: 1/1";

/// Native sample releases.
pub fn seed_catalog() -> Vec<CatalogItem> {
    use PlatformStatus::*;

    vec![
        CatalogItem {
            id: "1",
            title: "Neon Nights",
            artist: "Artist Name",
            kind: ReleaseType::Video,
            source: Source::OrbitX,
            status: ReleaseStatus::Ingesting,
            progress: Progress::new(72),
            release_date: "2024-05-20",
            platforms: vec![
                PlatformDelivery::new("Vevo API", Ingesting),
                PlatformDelivery::new("Apple Music Video", QcCheck),
                PlatformDelivery::linked("Tidal", Live),
                PlatformDelivery::linked("YouTube OAC", Live),
            ],
        },
        CatalogItem {
            id: "2",
            title: "Electric Dreams",
            artist: "Artist Name",
            kind: ReleaseType::Audio,
            source: Source::OrbitX,
            status: ReleaseStatus::Live,
            progress: Progress::new(100),
            release_date: "2024-04-12",
            platforms: vec![
                PlatformDelivery::linked("Spotify", Live),
                PlatformDelivery::linked("Apple Music", Live),
                PlatformDelivery::linked("Amazon Music", Live),
                PlatformDelivery::linked("Deezer", Live),
            ],
        },
    ]
}

/// Synced release pulled in from a linked provider, if it has one.
fn synced_release(provider: Provider) -> Option<CatalogItem> {
    match provider {
        Provider::Distrokid => Some(CatalogItem {
            id: "dk-1",
            title: "Cyberpunk Soul",
            artist: "Artist Name",
            kind: ReleaseType::Audio,
            source: Source::External(Provider::Distrokid),
            status: ReleaseStatus::Synced,
            progress: Progress::new(100),
            release_date: "2024-03-01",
            platforms: vec![
                PlatformDelivery::new("Spotify", PlatformStatus::Synced),
                PlatformDelivery::new("Apple Music", PlatformStatus::Synced),
                PlatformDelivery::new("Tidal", PlatformStatus::Synced),
            ],
        }),
        Provider::Amuse | Provider::Vevo => None,
    }
}

/// Catalog as shown at mount: native seed then external releases.
pub fn catalog_for(connected: &ConnectedProviders) -> Vec<CatalogItem> {
    let mut items = seed_catalog();
    items.extend(connected.iter().filter_map(synced_release));
    items
}

pub fn filter_items(items: &[CatalogItem], filter: CatalogFilter) -> Vec<CatalogItem> {
    items.iter().filter(|item| filter.matches(item)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn connected(providers: &[Provider]) -> ConnectedProviders {
        ConnectedProviders::from_names(providers.iter().map(Provider::as_str))
    }

    #[test]
    fn test_seed_only_without_providers() {
        let items = catalog_for(&ConnectedProviders::default());
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i.source.is_native()));
    }

    #[test]
    fn test_distrokid_adds_synced_release() {
        let items = catalog_for(&connected(&[Provider::Distrokid]));
        assert_eq!(items.len(), 3);
        let external = &items[2];
        assert_eq!(external.id, "dk-1");
        assert_eq!(external.title, "Cyberpunk Soul");
        assert_eq!(external.source.as_str(), "Distrokid");
        assert!(external.platforms.iter().all(|p| p.status == PlatformStatus::Synced));
    }

    #[test]
    fn test_other_providers_add_nothing() {
        assert_eq!(catalog_for(&connected(&[Provider::Amuse, Provider::Vevo])).len(), 2);
    }

    #[test]
    fn test_filters_partition_catalog() {
        let items = catalog_for(&connected(&[Provider::Distrokid]));
        let native = filter_items(&items, CatalogFilter::OrbitX);
        let external = filter_items(&items, CatalogFilter::External);
        let all = filter_items(&items, CatalogFilter::All);

        assert!(native.iter().all(|i| i.source == Source::OrbitX));
        assert!(external.iter().all(|i| i.source != Source::OrbitX));
        assert_eq!(native.len() + external.len(), all.len());

        let ids: HashSet<&str> = all.iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), all.len());
    }

    #[test]
    fn test_progress_clamps() {
        assert_eq!(Progress::new(140).percent(), 100);
        assert_eq!(Progress::new(-3).percent(), 0);
        assert_eq!(Progress::new(72).percent(), 72);
    }

    #[test]
    fn test_status_strings() {
        assert_eq!(PlatformStatus::QcCheck.as_str(), "qc_check");
        assert_eq!(PlatformStatus::Synced.icon().0, "✓");
        assert_eq!(ReleaseStatus::MetadataCheck.label(), "Metadata Check");
    }
}
