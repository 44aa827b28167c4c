//! Third-party integration cards and the catalog sync handshake.

use crate::ai::{self, prompt, GatewayReply, GenerateRequest, TextGenerator};
use crate::providers::{KeyValueStore, Provider, ProviderStore};

/// Status text shown when the handshake fails.
pub const SYNC_FAILURE: &str = "Failed to establish API handshake. Please check your credentials.";

/// Static presentation of one provider card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderCard {
    pub provider: Provider,
    pub brand: &'static str,
    pub blurb: &'static str,
    pub credential_label: &'static str,
    pub placeholder: &'static str,
    pub badge: &'static str,
    pub connect_label: &'static str,
    pub resync_label: &'static str,
    pub disconnect_label: &'static str,
    /// Tailwind color family used for borders and buttons.
    pub accent: &'static str,
}

impl ProviderCard {
    pub fn for_provider(provider: Provider) -> Self {
        match provider {
            Provider::Distrokid => ProviderCard {
                provider,
                brand: "DistroSync™",
                blurb: "Pull your Distrokid track history and earnings directly into OrbitX.",
                credential_label: "API Key",
                placeholder: "dk_live_xxxxxxxx",
                badge: "PARTNER API",
                connect_label: "Connect Catalog",
                resync_label: "Re-sync Catalog",
                disconnect_label: "Disconnect Account",
                accent: "indigo",
            },
            Provider::Amuse => ProviderCard {
                provider,
                brand: "AmuseLink™",
                blurb: "Consolidate Amuse royalties into your OrbitX wallet automatically.",
                credential_label: "Auth Token",
                placeholder: "am_auth_xxxxxxxx",
                badge: "PARTNER API",
                connect_label: "Connect Catalog",
                resync_label: "Re-sync Catalog",
                disconnect_label: "Disconnect Account",
                accent: "yellow",
            },
            Provider::Vevo => ProviderCard {
                provider,
                brand: "Vevo Connect",
                blurb: "Enable direct video distribution through the Vevo Partner Portal.",
                credential_label: "Partner Key",
                placeholder: "vv_part_xxxxxxxx",
                badge: "DIRECT API",
                connect_label: "Authorize Direct",
                resync_label: "Re-sync API",
                disconnect_label: "Disconnect API",
                accent: "rose",
            },
        }
    }

    pub fn all() -> [ProviderCard; 3] {
        Provider::ALL.map(Self::for_provider)
    }
}

/// Whether a card's connect button is live.
///
/// Needs a non-blank credential and no sync in flight on any card.
pub fn can_connect(credential: &str, syncing: Option<Provider>) -> bool {
    syncing.is_none() && !credential.trim().is_empty()
}

/// Run the simulated catalog handshake for `provider`.
///
/// On success the provider is linked (idempotently) and persisted. On
/// failure nothing is linked and the reply carries [`SYNC_FAILURE`]. An empty
/// completion still links, with a blank status.
pub async fn sync_provider<G, S>(gateway: &G, store: &ProviderStore<S>, provider: Provider) -> GatewayReply
where
    G: TextGenerator,
    S: KeyValueStore,
{
    log::info!("🔄 Syncing catalog from {}...", provider);

    let request = GenerateRequest::new(prompt::provider_sync(provider));
    let reply = GatewayReply::resolve(ai::allow_empty(gateway.generate(&request).await), SYNC_FAILURE);

    if reply.is_generated() {
        store.connect(provider);
        log::info!("✅ {} catalog synced", provider);
    }

    reply
}

/// Unlink `provider`; the caller clears its status text.
pub fn disconnect_provider<S: KeyValueStore>(store: &ProviderStore<S>, provider: Provider) {
    store.disconnect(provider);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AiError;
    use crate::providers::MemoryStore;
    use crate::test_support::ScriptedGateway;

    #[tokio::test]
    async fn test_sync_success_connects() {
        let store = ProviderStore::load(MemoryStore::new());
        let gateway = ScriptedGateway::replying(["- 12 releases\n- $4,210 lifetime\n- Synced!"]);

        let reply = sync_provider(&gateway, &store, Provider::Distrokid).await;

        assert!(reply.is_generated());
        assert!(reply.text().contains("12 releases"));
        assert!(store.is_connected(Provider::Distrokid));
        assert!(gateway.prompts()[0].contains("connecting to Distrokid"));
    }

    #[tokio::test]
    async fn test_resync_keeps_single_entry() {
        let store = ProviderStore::load(MemoryStore::new());
        let gateway = ScriptedGateway::replying(["first", "second"]);

        sync_provider(&gateway, &store, Provider::Vevo).await;
        sync_provider(&gateway, &store, Provider::Vevo).await;

        assert_eq!(store.connected().len(), 1);
    }

    #[tokio::test]
    async fn test_sync_failure_does_not_connect() {
        let store = ProviderStore::load(MemoryStore::new());
        let gateway = ScriptedGateway::failing(AiError::Unauthorized("bad key".into()));

        let reply = sync_provider(&gateway, &store, Provider::Amuse).await;

        assert_eq!(reply.text(), SYNC_FAILURE);
        assert!(store.connected().is_empty());
    }

    #[tokio::test]
    async fn test_sync_empty_completion_still_connects() {
        let store = ProviderStore::load(MemoryStore::new());
        let gateway = ScriptedGateway::failing(AiError::EmptyResponse);

        let reply = sync_provider(&gateway, &store, Provider::Distrokid).await;

        assert!(reply.is_generated());
        assert_eq!(reply.text(), "");
        assert!(store.is_connected(Provider::Distrokid));
        assert_eq!(store.connected().len(), 1);
    }

    #[test]
    fn test_can_connect_rules() {
        assert!(can_connect("dk_live_123", None));
        assert!(!can_connect("", None));
        assert!(!can_connect("   ", None));
        assert!(!can_connect("dk_live_123", Some(Provider::Vevo)));
    }

    #[test]
    fn test_cards_cover_every_provider() {
        let cards = ProviderCard::all();
        assert_eq!(cards[0].brand, "DistroSync™");
        assert_eq!(cards[1].placeholder, "am_auth_xxxxxxxx");
        assert_eq!(cards[2].connect_label, "Authorize Direct");
    }

    #[test]
    fn test_disconnect_provider() {
        let store = ProviderStore::load(MemoryStore::new());
        store.connect(Provider::Amuse);
        disconnect_provider(&store, Provider::Amuse);
        disconnect_provider(&store, Provider::Amuse);
        assert!(store.connected().is_empty());
    }
}
