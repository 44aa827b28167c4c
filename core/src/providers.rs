//! Connected provider store.
//!
//! Remembers which external distributors the artist has linked and persists
//! the list as a JSON string array in a key-value store. Wallet, catalog and
//! integrations views share one [`ProviderStore`] and can [`subscribe`] to
//! changes instead of re-reading the browser store themselves.
//!
//! [`subscribe`]: ProviderStore::subscribe

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::config::PROVIDERS_STORAGE_KEY;
use crate::error::{StorageError, StorageResult};

// =============================================================================
// Provider
// =============================================================================

/// External distributor that can be linked to the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provider {
    Distrokid,
    Amuse,
    Vevo,
}

impl Provider {
    pub const ALL: [Provider; 3] = [Provider::Distrokid, Provider::Amuse, Provider::Vevo];

    /// Name as persisted and shown in prompts.
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Distrokid => "Distrokid",
            Provider::Amuse => "Amuse",
            Provider::Vevo => "Vevo",
        }
    }

    /// Parse a persisted name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == name)
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Connected set
// =============================================================================

/// Ordered, duplicate-free list of linked providers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectedProviders(Vec<Provider>);

impl ConnectedProviders {
    /// Build from persisted names, dropping unknown names and duplicates.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut connected = Self::default();
        for name in names {
            match Provider::from_name(name.as_ref()) {
                Some(provider) => {
                    connected.connect(provider);
                }
                None => log::warn!("⚠️  Ignoring unknown provider '{}'", name.as_ref()),
            }
        }
        connected
    }

    /// Append `provider` unless already present. Returns whether it changed.
    pub fn connect(&mut self, provider: Provider) -> bool {
        if self.contains(provider) {
            return false;
        }
        self.0.push(provider);
        true
    }

    /// Remove `provider` if present. Returns whether it changed.
    pub fn disconnect(&mut self, provider: Provider) -> bool {
        let before = self.0.len();
        self.0.retain(|p| *p != provider);
        self.0.len() != before
    }

    pub fn contains(&self, provider: Provider) -> bool {
        self.0.contains(&provider)
    }

    pub fn iter(&self) -> impl Iterator<Item = Provider> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn names(&self) -> Vec<&'static str> {
        self.0.iter().map(Provider::as_str).collect()
    }
}

// =============================================================================
// Key-value storage seam
// =============================================================================

/// String key-value store (browser `localStorage` or in-memory).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// In-memory store for tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// =============================================================================
// Store
// =============================================================================

type Listener = Rc<dyn Fn(&ConnectedProviders)>;

/// Handle returned by [`ProviderStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(usize);

/// Shared connected-provider state backed by a [`KeyValueStore`].
pub struct ProviderStore<S: KeyValueStore> {
    storage: S,
    connected: RefCell<ConnectedProviders>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_id: Cell<usize>,
}

impl<S: KeyValueStore> ProviderStore<S> {
    /// Open the store, reading whatever list was persisted.
    ///
    /// A missing, unreadable or corrupt entry yields an empty list.
    pub fn load(storage: S) -> Self {
        let connected = match read_connected(&storage) {
            Ok(connected) => connected,
            Err(e) => {
                log::warn!("⚠️  Could not read connected providers: {}", e);
                ConnectedProviders::default()
            }
        };

        log::debug!("🔗 Connected providers: {:?}", connected.names());

        Self {
            storage,
            connected: RefCell::new(connected),
            listeners: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    /// Snapshot of the current list.
    pub fn connected(&self) -> ConnectedProviders {
        self.connected.borrow().clone()
    }

    pub fn is_connected(&self, provider: Provider) -> bool {
        self.connected.borrow().contains(provider)
    }

    /// Link `provider`. No-op when already linked.
    pub fn connect(&self, provider: Provider) -> bool {
        let changed = self.connected.borrow_mut().connect(provider);
        if changed {
            log::info!("🔗 Connected {}", provider);
            self.persist_and_notify();
        }
        changed
    }

    /// Unlink `provider`. No-op when not linked.
    pub fn disconnect(&self, provider: Provider) -> bool {
        let changed = self.connected.borrow_mut().disconnect(provider);
        if changed {
            log::info!("⛓️‍💥 Disconnected {}", provider);
            self.persist_and_notify();
        }
        changed
    }

    /// Call `listener` with the new list after every change.
    pub fn subscribe(&self, listener: impl Fn(&ConnectedProviders) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.listeners.borrow_mut().retain(|(sub, _)| *sub != id);
    }

    fn persist_and_notify(&self) {
        let snapshot = self.connected();

        if let Err(e) = write_connected(&self.storage, &snapshot) {
            log::error!("❌ Failed to persist connected providers: {}", e);
        }

        // Listeners may subscribe or unsubscribe while being notified
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(&snapshot);
        }
    }
}

fn read_connected(storage: &impl KeyValueStore) -> StorageResult<ConnectedProviders> {
    let Some(raw) = storage.get(PROVIDERS_STORAGE_KEY)? else {
        return Ok(ConnectedProviders::default());
    };
    let names: Vec<String> = serde_json::from_str(&raw)?;
    Ok(ConnectedProviders::from_names(names))
}

fn write_connected(storage: &impl KeyValueStore, connected: &ConnectedProviders) -> StorageResult<()> {
    let raw = serde_json::to_string(&connected.names()).map_err(StorageError::from)?;
    storage.set(PROVIDERS_STORAGE_KEY, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(store: &ProviderStore<MemoryStore>) -> Option<String> {
        store.storage.get(PROVIDERS_STORAGE_KEY).unwrap()
    }

    #[test]
    fn test_connect_is_idempotent() {
        let store = ProviderStore::load(MemoryStore::new());
        assert!(store.connect(Provider::Distrokid));
        assert!(!store.connect(Provider::Distrokid));
        assert_eq!(store.connected().len(), 1);
        assert_eq!(stored(&store).as_deref(), Some(r#"["Distrokid"]"#));
    }

    #[test]
    fn test_disconnect_absent_is_noop() {
        let store = ProviderStore::load(MemoryStore::new());
        assert!(!store.disconnect(Provider::Vevo));
        assert_eq!(stored(&store), None);

        store.connect(Provider::Amuse);
        store.connect(Provider::Vevo);
        assert!(store.disconnect(Provider::Amuse));
        assert_eq!(stored(&store).as_deref(), Some(r#"["Vevo"]"#));
    }

    #[test]
    fn test_load_persisted_list() {
        let memory = MemoryStore::with_entry(PROVIDERS_STORAGE_KEY, r#"["Amuse","Distrokid"]"#);
        let store = ProviderStore::load(memory);
        let order: Vec<Provider> = store.connected().iter().collect();
        assert_eq!(order, vec![Provider::Amuse, Provider::Distrokid]);
    }

    #[test]
    fn test_load_drops_unknown_and_duplicates() {
        let memory = MemoryStore::with_entry(
            PROVIDERS_STORAGE_KEY,
            r#"["Vevo","Spotify","Vevo","Distrokid"]"#,
        );
        let store = ProviderStore::load(memory);
        let order: Vec<Provider> = store.connected().iter().collect();
        assert_eq!(order, vec![Provider::Vevo, Provider::Distrokid]);
    }

    #[test]
    fn test_load_corrupt_entry_is_empty() {
        let memory = MemoryStore::with_entry(PROVIDERS_STORAGE_KEY, "{broken");
        assert!(ProviderStore::load(memory).connected().is_empty());
    }

    #[test]
    fn test_reload_round_trip() {
        let store = ProviderStore::load(MemoryStore::new());
        store.connect(Provider::Vevo);
        store.connect(Provider::Distrokid);

        let raw = stored(&store).unwrap();
        let reloaded = ProviderStore::load(MemoryStore::with_entry(PROVIDERS_STORAGE_KEY, &raw));
        assert_eq!(reloaded.connected(), store.connected());
    }

    #[test]
    fn test_subscribers_see_changes() {
        let store = ProviderStore::load(MemoryStore::new());
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = seen.clone();
        let id = store.subscribe(move |c| sink.borrow_mut().push(c.len()));

        store.connect(Provider::Amuse);
        store.connect(Provider::Amuse);
        store.connect(Provider::Vevo);
        store.unsubscribe(id);
        store.disconnect(Provider::Vevo);

        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_listener_can_read_store() {
        let store = Rc::new(ProviderStore::load(MemoryStore::new()));
        let observed = Rc::new(RefCell::new(false));

        let weak = Rc::downgrade(&store);
        let flag = observed.clone();
        store.subscribe(move |_| {
            if let Some(store) = weak.upgrade() {
                *flag.borrow_mut() = store.is_connected(Provider::Distrokid);
            }
        });

        store.connect(Provider::Distrokid);
        assert!(*observed.borrow());
    }

    #[test]
    fn test_listener_can_subscribe_and_unsubscribe() {
        let store = Rc::new(ProviderStore::load(MemoryStore::new()));
        let late_calls = Rc::new(Cell::new(0));

        let weak = Rc::downgrade(&store);
        let counter = late_calls.clone();
        let registered = Rc::new(Cell::new(None));
        let slot = registered.clone();
        let first = store.subscribe(move |_| {
            let Some(store) = weak.upgrade() else { return };
            if slot.get().is_none() {
                let counter = counter.clone();
                slot.set(Some(store.subscribe(move |_| counter.set(counter.get() + 1))));
            }
        });

        store.connect(Provider::Vevo);
        assert_eq!(late_calls.get(), 0);

        store.connect(Provider::Amuse);
        assert_eq!(late_calls.get(), 1);

        let weak = Rc::downgrade(&store);
        store.subscribe(move |_| {
            if let Some(store) = weak.upgrade() {
                store.unsubscribe(first);
            }
        });
        store.disconnect(Provider::Vevo);
        store.disconnect(Provider::Amuse);
        assert_eq!(late_calls.get(), 3);
        assert!(registered.get().is_some());
    }
}
