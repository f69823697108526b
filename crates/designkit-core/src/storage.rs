//! Persistent key-value preference store with write observers.
//!
//! Values are opaque strings (JSON in practice) under string keys. Every
//! write and remove is followed by a [`StoreEvent`] delivered two ways:
//!
//! - synchronously to callbacks registered with [`PreferenceStore::subscribe`],
//!   on the writer's thread, after the backend accepted the write;
//! - to async listeners through a broadcast channel ([`PreferenceStore::events`]).
//!
//! Readers that care about a key therefore see every change as it lands
//! instead of re-reading on a timer.

use std::path::Path;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::broadcast;

use crate::error::KitResult;

mod memory;
mod redb_backend;

pub use memory::MemoryBackend;
pub use redb_backend::RedbBackend;

/// Capacity of the broadcast channel for async listeners
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Raw storage a [`PreferenceStore`] sits on.
///
/// Writes are whole-value replacements; there are no transactions spanning
/// keys.
pub trait StoreBackend: Send + Sync {
    fn get(&self, key: &str) -> KitResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> KitResult<()>;
    /// Returns whether the key existed.
    fn remove(&self, key: &str) -> KitResult<bool>;
    fn keys(&self) -> KitResult<Vec<String>>;
}

/// What happened to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreChange {
    Set,
    Removed,
}

/// Notification that a key was written or removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreEvent {
    pub key: String,
    pub change: StoreChange,
}

type Callback = Arc<dyn Fn(&StoreEvent) + Send + Sync>;

struct Observer {
    id: u64,
    key: Option<String>,
    callback: Callback,
}

#[derive(Default)]
struct Observers {
    next_id: u64,
    entries: Vec<Observer>,
}

/// Handle for a registered observer. Dropping it unregisters the callback.
#[must_use = "dropping a Subscription unregisters its callback"]
pub struct Subscription {
    id: u64,
    observers: Weak<Mutex<Observers>>,
}

impl Subscription {
    /// Unregister now rather than at drop.
    pub fn cancel(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(observers) = self.observers.upgrade() {
            observers.lock().entries.retain(|o| o.id != self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

/// Shared preference store. Cheap to clone; clones share backend and observers.
#[derive(Clone)]
pub struct PreferenceStore {
    backend: Arc<dyn StoreBackend>,
    observers: Arc<Mutex<Observers>>,
    events: broadcast::Sender<StoreEvent>,
}

impl std::fmt::Debug for PreferenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceStore")
            .field("observers", &self.observers.lock().entries.len())
            .finish()
    }
}

impl PreferenceStore {
    pub fn new(backend: impl StoreBackend + 'static) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            backend: Arc::new(backend),
            observers: Arc::new(Mutex::new(Observers::default())),
            events,
        }
    }

    /// Store backed by memory only; contents vanish with the last clone.
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }

    /// Open (or create) a redb-backed store at `path`.
    pub fn open(path: impl AsRef<Path>) -> KitResult<Self> {
        Ok(Self::new(RedbBackend::open(path)?))
    }

    pub fn get(&self, key: &str) -> KitResult<Option<String>> {
        self.backend.get(key)
    }

    pub fn set(&self, key: &str, value: &str) -> KitResult<()> {
        self.backend.set(key, value)?;
        self.notify(StoreEvent {
            key: key.to_string(),
            change: StoreChange::Set,
        });
        Ok(())
    }

    /// Delete a key. Observers are notified only if it existed.
    pub fn remove(&self, key: &str) -> KitResult<bool> {
        let existed = self.backend.remove(key)?;
        if existed {
            self.notify(StoreEvent {
                key: key.to_string(),
                change: StoreChange::Removed,
            });
        }
        Ok(existed)
    }

    pub fn keys(&self) -> KitResult<Vec<String>> {
        self.backend.keys()
    }

    /// Read and decode a JSON value. `Ok(None)` if the key is absent.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> KitResult<Option<T>> {
        match self.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    pub fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> KitResult<()> {
        let raw = serde_json::to_string(value)?;
        self.set(key, &raw)
    }

    /// Hydrate a value, falling back to `seed` when the key is missing or
    /// does not decode. The fallback is written back so later reads agree.
    ///
    /// Never fails: read and write errors are logged and the seed is returned.
    pub fn load_or_seed<T, F>(&self, key: &str, seed: F) -> T
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> T,
    {
        match self.get_json::<T>(key) {
            Ok(Some(value)) => return value,
            Ok(None) => tracing::debug!(key, "no stored value, seeding default"),
            Err(e) => tracing::warn!(key, error = %e, "stored value unreadable, reseeding default"),
        }

        let value = seed();
        if let Err(e) = self.set_json(key, &value) {
            tracing::error!(key, error = %e, "failed to persist seeded default");
        }
        value
    }

    /// Register a callback for every write and remove.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&StoreEvent) + Send + Sync + 'static,
    {
        self.register(None, Arc::new(callback))
    }

    /// Register a callback for changes to a single key.
    pub fn subscribe_key<F>(&self, key: impl Into<String>, callback: F) -> Subscription
    where
        F: Fn(&StoreEvent) + Send + Sync + 'static,
    {
        self.register(Some(key.into()), Arc::new(callback))
    }

    /// Async stream of every change. Lagging receivers skip ahead.
    pub fn events(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.lock().entries.len()
    }

    fn register(&self, key: Option<String>, callback: Callback) -> Subscription {
        let mut observers = self.observers.lock();
        let id = observers.next_id;
        observers.next_id += 1;
        observers.entries.push(Observer { id, key, callback });
        Subscription {
            id,
            observers: Arc::downgrade(&self.observers),
        }
    }

    fn notify(&self, event: StoreEvent) {
        // Callbacks may write to the store, so none run under the lock.
        let callbacks: Vec<Callback> = self
            .observers
            .lock()
            .entries
            .iter()
            .filter(|o| o.key.as_deref().map_or(true, |k| k == event.key))
            .map(|o| o.callback.clone())
            .collect();

        tracing::trace!(key = %event.key, change = ?event.change, observers = callbacks.len(), "store change");

        for callback in callbacks {
            callback(&event);
        }
        // No receivers is fine.
        let _ = self.events.send(event);
    }
}
