//! Bounded in-memory store for generated content.
//!
//! Streamed articles are registered here under a short random content
//! identifier so that a later request can turn them into a document. The
//! store is bounded by capacity and by age: expired entries are purged on
//! access, and the oldest entries are evicted when the store is full.

mod collector;

pub use collector::{
    content_id_trailer, split_content_id, CollectingStream, StreamCollector, CONTENT_ID_TAG,
};

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::config::Config;

/// Length of generated content identifiers (hex characters).
pub const CONTENT_ID_LEN: usize = 8;

#[derive(Debug, Clone)]
struct Entry {
    text: String,
    created: DateTime<Utc>,
    seq: u64,
}

impl Entry {
    fn is_expired(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        // A negative age (clock moved backwards) counts as fresh.
        now.signed_duration_since(self.created)
            .to_std()
            .map(|age| age >= ttl)
            .unwrap_or(false)
    }
}

#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<String, Entry>,
    next_seq: u64,
}

/// Thread-safe content store with capacity and TTL bounds.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use writedocx::store::ContentStore;
///
/// let store = ContentStore::new(16, Duration::from_secs(600));
/// let id = store.insert("## 标题\n正文");
/// assert_eq!(store.take(&id).as_deref(), Some("## 标题\n正文"));
/// assert!(store.get(&id).is_none());
/// ```
#[derive(Debug)]
pub struct ContentStore {
    inner: Mutex<Inner>,
    capacity: usize,
    ttl: Duration,
}

impl ContentStore {
    /// Create a store holding at most `capacity` entries for `ttl` each.
    ///
    /// A capacity of zero is treated as one.
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
            capacity: capacity.max(1),
            ttl,
        }
    }

    /// Create a store from process configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.store_capacity(), config.store_ttl())
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Lifetime of an entry.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Store `text` under a fresh identifier and return the identifier.
    pub fn insert(&self, text: impl Into<String>) -> String {
        self.insert_at(text.into(), Utc::now())
    }

    /// Get a copy of the content stored under `id`.
    pub fn get(&self, id: &str) -> Option<String> {
        self.get_at(id, Utc::now())
    }

    /// Remove and return the content stored under `id`.
    pub fn take(&self, id: &str) -> Option<String> {
        self.take_at(id, Utc::now())
    }

    /// Check whether live content exists for `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Remove the entry for `id`, returning whether one existed.
    pub fn remove(&self, id: &str) -> bool {
        self.lock().entries.remove(id).is_some()
    }

    /// Number of entries, including ones that expired but were not yet purged.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every expired entry and return how many were dropped.
    pub fn purge_expired(&self) -> usize {
        self.purge_expired_at(Utc::now())
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // The map stays consistent even if a holder panicked.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn insert_at(&self, text: String, now: DateTime<Utc>) -> String {
        let mut inner = self.lock();
        purge(&mut inner, now, self.ttl);

        while inner.entries.len() >= self.capacity {
            let oldest = inner
                .entries
                .iter()
                .min_by_key(|(_, e)| (e.created, e.seq))
                .map(|(id, _)| id.clone());
            match oldest {
                Some(id) => {
                    log::debug!("Content store full, evicting {}", id);
                    inner.entries.remove(&id);
                }
                None => break,
            }
        }

        let id = loop {
            let candidate = new_content_id();
            if !inner.entries.contains_key(&candidate) {
                break candidate;
            }
        };

        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.entries.insert(
            id.clone(),
            Entry {
                text,
                created: now,
                seq,
            },
        );
        id
    }

    fn get_at(&self, id: &str, now: DateTime<Utc>) -> Option<String> {
        let mut inner = self.lock();
        purge(&mut inner, now, self.ttl);
        inner.entries.get(id).map(|e| e.text.clone())
    }

    fn take_at(&self, id: &str, now: DateTime<Utc>) -> Option<String> {
        let mut inner = self.lock();
        purge(&mut inner, now, self.ttl);
        inner.entries.remove(id).map(|e| e.text)
    }

    fn purge_expired_at(&self, now: DateTime<Utc>) -> usize {
        purge(&mut self.lock(), now, self.ttl)
    }
}

fn purge(inner: &mut Inner, now: DateTime<Utc>, ttl: Duration) -> usize {
    let before = inner.entries.len();
    inner.entries.retain(|_, e| !e.is_expired(now, ttl));
    let purged = before - inner.entries.len();
    if purged > 0 {
        log::debug!("Purged {} expired contents", purged);
    }
    purged
}

/// Generate a short random content identifier.
pub fn new_content_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(CONTENT_ID_LEN);
    id
}
