//! Compute-once-per-key cache for fetched ticker payloads.
//!
//! Replaces the implicit memoization of the original dashboard with an
//! explicit key -> value cache with a TTL. Owned by the collaborator
//! layer; the signal core never touches it.

use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

struct Entry<T> {
    inserted: Instant,
    value: T,
}

pub struct TtlCache<T: Clone> {
    ttl: Duration,
    entries: RwLock<HashMap<String, Entry<T>>>,
}

impl<T: Clone> TtlCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Get a live entry; an expired one is evicted and reads as a miss.
    pub async fn get(&self, key: &str) -> Option<T> {
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some(entry) if entry.inserted.elapsed() < self.ttl => {
                    return Some(entry.value.clone());
                }
                Some(_) => {}
                None => return None,
            }
        }
        self.entries.write().await.remove(key);
        None
    }

    pub async fn put(&self, key: &str, value: T) {
        self.entries.write().await.insert(
            key.to_string(),
            Entry {
                inserted: Instant::now(),
                value,
            },
        );
    }

    pub async fn invalidate(&self, key: &str) {
        self.entries.write().await.remove(key);
    }

    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }
}
