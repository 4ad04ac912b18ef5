//! Module cache.
//!
//! The content manager keeps parsed modules keyed by id. The cache sits
//! behind [`ModuleCache`] so callers can swap the policy (no expiry, TTL,
//! or none at all) without touching the manager.
//!
//! ```rust
//! use std::time::Duration;
//! use createx_content::cache::{MemoryCache, ModuleCache};
//!
//! let cache = MemoryCache::with_ttl(Duration::from_secs(300));
//! assert!(cache.is_empty());
//! ```

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

use crate::model::ModuleContent;

/// Storage for parsed modules keyed by module id.
///
/// Implementations use interior mutability; the manager shares one cache
/// across concurrent API requests.
pub trait ModuleCache: Send + Sync {
    /// Look up a module.
    fn get(&self, id: &str) -> Option<ModuleContent>;

    /// Insert or replace a module. Returns the module it replaced, if any.
    fn put(&self, module: ModuleContent) -> Option<ModuleContent>;

    /// Drop one entry.
    fn invalidate(&self, id: &str);

    /// Drop every entry.
    fn clear(&self);

    /// Number of live entries.
    fn len(&self) -> usize;

    /// Whether the cache has no live entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

struct Entry {
    module: ModuleContent,
    inserted_at: Instant,
}

/// In-process cache with optional time-to-live.
#[derive(Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, Entry>>,
    ttl: Option<Duration>,
}

impl MemoryCache {
    /// A cache whose entries never expire.
    pub fn new() -> Self {
        Self::default()
    }

    /// A cache whose entries expire `ttl` after insertion.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: RwLock::default(),
            ttl: Some(ttl),
        }
    }

    fn is_live(&self, entry: &Entry) -> bool {
        self.ttl
            .is_none_or(|ttl| entry.inserted_at.elapsed() < ttl)
    }

    /// Entries held in memory, expired ones included.
    #[cfg(test)]
    fn stored(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }
}

impl ModuleCache for MemoryCache {
    fn get(&self, id: &str) -> Option<ModuleContent> {
        {
            let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
            match entries.get(id) {
                Some(entry) if self.is_live(entry) => return Some(entry.module.clone()),
                Some(_) => {}
                None => return None,
            }
        }

        // Expired: drop it unless another writer refreshed it meanwhile.
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        if entries.get(id).is_some_and(|entry| !self.is_live(entry)) {
            entries.remove(id);
        }
        entries
            .get(id)
            .map(|entry| entry.module.clone())
    }

    fn put(&self, module: ModuleContent) -> Option<ModuleContent> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        if self.ttl.is_some() {
            entries.retain(|_, entry| self.is_live(entry));
        }
        let id = module.id.clone();
        entries
            .insert(
                id,
                Entry {
                    module,
                    inserted_at: Instant::now(),
                },
            )
            .map(|old| old.module)
    }

    fn invalidate(&self, id: &str) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.remove(id);
    }

    fn clear(&self) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.clear();
    }

    fn len(&self) -> usize {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.values().filter(|entry| self.is_live(entry)).count()
    }
}

/// A cache that stores nothing; every lookup misses.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCache;

impl ModuleCache for NoCache {
    fn get(&self, _id: &str) -> Option<ModuleContent> {
        None
    }

    fn put(&self, _module: ModuleContent) -> Option<ModuleContent> {
        None
    }

    fn invalidate(&self, _id: &str) {}

    fn clear(&self) {}

    fn len(&self) -> usize {
        0
    }
}
