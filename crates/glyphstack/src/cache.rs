//! Synthesized document cache.
//!
//! Documents are keyed by variant, lower-cased icon name and the full style
//! string. The domain is small and finite, so the cache never evicts.
//!
//! ```
//! use std::sync::Arc;
//! use glyphstack::{DocumentCache, IconKey, IconVariant};
//!
//! let cache = DocumentCache::new();
//! let key = IconKey::new(IconVariant::Solid, "House", "fill:#000000");
//! assert_eq!(key.name(), "house");
//!
//! cache.insert(key.clone(), Arc::from("<svg/>"));
//! assert_eq!(cache.get(&key).as_deref(), Some("<svg/>"));
//! ```

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::variant::IconVariant;

/// Cache key for synthesized documents.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IconKey {
    variant: IconVariant,
    name: String,
    style: String,
}

impl IconKey {
    /// Create a key. The name is lower-cased.
    pub fn new(variant: IconVariant, name: &str, style: impl Into<String>) -> Self {
        Self {
            variant,
            name: name.to_lowercase(),
            style: style.into(),
        }
    }

    /// The icon variant.
    pub fn variant(&self) -> IconVariant {
        self.variant
    }

    /// The lower-cased icon name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The inline style string.
    pub fn style(&self) -> &str {
        &self.style
    }
}

/// Process-lifetime store of synthesized documents.
///
/// Readers and writers may race on the same key. Every writer for a key
/// produces the same document, so a racing insert simply replaces the entry
/// under the write lock.
#[derive(Default)]
pub struct DocumentCache {
    entries: RwLock<HashMap<IconKey, Arc<str>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl DocumentCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a document, counting the hit or miss.
    pub fn get(&self, key: &IconKey) -> Option<Arc<str>> {
        let found = self.entries.read().get(key).cloned();
        let counter = if found.is_some() {
            &self.hits
        } else {
            &self.misses
        };
        counter.fetch_add(1, Ordering::Relaxed);
        found
    }

    /// Insert a document, overwriting any existing entry for the key.
    pub fn insert(&self, key: IconKey, document: Arc<str>) {
        self.entries.write().insert(key, document);
    }

    /// Membership test that leaves the counters alone.
    pub fn contains(&self, key: &IconKey) -> bool {
        self.entries.read().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Lookups that found a document.
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Lookups that found nothing.
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Fraction of lookups that hit, or 0 before the first lookup.
    pub fn hit_rate(&self) -> f64 {
        let hits = self.hits();
        let total = hits + self.misses();
        if total == 0 {
            0.0
        } else {
            hits as f64 / total as f64
        }
    }

    /// Drop every document. Counters are kept.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Zero the hit and miss counters.
    pub fn reset_stats(&self) {
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    /// Snapshot of the counters and stored volume.
    pub fn stats(&self) -> DocumentCacheStats {
        let entries = self.entries.read();
        DocumentCacheStats {
            entries: entries.len(),
            size_bytes: entries.values().map(|doc| doc.len()).sum(),
            hits: self.hits(),
            misses: self.misses(),
            hit_rate: self.hit_rate(),
        }
    }
}

impl std::fmt::Debug for DocumentCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentCache")
            .field("entries", &self.len())
            .field("hit_rate", &format!("{:.1}%", self.hit_rate() * 100.0))
            .finish()
    }
}

/// Point-in-time view of a [`DocumentCache`].
#[derive(Debug, Clone)]
pub struct DocumentCacheStats {
    pub entries: usize,
    /// Summed UTF-8 length of the stored documents.
    pub size_bytes: usize,
    pub hits: u64,
    pub misses: u64,
    pub hit_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_equality() {
        let key1 = IconKey::new(IconVariant::Solid, "House", "s1");
        let key2 = IconKey::new(IconVariant::Solid, "house", "s1");
        let key3 = IconKey::new(IconVariant::Solid, "house", "s2");
        let key4 = IconKey::new(IconVariant::Regular, "house", "s1");

        assert_eq!(key1, key2);
        assert_ne!(key1, key3);
        assert_ne!(key1, key4);
    }

    #[test]
    fn test_insert_and_get_shares_document() {
        let cache = DocumentCache::new();
        let key = IconKey::new(IconVariant::Solid, "house", "s1");
        let doc: Arc<str> = Arc::from("<svg/>");

        cache.insert(key.clone(), doc.clone());

        let first = cache.get(&key).unwrap();
        let second = cache.get(&key).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(Arc::ptr_eq(&first, &doc));
    }

    #[test]
    fn test_hit_rate() {
        let cache = DocumentCache::new();
        let key = IconKey::new(IconVariant::Solid, "house", "s1");
        cache.insert(key.clone(), Arc::from("<svg/>"));

        let _ = cache.get(&key);
        let _ = cache.get(&IconKey::new(IconVariant::Solid, "other", "s1"));
        let _ = cache.get(&key);

        assert_eq!(cache.hits(), 2);
        assert_eq!(cache.misses(), 1);
        assert!((cache.hit_rate() - 0.666).abs() < 0.01);

        cache.reset_stats();
        assert_eq!(cache.hit_rate(), 0.0);
    }

    #[test]
    fn test_overwrite_keeps_single_entry() {
        let cache = DocumentCache::new();
        let key = IconKey::new(IconVariant::Duotone, "bell", "s1");
        cache.insert(key.clone(), Arc::from("<svg/>"));
        cache.insert(key.clone(), Arc::from("<svg/>"));
        assert_eq!(cache.len(), 1);

        let stats = cache.stats();
        assert_eq!(stats.entries, 1);
        assert_eq!(stats.size_bytes, 6);

        cache.clear();
        assert!(cache.is_empty());
    }
}
