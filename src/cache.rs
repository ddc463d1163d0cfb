//! Recency cache and parse memoization
//!
//! `RecencyCache` is a bounded key/value store that evicts the least recently
//! used key. Every `has`, `get` and `set` counts as a use of its key.
//! `ParseCache` memoizes parse results keyed by raw input text.

use crate::config::ParserConfig;
use crate::core::parser::parse_with;
use crate::dom::Node;
use crate::error::{CacheError, ParseError};
use log::debug;
use lru::LruCache;
use std::borrow::Borrow;
use std::hash::Hash;
use std::num::NonZeroUsize;

/// Bounded LRU key/value cache
pub struct RecencyCache<K: Hash + Eq, V> {
    inner: LruCache<K, V>,
}

impl<K: Hash + Eq, V> RecencyCache<K, V> {
    /// Create a cache holding at most `item_limit` entries
    ///
    /// # Errors
    ///
    /// Returns `CacheError::ZeroCapacity` when `item_limit` is 0.
    pub fn new(item_limit: usize) -> Result<Self, CacheError> {
        let limit = NonZeroUsize::new(item_limit).ok_or(CacheError::ZeroCapacity)?;
        Ok(RecencyCache {
            inner: LruCache::new(limit),
        })
    }

    /// Check for `key`, marking it most recently used if present
    pub fn has<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get(key).is_some()
    }

    /// Look up `key`, marking it most recently used if present
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get(key)
    }

    /// Insert `key`, evicting the least recently used entry when full
    ///
    /// A key that is already present is only marked as used; its stored value
    /// is kept.
    pub fn set(&mut self, key: K, value: V) {
        if self.inner.get(&key).is_some() {
            return;
        }
        if self.inner.push(key, value).is_some() {
            debug!(
                "recency cache full ({} items), evicted least recently used entry",
                self.inner.cap()
            );
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn item_limit(&self) -> usize {
        self.inner.cap().get()
    }
}

/// Memoizes successful parses keyed by the raw input text
pub struct ParseCache {
    entries: RecencyCache<String, Node>,
    config: ParserConfig,
}

impl ParseCache {
    pub fn new(item_limit: usize) -> Result<Self, CacheError> {
        Self::with_config(item_limit, ParserConfig::default())
    }

    pub fn with_config(item_limit: usize, config: ParserConfig) -> Result<Self, CacheError> {
        Ok(ParseCache {
            entries: RecencyCache::new(item_limit)?,
            config,
        })
    }

    /// Parse `input`, reusing a cached tree when the same text was seen before
    ///
    /// Failed parses are not cached.
    pub fn parse(&mut self, input: &str) -> Result<Node, ParseError> {
        if let Some(node) = self.entries.get(input) {
            return Ok(node.clone());
        }
        let node = parse_with(input, &self.config)?;
        self.entries.set(input.to_string(), node.clone());
        Ok(node)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evicts_least_recently_set() {
        let mut cache = RecencyCache::new(2).unwrap();
        cache.set("a", 1);
        cache.set("b", 2);
        cache.set("c", 3);
        assert!(!cache.has(&"a"));
        assert!(cache.has(&"b"));
        assert!(cache.has(&"c"));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_has_counts_as_access() {
        let mut cache = RecencyCache::new(2).unwrap();
        cache.set("a", 1);
        cache.set("b", 2);
        assert!(cache.has(&"a"));
        cache.set("c", 3);
        assert!(cache.has(&"a"));
        assert!(!cache.has(&"b"));
    }

    #[test]
    fn test_get_counts_as_access() {
        let mut cache = RecencyCache::new(2).unwrap();
        cache.set("a", 1);
        cache.set("b", 2);
        assert_eq!(cache.get(&"a"), Some(&1));
        cache.set("c", 3);
        assert_eq!(cache.get(&"b"), None);
        assert_eq!(cache.get(&"a"), Some(&1));
        assert_eq!(cache.get(&"c"), Some(&3));
    }

    #[test]
    fn test_set_existing_key_refreshes_without_replacing() {
        let mut cache = RecencyCache::new(2).unwrap();
        cache.set("a", 1);
        cache.set("b", 2);
        cache.set("a", 10);
        cache.set("c", 3);
        assert_eq!(cache.get(&"a"), Some(&1));
        assert!(!cache.has(&"b"));
    }

    #[test]
    fn test_missing_key() {
        let mut cache: RecencyCache<String, i32> = RecencyCache::new(1).unwrap();
        assert!(!cache.has("nope"));
        assert_eq!(cache.get("nope"), None);
        assert!(cache.is_empty());
        assert_eq!(cache.item_limit(), 1);
    }

    #[test]
    fn test_zero_limit_rejected() {
        assert_eq!(
            RecencyCache::<String, i32>::new(0).err(),
            Some(CacheError::ZeroCapacity)
        );
    }

    #[test]
    fn test_parse_cache_memoizes_success_only() {
        let mut cache = ParseCache::new(4).unwrap();
        let first = cache.parse("<speak>hi</speak>").unwrap();
        let second = cache.parse("<speak>hi</speak>").unwrap();
        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);

        assert!(cache.parse("<speak>").is_err());
        assert_eq!(cache.len(), 1);
    }
}
