//! Scope-keyed expiring cache for derived listings
//!
//! Providers derive region/datacenter lists from vendor API calls that are
//! slow and rate-limited, so derived lists are cached per scope key (an
//! account id, or an account:region pair) with a fixed TTL. A read after
//! the TTL has elapsed behaves as a miss. Writes replace the whole list
//! for a scope key; concurrent refills on a miss are allowed to race
//! because recomputation is idempotent and the last writer wins.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

struct Entry<T> {
    value: Vec<T>,
    expires_at: Instant,
}

/// Time-expiring cache of lists, partitioned by scope key
pub struct ExpiringCache<T> {
    entries: Mutex<HashMap<String, Entry<T>>>,
}

impl<T: Clone> ExpiringCache<T> {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Return the cached list for `scope_key`, or `None` on a miss
    ///
    /// An entry past its TTL counts as a miss and is dropped.
    pub fn get(&self, scope_key: &str) -> Option<Vec<T>> {
        self.get_at(scope_key, Instant::now())
    }

    /// Cache `value` under `scope_key` for `ttl`, replacing any entry
    pub fn put(&self, scope_key: impl Into<String>, value: Vec<T>, ttl: Duration) {
        self.put_at(scope_key, value, ttl, Instant::now());
    }

    fn get_at(&self, scope_key: &str, now: Instant) -> Option<Vec<T>> {
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        match entries.get(scope_key) {
            Some(entry) if now < entry.expires_at => Some(entry.value.clone()),
            Some(_) => {
                tracing::debug!("Cache entry for {} expired", scope_key);
                entries.remove(scope_key);
                None
            }
            None => None,
        }
    }

    fn put_at(&self, scope_key: impl Into<String>, value: Vec<T>, ttl: Duration, now: Instant) {
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        entries.insert(
            scope_key.into(),
            Entry {
                value,
                expires_at: now + ttl,
            },
        );
    }
}

impl<T: Clone> Default for ExpiringCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(60);

    #[test]
    fn test_miss_on_empty_cache() {
        let cache: ExpiringCache<String> = ExpiringCache::new();
        assert_eq!(cache.get("acct"), None);
    }

    #[test]
    fn test_hit_within_ttl() {
        let cache = ExpiringCache::new();
        cache.put("acct", vec!["a".to_string(), "b".to_string()], TTL);
        assert_eq!(
            cache.get("acct"),
            Some(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_miss_after_ttl_elapses() {
        let cache = ExpiringCache::new();
        let now = Instant::now();
        cache.put_at("acct", vec![1, 2, 3], TTL, now);

        assert_eq!(cache.get_at("acct", now + TTL - Duration::from_secs(1)), Some(vec![1, 2, 3]));
        assert_eq!(cache.get_at("acct", now + TTL), None);
        // the expired entry is gone, not resurrected by a later read
        assert_eq!(cache.get_at("acct", now), None);
    }

    #[test]
    fn test_put_replaces_existing_entry() {
        let cache = ExpiringCache::new();
        cache.put("acct", vec![1], TTL);
        cache.put("acct", vec![2, 3], TTL);
        assert_eq!(cache.get("acct"), Some(vec![2, 3]));
    }

    #[test]
    fn test_scope_keys_are_independent() {
        let cache = ExpiringCache::new();
        cache.put("acct-1", vec![1], TTL);
        cache.put("acct-2", vec![2], TTL);
        assert_eq!(cache.get("acct-1"), Some(vec![1]));
        assert_eq!(cache.get("acct-2"), Some(vec![2]));
        assert_eq!(cache.get("acct-3"), None);
    }

    #[test]
    fn test_zero_ttl_is_immediately_expired() {
        let cache = ExpiringCache::new();
        cache.put("acct", vec![1], Duration::ZERO);
        assert_eq!(cache.get("acct"), None);
    }
}
