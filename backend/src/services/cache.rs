//! TTL cache for expensive aggregate results.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::RwLock;

use crate::api::{SubjectStatistics, TopEntry};
use crate::models::Subject;

/// Default entry lifetime: one hour. The dataset never changes after load,
/// so staleness within the window is acceptable.
pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);

struct Entry<T> {
    value: T,
    expires_at: Instant,
}

impl<T: Clone> Entry<T> {
    fn new(value: T, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: Instant::now() + ttl,
        }
    }

    fn get(&self) -> Option<T> {
        (Instant::now() < self.expires_at).then(|| self.value.clone())
    }
}

/// Memoizes per-subject statistics and the Group A top-10 ranking.
///
/// The key space is bounded (nine subject keys plus one ranking key), so
/// there is no eviction beyond TTL expiry. Statistics for subjects with no
/// data (`None`) are cached like any other value, keeping "no data" cheap
/// to answer. Concurrent misses for the same key may recompute in
/// parallel; the last write wins and subsequent reads serve from the
/// cache, which is all the consistency the read-only dataset needs.
pub struct ResultCache {
    ttl: Duration,
    statistics: RwLock<HashMap<Subject, Entry<Option<SubjectStatistics>>>>,
    top_group_a: RwLock<Option<Entry<Vec<TopEntry>>>>,
}

impl ResultCache {
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }

    /// Cache with a custom entry lifetime; tests use short TTLs.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            statistics: RwLock::new(HashMap::new()),
            top_group_a: RwLock::new(None),
        }
    }

    /// Cached statistics for `subject`. The outer `Option` is the cache
    /// hit/miss; the inner one distinguishes "no data for this subject".
    pub fn get_statistics(&self, subject: Subject) -> Option<Option<SubjectStatistics>> {
        self.statistics.read().get(&subject).and_then(Entry::get)
    }

    pub fn put_statistics(&self, subject: Subject, value: Option<SubjectStatistics>) {
        self.statistics
            .write()
            .insert(subject, Entry::new(value, self.ttl));
    }

    pub fn get_top_group_a(&self) -> Option<Vec<TopEntry>> {
        self.top_group_a.read().as_ref().and_then(Entry::get)
    }

    pub fn put_top_group_a(&self, value: Vec<TopEntry>) {
        *self.top_group_a.write() = Some(Entry::new(value, self.ttl));
    }
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new()
    }
}
