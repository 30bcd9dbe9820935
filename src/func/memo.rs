//! Call memoization with optional time-based expiry.
//!
//! [`Memoized`] wraps a function together with a cache of its past
//! results. Entries are keyed by argument value and can be given a
//! time-to-live measured on the monotonic clock, so wall-clock jumps never
//! expire or resurrect an entry.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};
use tracing::trace;

struct CacheEntry<R> {
    recorded_at: Instant,
    value: R,
}

/// A function wrapped with an argument-keyed result cache.
///
/// Each distinct argument value gets its own cache entry. Without a TTL,
/// entries live for the lifetime of the memoizer; with one, an entry older
/// than the TTL is recomputed on the next call and the fresh result stored
/// in its place. Expired entries are replaced rather than swept, so the
/// cache never shrinks on its own.
///
/// Calls take `&mut self`: the memoizer is designed for single-threaded
/// use and makes no locking promises.
///
/// # Examples
///
/// ```rust
/// use sundry::func::Memoized;
///
/// let mut squares = Memoized::new(|&n: &u64| n * n);
///
/// assert_eq!(squares.call(12), 144);
/// assert_eq!(squares.call(12), 144); // served from cache
/// assert_eq!(squares.len(), 1);
/// ```
pub struct Memoized<F, A, R> {
    func: F,
    ttl: Option<Duration>,
    cache: HashMap<A, CacheEntry<R>>,
}

impl<F, A, R> Memoized<F, A, R>
where
    F: FnMut(&A) -> R,
    A: Eq + Hash,
    R: Clone,
{
    /// Wraps `func` with a cache whose entries never expire.
    pub fn new(func: F) -> Self {
        Self {
            func,
            ttl: None,
            cache: HashMap::new(),
        }
    }

    /// Wraps `func` with a cache whose entries expire `ttl` after they
    /// were recorded.
    ///
    /// An entry exactly at the boundary still counts as fresh; strictly
    /// older entries are recomputed.
    pub fn with_ttl(func: F, ttl: Duration) -> Self {
        Self {
            func,
            ttl: Some(ttl),
            cache: HashMap::new(),
        }
    }

    /// Invokes the wrapped function, serving fresh cached results instead
    /// where possible.
    ///
    /// A cache hit clones the stored result. A miss, or a hit past its
    /// TTL, runs the wrapped function and records the new result with the
    /// current time.
    pub fn call(&mut self, args: A) -> R {
        if let Some(entry) = self.cache.get(&args) {
            let fresh = match self.ttl {
                None => true,
                Some(ttl) => entry.recorded_at.elapsed() <= ttl,
            };
            if fresh {
                trace!("Serving memoized result");
                return entry.value.clone();
            }
            trace!("Memoized entry expired, recomputing");
        }

        let value = (self.func)(&args);
        self.cache.insert(
            args,
            CacheEntry {
                recorded_at: Instant::now(),
                value: value.clone(),
            },
        );
        value
    }

    /// Number of cached entries, expired ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Whether the cache holds no entries yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Drops every cached entry, forcing recomputation on the next calls.
    pub fn clear(&mut self) {
        self.cache.clear();
    }
}
