//! Memoization Module
//!
//! Caches function results by the structural hash of their arguments.
//! Storage is a `DashMap`, so a memoized function can be shared across
//! threads and called concurrently without an outer lock.
//!
//! Features:
//! - Sync (`Memoized`) and async (`MemoizedAsync`) wrappers
//! - Hit/miss counters with `stats()`
//! - Cache HIT/MISS logging at `debug`
//!
//! Entries are bucketed by the `hash_str` of the arguments' compact JSON
//! and matched on the JSON itself, so colliding hashes never share a
//! result. Arguments that fail to serialize are never cached.

use dashmap::DashMap;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use serde::Serialize;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

use crate::utils::encoding::hash_str;

/// Lookup key: rolling hash plus the JSON it was computed from
struct CacheKey {
    hash: i32,
    json: String,
}

impl CacheKey {
    fn of<A: Serialize>(args: &A) -> Option<Self> {
        match serde_json::to_string(args) {
            Ok(json) => Some(Self {
                hash: hash_str(&json),
                json,
            }),
            Err(e) => {
                debug!("CACHE BYPASS: arguments not serializable: {}", e);
                None
            }
        }
    }
}

/// Shared store and counters behind both wrappers
struct Store<R> {
    /// hash -> entries whose arguments share that hash
    entries: DashMap<i32, Vec<(String, R)>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<R: Clone> Store<R> {
    fn new() -> Self {
        Self {
            entries: DashMap::new(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    fn get(&self, key: &CacheKey) -> Option<R> {
        // the map guard is dropped before returning so callbacks may recurse
        let cached = self.entries.get(&key.hash).and_then(|bucket| {
            bucket
                .iter()
                .find(|(json, _)| *json == key.json)
                .map(|(_, value)| value.clone())
        });
        match cached {
            Some(value) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                debug!("CACHE HIT: {}", key.hash);
                Some(value)
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                debug!("CACHE MISS: {}", key.hash);
                None
            }
        }
    }

    fn set(&self, key: CacheKey, value: R) {
        let mut bucket = self.entries.entry(key.hash).or_default();
        match bucket.iter().position(|(json, _)| *json == key.json) {
            Some(i) => bucket[i].1 = value,
            None => bucket.push((key.json, value)),
        }
    }

    fn len(&self) -> usize {
        self.entries.iter().map(|bucket| bucket.value().len()).sum()
    }

    fn stats(&self) -> CacheStats {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let total = hits + misses;
        let hit_rate = if total > 0 {
            (hits as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        CacheStats {
            entries: self.len(),
            hits,
            misses,
            hit_rate,
        }
    }

    fn clear(&self) {
        self.entries.clear();
        info!("CACHE CLEARED");
    }
}

/// Cache statistics
#[derive(Debug, Clone, PartialEq)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
    /// Percentage of lookups served from the cache
    pub hit_rate: f64,
}

// ============================================
// Sync
// ============================================

/// Memoized synchronous function
pub struct Memoized<A, R> {
    f: Arc<dyn Fn(A) -> R + Send + Sync>,
    store: Arc<Store<R>>,
}

impl<A, R> Clone for Memoized<A, R> {
    fn clone(&self) -> Self {
        Self {
            f: Arc::clone(&self.f),
            store: Arc::clone(&self.store),
        }
    }
}

impl<A: Serialize, R: Clone> Memoized<A, R> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        Self {
            f: Arc::new(f),
            store: Arc::new(Store::new()),
        }
    }

    /// Return the cached result for `args`, computing it on first use
    pub fn call(&self, args: A) -> R {
        let Some(key) = CacheKey::of(&args) else {
            return (self.f)(args);
        };
        if let Some(hit) = self.store.get(&key) {
            return hit;
        }
        let result = (self.f)(args);
        self.store.set(key, result.clone());
        result
    }

    pub fn stats(&self) -> CacheStats {
        self.store.stats()
    }

    pub fn clear(&self) {
        self.store.clear();
    }
}

// ============================================
// Async
// ============================================

/// Memoized async function; the resolved value is cached
pub struct MemoizedAsync<A, R> {
    f: Arc<dyn Fn(A) -> BoxFuture<'static, R> + Send + Sync>,
    store: Arc<Store<R>>,
}

impl<A, R> Clone for MemoizedAsync<A, R> {
    fn clone(&self) -> Self {
        Self {
            f: Arc::clone(&self.f),
            store: Arc::clone(&self.store),
        }
    }
}

impl<A: Serialize, R: Clone + Send + 'static> MemoizedAsync<A, R> {
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn(A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
    {
        Self {
            f: Arc::new(move |args| f(args).boxed()),
            store: Arc::new(Store::new()),
        }
    }

    /// Await the cached result for `args`, running `f` on first use.
    ///
    /// Concurrent first calls with the same arguments each run `f`; the last
    /// one to finish wins the slot.
    pub async fn call(&self, args: A) -> R {
        let Some(key) = CacheKey::of(&args) else {
            return (self.f)(args).await;
        };
        if let Some(hit) = self.store.get(&key) {
            return hit;
        }
        let result = (self.f)(args).await;
        self.store.set(key, result.clone());
        result
    }

    pub fn stats(&self) -> CacheStats {
        self.store.stats()
    }

    pub fn clear(&self) {
        self.store.clear();
    }
}
