//! Gate counters.
//! Each [`WishlistGate`](crate::wishlist::WishlistGate) owns one set, so independent
//! gates (and tests) never share counts.
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct WishlistMetrics {
    evaluations: AtomicU64,
    cache_hits: AtomicU64,
    cache_misses: AtomicU64,
    evictions: AtomicU64,
    ineligible: AtomicU64,
    probe_failures: AtomicU64,
    source_failures: AtomicU64,
    matches_found: AtomicU64,
}

impl WishlistMetrics {
    pub fn inc_evaluations(&self) {
        self.evaluations.fetch_add(1, Ordering::Relaxed);
    }
    pub fn inc_cache_hits(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }
    pub fn inc_cache_misses(&self) {
        self.cache_misses.fetch_add(1, Ordering::Relaxed);
    }
    pub fn inc_evictions(&self) {
        self.evictions.fetch_add(1, Ordering::Relaxed);
    }
    pub fn inc_ineligible(&self) {
        self.ineligible.fetch_add(1, Ordering::Relaxed);
    }
    pub fn inc_probe_failures(&self) {
        self.probe_failures.fetch_add(1, Ordering::Relaxed);
    }
    pub fn inc_source_failures(&self) {
        self.source_failures.fetch_add(1, Ordering::Relaxed);
    }
    pub fn inc_matches_found(&self) {
        self.matches_found.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            evaluations: self.evaluations.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            cache_misses: self.cache_misses.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            ineligible: self.ineligible.load(Ordering::Relaxed),
            probe_failures: self.probe_failures.load(Ordering::Relaxed),
            source_failures: self.source_failures.load(Ordering::Relaxed),
            matches_found: self.matches_found.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub evaluations: u64,
    pub cache_hits: u64,
    /// Each miss ran (or attempted) a wishlist match.
    pub cache_misses: u64,
    pub evictions: u64,
    pub ineligible: u64,
    pub probe_failures: u64,
    pub source_failures: u64,
    pub matches_found: u64,
}

impl Snapshot {
    /// Fraction of evaluations of eligible settlements answered from cache.
    pub fn hit_ratio(&self) -> Option<f64> {
        let lookups = self.cache_hits + self.cache_misses;
        if lookups > 0 {
            Some(self.cache_hits as f64 / lookups as f64)
        } else {
            None
        }
    }
}
