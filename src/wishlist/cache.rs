//! Per-settlement wishlist verdict cache.
//!
//! Entries exist only for settlements that were eligible (tradeable, not hostile,
//! stock generated) when the verdict was computed. An entry is written at most once
//! per eligibility episode and removed as soon as the settlement turns ineligible.
//!
//! Stock changes while a settlement stays eligible do NOT evict its entry: an item
//! that sells out keeps a `Found` verdict alive until the settlement next drops out
//! of eligibility (e.g. the caravan leaves trade range). Re-matching on every stock
//! change would mean re-running the wishlist against every settlement each pass.
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::world::SettlementId;

/// Outcome of matching one settlement's stock against the wishlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WishlistVerdict {
    Found,
    NotFound,
}

impl WishlistVerdict {
    pub fn from_match(matched: bool) -> Self {
        if matched {
            WishlistVerdict::Found
        } else {
            WishlistVerdict::NotFound
        }
    }
}

#[derive(Debug, Default)]
pub struct WishlistCache {
    entries: Mutex<HashMap<SettlementId, WishlistVerdict>>,
}

impl WishlistCache {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic elsewhere while holding the lock leaves the map itself intact.
    fn lock(&self) -> MutexGuard<'_, HashMap<SettlementId, WishlistVerdict>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn get(&self, id: SettlementId) -> Option<WishlistVerdict> {
        self.lock().get(&id).copied()
    }

    pub fn contains(&self, id: SettlementId) -> bool {
        self.lock().contains_key(&id)
    }

    /// Store `verdict` unless an entry already exists; returns the verdict that is
    /// cached afterwards. The first insert wins.
    pub fn insert_if_absent(&self, id: SettlementId, verdict: WishlistVerdict) -> WishlistVerdict {
        *self.lock().entry(id).or_insert(verdict)
    }

    /// Remove the entry for `id`, if any.
    pub fn evict(&self, id: SettlementId) -> Option<WishlistVerdict> {
        self.lock().remove(&id)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
