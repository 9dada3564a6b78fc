//! The wishlist eligibility gate.
//!
//! [`WishlistGate::evaluate`] is called once per settlement per pass and decides
//! whether the wishlist marker is drawn. The per-settlement state is derived each
//! time from eligibility plus the cache:
//!
//! | eligibility          | cache      | action                          | result |
//! |----------------------|------------|---------------------------------|--------|
//! | ineligible / unknown | any        | evict entry                     | Skip   |
//! | eligible             | `Found`    | none                            | Draw   |
//! | eligible             | `NotFound` | none                            | Skip   |
//! | eligible             | absent     | match stock, insert-if-absent   | match  |
use std::fmt;
use std::sync::Arc;

use log::{debug, info, trace, warn};

use crate::logutil::escape_label;
use crate::metrics::{Snapshot, WishlistMetrics};
use crate::wishlist::cache::{WishlistCache, WishlistVerdict};
use crate::wishlist::pattern::{PatternOptions, WishlistPatterns};
use crate::world::{ProbeError, Settlement, WishlistSource};

/// Whether the renderer should draw the wishlist marker for a settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawDecision {
    Draw,
    Skip,
}

impl From<WishlistVerdict> for DrawDecision {
    fn from(verdict: WishlistVerdict) -> Self {
        match verdict {
            WishlistVerdict::Found => DrawDecision::Draw,
            WishlistVerdict::NotFound => DrawDecision::Skip,
        }
    }
}

/// Result of the eligibility probes, in probe order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    Eligible,
    TradeUnavailable,
    Hostile,
    StockNotGenerated,
}

impl fmt::Display for Eligibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Eligibility::Eligible => "eligible",
            Eligibility::TradeUnavailable => "trade unavailable",
            Eligibility::Hostile => "hostile to player",
            Eligibility::StockNotGenerated => "stock not generated",
        };
        f.write_str(s)
    }
}

/// Probe a settlement's eligibility, stopping at the first failing condition.
pub fn check_eligibility<S: Settlement + ?Sized>(settlement: &S) -> Result<Eligibility, ProbeError> {
    if !settlement.can_trade_now()? {
        return Ok(Eligibility::TradeUnavailable);
    }
    if settlement.is_hostile_to_player()? {
        return Ok(Eligibility::Hostile);
    }
    if !settlement.stock_is_generated()? {
        return Ok(Eligibility::StockNotGenerated);
    }
    Ok(Eligibility::Eligible)
}

pub struct WishlistGate {
    cache: Arc<WishlistCache>,
    source: Arc<dyn WishlistSource>,
    options: PatternOptions,
    metrics: WishlistMetrics,
}

impl WishlistGate {
    pub fn new(cache: Arc<WishlistCache>, source: Arc<dyn WishlistSource>) -> Self {
        Self {
            cache,
            source,
            options: PatternOptions::default(),
            metrics: WishlistMetrics::default(),
        }
    }

    pub fn with_pattern_options(mut self, options: PatternOptions) -> Self {
        self.options = options;
        self
    }

    pub fn cache(&self) -> &Arc<WishlistCache> {
        &self.cache
    }

    pub fn metrics(&self) -> Snapshot {
        self.metrics.snapshot()
    }

    /// Decide whether to draw the wishlist marker for `settlement`.
    ///
    /// Never fails: any attribute the host cannot report makes the settlement
    /// ineligible for this pass.
    pub fn evaluate<S: Settlement + ?Sized>(&self, settlement: &S) -> DrawDecision {
        self.metrics.inc_evaluations();
        let id = settlement.id();

        match check_eligibility(settlement) {
            Ok(Eligibility::Eligible) => {}
            Ok(reason) => {
                self.metrics.inc_ineligible();
                self.evict(settlement, &reason.to_string());
                return DrawDecision::Skip;
            }
            Err(e) => {
                self.metrics.inc_probe_failures();
                self.evict(settlement, &e.to_string());
                return DrawDecision::Skip;
            }
        }

        if let Some(verdict) = self.cache.get(id) {
            self.metrics.inc_cache_hits();
            trace!("Wishlist cache hit for {} ({:?})", id, verdict);
            return verdict.into();
        }

        self.metrics.inc_cache_misses();
        let text = match self.source.wishlist_text() {
            Ok(text) => text,
            Err(e) => {
                // Treated as an empty wishlist; not cached so the next pass retries.
                self.metrics.inc_source_failures();
                warn!("Wishlist unavailable, skipping {}: {}", id, e);
                return DrawDecision::Skip;
            }
        };
        let labels = match settlement.stock_labels() {
            Ok(labels) => labels,
            Err(e) => {
                self.metrics.inc_probe_failures();
                debug!("Skipping {}: {}", id, e);
                return DrawDecision::Skip;
            }
        };

        let matched = WishlistPatterns::compile(&text, &self.options).matches_any(&labels);
        info!(
            "Checking {} for wishlist items, cache size: {}",
            escape_label(settlement.name()),
            self.cache.len()
        );
        let verdict = WishlistVerdict::from_match(matched);
        let stored = self.cache.insert_if_absent(id, verdict);
        if stored != verdict {
            debug!(
                "Kept earlier wishlist verdict {:?} for {} over {:?}",
                stored, id, verdict
            );
        }
        if matched {
            self.metrics.inc_matches_found();
        }
        verdict.into()
    }

    fn evict<S: Settlement + ?Sized>(&self, settlement: &S, reason: &str) {
        if let Some(previous) = self.cache.evict(settlement.id()) {
            self.metrics.inc_evictions();
            debug!(
                "Evicted wishlist verdict {:?} for {} {}: {}",
                previous,
                settlement.id(),
                escape_label(settlement.name()),
                reason
            );
        }
    }
}
