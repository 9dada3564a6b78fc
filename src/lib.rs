//! # Tradewish - Wishlist Markers for Tradeable Settlements
//!
//! Tradewish marks map settlements whose trade stock currently holds an item the
//! player is looking for. The player writes a wishlist of wildcard patterns
//! (`Gold*,Jade,?ron`); every rendering pass asks the [`wishlist::WishlistGate`]
//! whether each settlement gets a marker.
//!
//! Matching a settlement's stock against the wishlist is the expensive step, so
//! verdicts are cached per settlement and only invalidated when the settlement
//! stops being eligible for trade (out of range, hostile, stock not yet rolled).
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use tradewish::pass::run_pass;
//! use tradewish::wishlist::{WishlistCache, WishlistGate};
//! use tradewish::world::{InlineWishlist, MarkerLog, SettlementRecord};
//!
//! let gate = WishlistGate::new(
//!     Arc::new(WishlistCache::new()),
//!     Arc::new(InlineWishlist::new("Gold*,Jade")),
//! );
//! let settlements = vec![SettlementRecord::trading(1, "Ashford", &["Plasteel", "Gold Bar"])];
//! let mut markers = MarkerLog::new();
//! let summary = run_pass(&gate, &settlements, &mut markers);
//! assert_eq!(summary.drawn, 1);
//! ```
//!
//! ## Module Organization
//!
//! - [`wishlist`] - pattern matching, verdict cache and the eligibility gate
//! - [`world`] - host-facing traits plus a JSON snapshot host
//! - [`pass`] - the per-pass driver loop
//! - [`config`] - configuration loading
//! - [`metrics`] - gate counters
//! - [`logutil`] - single-line log escaping

pub mod config;
pub mod logutil;
pub mod metrics;
pub mod pass;
pub mod wishlist;
pub mod world;
