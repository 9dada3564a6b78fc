//! # Wishlist Matching
//!
//! - [`pattern`] - wildcard wishlist parsing and matching
//! - [`cache`] - per-settlement verdict cache
//! - [`gate`] - eligibility checks and the per-pass draw decision
//! - [`errors`] - error types
pub mod cache;
pub mod errors;
pub mod gate;
pub mod pattern;

pub use cache::{WishlistCache, WishlistVerdict};
pub use errors::WishlistError;
pub use gate::{check_eligibility, DrawDecision, Eligibility, WishlistGate};
pub use pattern::{has_match, PatternOptions, WishlistPatterns};
