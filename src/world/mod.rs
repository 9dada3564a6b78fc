//! # Host World Interfaces
//!
//! The wishlist gate never owns settlements, pattern configuration, or drawing.
//! It consults them through the traits in this module, which the host implements:
//!
//! - [`Settlement`] - read-only probes of a tradeable map location
//! - [`WishlistSource`] - supplies the raw wishlist pattern text
//! - [`OverlaySink`] - emits the visual marker for a settlement
//!
//! A JSON-backed host lives in [`snapshot`], pattern providers in [`source`] and a
//! collecting overlay in [`overlay`]; the CLI uses all three.
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::wishlist::errors::WishlistError;

pub mod overlay;
pub mod snapshot;
pub mod source;

pub use overlay::MarkerLog;
pub use snapshot::{SettlementRecord, WorldSnapshot};
pub use source::{FileWishlist, InlineWishlist};

/// Stable identity of a settlement; the wishlist cache is keyed by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettlementId(pub u64);

impl fmt::Display for SettlementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A settlement attribute could not be determined right now.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    #[error("{attribute} unavailable for settlement {settlement}")]
    Unavailable {
        attribute: &'static str,
        settlement: SettlementId,
    },
}

/// Read-only view of a tradeable map location.
pub trait Settlement {
    fn id(&self) -> SettlementId;

    /// Display name, used for logging only.
    fn name(&self) -> &str;

    fn can_trade_now(&self) -> Result<bool, ProbeError>;

    fn is_hostile_to_player(&self) -> Result<bool, ProbeError>;

    /// Whether the trader's stock has been rolled yet.
    fn stock_is_generated(&self) -> Result<bool, ProbeError>;

    /// Labels of the items currently offered for trade.
    fn stock_labels(&self) -> Result<Vec<String>, ProbeError>;
}

/// Supplies the current raw wishlist text (comma-delimited wildcard patterns).
///
/// Resolved once at startup and handed to the gate; the gate asks for fresh
/// text on every cache miss.
pub trait WishlistSource: Send + Sync {
    fn wishlist_text(&self) -> Result<String, WishlistError>;
}

impl<F> WishlistSource for F
where
    F: Fn() -> Result<String, WishlistError> + Send + Sync,
{
    fn wishlist_text(&self) -> Result<String, WishlistError> {
        self()
    }
}

/// Receives a settlement whenever its wishlist marker should be drawn.
pub trait OverlaySink {
    fn draw_overlay(&mut self, settlement: &dyn Settlement);
}
