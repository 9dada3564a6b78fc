//! JSON world snapshots.
//!
//! A snapshot stands in for the game host: a list of settlements with the
//! attributes the wishlist gate probes. Attributes the host could not report are
//! written as `null` and surface as [`ProbeError`]s.
//!
//! ```json
//! {
//!   "settlements": [
//!     { "id": 7, "name": "Ashford", "can_trade_now": true, "hostile_to_player": false,
//!       "next_restock_tick": 912000, "stock": ["Plasteel", "Gold Bar"] }
//!   ]
//! }
//! ```
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::world::{ProbeError, Settlement, SettlementId};

/// Restock tick the host reports before a trader's stock is first rolled.
pub const STOCK_NOT_GENERATED: i64 = -1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementRecord {
    pub id: SettlementId,
    pub name: String,
    #[serde(default)]
    pub can_trade_now: Option<bool>,
    #[serde(default)]
    pub hostile_to_player: Option<bool>,
    #[serde(default)]
    pub next_restock_tick: Option<i64>,
    #[serde(default)]
    pub stock: Option<Vec<String>>,
}

impl SettlementRecord {
    /// A tradeable, friendly settlement with generated stock.
    pub fn trading(id: u64, name: &str, stock: &[&str]) -> Self {
        Self {
            id: SettlementId(id),
            name: name.to_string(),
            can_trade_now: Some(true),
            hostile_to_player: Some(false),
            next_restock_tick: Some(0),
            stock: Some(stock.iter().map(|s| s.to_string()).collect()),
        }
    }

    fn probe<T: Clone>(&self, value: &Option<T>, attribute: &'static str) -> Result<T, ProbeError> {
        value.clone().ok_or(ProbeError::Unavailable {
            attribute,
            settlement: self.id,
        })
    }
}

impl Settlement for SettlementRecord {
    fn id(&self) -> SettlementId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn can_trade_now(&self) -> Result<bool, ProbeError> {
        self.probe(&self.can_trade_now, "can_trade_now")
    }

    fn is_hostile_to_player(&self) -> Result<bool, ProbeError> {
        self.probe(&self.hostile_to_player, "hostile_to_player")
    }

    fn stock_is_generated(&self) -> Result<bool, ProbeError> {
        self.probe(&self.next_restock_tick, "next_restock_tick")
            .map(|tick| tick != STOCK_NOT_GENERATED)
    }

    fn stock_labels(&self) -> Result<Vec<String>, ProbeError> {
        self.probe(&self.stock, "stock")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    #[serde(default)]
    pub settlements: Vec<SettlementRecord>,
}

impl WorldSnapshot {
    /// Load a snapshot from a JSON file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read world file {}: {}", path.display(), e))?;
        Self::from_json(&content)
            .map_err(|e| anyhow!("Failed to parse world file {}: {}", path.display(), e))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}
