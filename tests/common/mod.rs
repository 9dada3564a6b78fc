//! Test fixtures: an in-memory settlement with switchable probes and a
//! wishlist source that counts how often it is read.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tradewish::wishlist::{WishlistCache, WishlistError, WishlistGate};
use tradewish::world::{ProbeError, Settlement, SettlementId, WishlistSource};

#[derive(Debug, Default)]
pub struct TestSettlement {
    pub id: u64,
    pub name: String,
    pub can_trade: bool,
    pub hostile: bool,
    pub stock_generated: bool,
    pub stock: Vec<String>,
    /// Probe reported as unavailable, by attribute name.
    pub broken_probe: Option<&'static str>,
    pub stock_reads: AtomicUsize,
}

impl TestSettlement {
    pub fn trading(id: u64, name: &str, stock: &[&str]) -> Self {
        Self {
            id,
            name: name.to_string(),
            can_trade: true,
            hostile: false,
            stock_generated: true,
            stock: stock.iter().map(|s| s.to_string()).collect(),
            broken_probe: None,
            stock_reads: AtomicUsize::new(0),
        }
    }

    pub fn stock_reads(&self) -> usize {
        self.stock_reads.load(Ordering::SeqCst)
    }

    fn probe<T>(&self, attribute: &'static str, value: T) -> Result<T, ProbeError> {
        if self.broken_probe == Some(attribute) {
            Err(ProbeError::Unavailable {
                attribute,
                settlement: SettlementId(self.id),
            })
        } else {
            Ok(value)
        }
    }
}

impl Settlement for TestSettlement {
    fn id(&self) -> SettlementId {
        SettlementId(self.id)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn can_trade_now(&self) -> Result<bool, ProbeError> {
        self.probe("can_trade_now", self.can_trade)
    }

    fn is_hostile_to_player(&self) -> Result<bool, ProbeError> {
        self.probe("hostile", self.hostile)
    }

    fn stock_is_generated(&self) -> Result<bool, ProbeError> {
        self.probe("stock_generated", self.stock_generated)
    }

    fn stock_labels(&self) -> Result<Vec<String>, ProbeError> {
        self.stock_reads.fetch_add(1, Ordering::SeqCst);
        self.probe("stock", self.stock.clone())
    }
}

/// Wishlist source whose text can be swapped (or made to fail) mid-test.
#[derive(Debug, Default)]
pub struct SwitchableWishlist {
    text: Mutex<Option<String>>,
    reads: AtomicUsize,
}

impl SwitchableWishlist {
    pub fn new(text: &str) -> Arc<Self> {
        Arc::new(Self {
            text: Mutex::new(Some(text.to_string())),
            reads: AtomicUsize::new(0),
        })
    }

    pub fn set(&self, text: &str) {
        *self.text.lock().unwrap() = Some(text.to_string());
    }

    pub fn fail(&self) {
        *self.text.lock().unwrap() = None;
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl WishlistSource for SwitchableWishlist {
    fn wishlist_text(&self) -> Result<String, WishlistError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.text
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| WishlistError::ConfigurationUnavailable("provider offline".to_string()))
    }
}

/// A gate with a fresh cache reading from `source`.
pub fn gate_with(source: Arc<SwitchableWishlist>) -> WishlistGate {
    WishlistGate::new(Arc::new(WishlistCache::new()), source)
}
