use log::info;

use crate::logutil::escape_label;
use crate::world::{OverlaySink, Settlement, SettlementId};

/// An overlay that records which settlements were marked during a pass.
#[derive(Debug, Default, Clone)]
pub struct MarkerLog {
    marked: Vec<(SettlementId, String)>,
    echo: bool,
}

impl MarkerLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also log every marker at info level as it is drawn.
    pub fn echoing() -> Self {
        Self {
            marked: Vec::new(),
            echo: true,
        }
    }

    pub fn marked(&self) -> &[(SettlementId, String)] {
        &self.marked
    }

    pub fn ids(&self) -> Vec<SettlementId> {
        self.marked.iter().map(|(id, _)| *id).collect()
    }

    /// Drain markers between passes.
    pub fn take(&mut self) -> Vec<(SettlementId, String)> {
        std::mem::take(&mut self.marked)
    }
}

impl OverlaySink for MarkerLog {
    fn draw_overlay(&mut self, settlement: &dyn Settlement) {
        if self.echo {
            info!(
                "Wishlist marker on {} {}",
                settlement.id(),
                escape_label(settlement.name())
            );
        }
        self.marked
            .push((settlement.id(), settlement.name().to_string()));
    }
}
