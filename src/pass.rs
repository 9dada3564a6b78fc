//! One evaluation pass over every candidate settlement.
use log::debug;

use crate::wishlist::{DrawDecision, WishlistGate};
use crate::world::{OverlaySink, Settlement};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PassSummary {
    pub evaluated: usize,
    pub drawn: usize,
    pub skipped: usize,
}

/// Evaluate each settlement in enumeration order, drawing the overlay exactly for
/// those the gate marks `Draw`. A settlement the gate cannot assess is skipped and
/// the pass carries on.
pub fn run_pass<'a, S, I, O>(gate: &WishlistGate, settlements: I, overlay: &mut O) -> PassSummary
where
    S: Settlement + 'a,
    I: IntoIterator<Item = &'a S>,
    O: OverlaySink + ?Sized,
{
    let mut summary = PassSummary::default();
    for settlement in settlements {
        summary.evaluated += 1;
        match gate.evaluate(settlement) {
            DrawDecision::Draw => {
                overlay.draw_overlay(settlement);
                summary.drawn += 1;
            }
            DrawDecision::Skip => summary.skipped += 1,
        }
    }
    debug!(
        "Wishlist pass: {} evaluated, {} drawn, cache size {}",
        summary.evaluated,
        summary.drawn,
        gate.cache().len()
    );
    summary
}
