/*!
 * Placement Strategies
 * First, best, and worst fit hole selection
 *
 * All three strategies share the hole finder and differ only in which
 * qualifying hole they keep. Ties between equally sized holes always go to
 * the lowest address, so every strategy is deterministic.
 */

use super::holes::{find_holes, Holes};
use super::space::AddressSpace;
use super::traits::PlacementPolicy;
use super::types::{Hole, Strategy};
use crate::core::types::Size;

/// First qualifying hole in address order
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstFit;

/// Smallest qualifying hole
#[derive(Debug, Clone, Copy, Default)]
pub struct BestFit;

/// Largest qualifying hole
#[derive(Debug, Clone, Copy, Default)]
pub struct WorstFit;

impl PlacementPolicy for FirstFit {
    fn select(&self, mut holes: Holes<'_>) -> Option<Hole> {
        holes.next()
    }
}

impl PlacementPolicy for BestFit {
    fn select(&self, holes: Holes<'_>) -> Option<Hole> {
        // Strict comparison keeps the earliest hole among equals
        holes.reduce(|best, hole| if hole.len < best.len { hole } else { best })
    }
}

impl PlacementPolicy for WorstFit {
    fn select(&self, holes: Holes<'_>) -> Option<Hole> {
        holes.reduce(|worst, hole| if hole.len > worst.len { hole } else { worst })
    }
}

impl PlacementPolicy for Strategy {
    fn select(&self, holes: Holes<'_>) -> Option<Hole> {
        match self {
            Strategy::First => FirstFit.select(holes),
            Strategy::Best => BestFit.select(holes),
            Strategy::Worst => WorstFit.select(holes),
        }
    }
}

/// Choose a hole for `size` slots without touching the pool
///
/// Returns `None` for a zero size, a size larger than the pool, or when no
/// hole is large enough.
pub fn select(space: &AddressSpace, size: Size, policy: &impl PlacementPolicy) -> Option<Hole> {
    if size == 0 || size > space.len() {
        return None;
    }
    policy.select(find_holes(space, size))
}
