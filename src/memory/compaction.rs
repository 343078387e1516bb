/*!
 * Compaction
 * Slide allocations toward address zero until free space is one region
 *
 * Runs shift passes until a pass makes no swap. Each pass moves every
 * occupied run at most one slot left, so the worst case is O(n^2) for a pool
 * of n slots. Relative order of occupied slots is preserved.
 */

use super::space::AddressSpace;
use super::types::CompactionStats;
use tracing::debug;

/// Compact `space` in place
pub fn compact(space: &mut AddressSpace) -> CompactionStats {
    let mut stats = CompactionStats::default();

    loop {
        let swaps = space.shift_pass();
        stats.passes += 1;
        stats.moved += swaps;

        debug!(pass = stats.passes, swaps, "compaction pass");

        if swaps == 0 {
            break;
        }
    }

    stats
}

/// Whether `space` is an occupied prefix followed by a FREE suffix
pub fn is_compacted(space: &AddressSpace) -> bool {
    let occupied = space.iter().take_while(|t| !t.is_free()).count();
    space.iter().skip(occupied).all(|t| t.is_free())
}
