/*!
 * Memory Allocator Implementation
 * Placement and commit
 */

use super::super::placement::select;
use super::super::types::{MemoryPressure, Strategy};
use super::MemoryManager;
use crate::core::types::{Address, ProcessId, Size, Tag};
use tracing::{debug, error, info, warn};

impl MemoryManager {
    /// Allocate `size` contiguous slots for `pid`
    ///
    /// Returns the starting address, or `None` (pool unchanged) when `size`
    /// is zero, exceeds the pool, or no hole is large enough.
    pub fn allocate(&mut self, pid: ProcessId, size: Size, strategy: Strategy) -> Option<Address> {
        let Some(hole) = select(&self.space, size, &strategy) else {
            warn!(
                pid = %pid,
                size,
                strategy = %strategy,
                capacity = self.capacity(),
                "No placement for allocation request"
            );
            return None;
        };

        debug!(
            pid = %pid,
            hole_start = hole.start,
            hole_len = hole.len,
            strategy = %strategy,
            "Selected hole"
        );

        let address = hole.start;
        if let Err(e) = self.space.tag_range(address, address + size, Tag::Owned(pid)) {
            // Selected holes always lie inside the pool
            error!(
                error = %e,
                hole_start = hole.start,
                hole_len = hole.len,
                "Selected hole outside pool"
            );
            debug_assert!(false, "selected hole outside pool: {}", e);
            return None;
        }

        let (total, used, _) = self.info();
        let level = MemoryPressure::from_ratio(used as f64 / total as f64);
        if level > MemoryPressure::Low {
            warn!(
                pressure = %level,
                used,
                total,
                "Memory pressure {}: allocated {} slots at {} for process {}",
                level, size, address, pid
            );
        } else {
            info!(
                "Allocated {} slots at {} for process {} ({})",
                size, address, pid, strategy
            );
        }

        Some(address)
    }
}
