/*!
 * Memory Management
 *
 * Owner of one simulated pool and the engine's call contract.
 *
 * ## Operations
 *
 * - **allocate**: select a hole with first, best, or worst fit and tag it
 * - **deallocate**: free every slot owned by a process
 * - **compact**: slide allocations toward address zero
 * - **snapshot / find_free_regions / regions / stats**: read-only reporting
 *
 * Unsatisfiable allocations return `None`; only construction and explicit
 * range access can fail with [`MemoryError`](super::types::MemoryError).
 */

mod allocator;
mod process;

use super::compaction;
use super::holes::find_holes;
use super::space::AddressSpace;
use super::stats;
use super::traits::{Allocator, MemoryInfo};
use super::types::{
    CompactionStats, Hole, MemoryResult, MemoryStats, PlacementRequest, Region,
};
use crate::core::types::{Address, ProcessId, Size, Tag};
use crate::monitoring::span_operation;
use tracing::info;

/// Memory manager
#[derive(Debug, Clone)]
pub struct MemoryManager {
    space: AddressSpace,
}

impl MemoryManager {
    /// Create a manager over a pool of `total` FREE slots
    pub fn with_capacity(total: Size) -> MemoryResult<Self> {
        let space = AddressSpace::new(total)?;
        info!(slots = total, "Memory manager initialized");
        Ok(Self { space })
    }

    /// Wrap an existing address space
    pub fn from_space(space: AddressSpace) -> Self {
        Self { space }
    }

    #[inline]
    pub fn space(&self) -> &AddressSpace {
        &self.space
    }

    #[inline]
    pub fn capacity(&self) -> Size {
        self.space.len()
    }

    /// Compact the pool so all free slots form one region at the top
    pub fn compact(&mut self) -> CompactionStats {
        let span = span_operation("compact");
        let result = compaction::compact(&mut self.space);
        span.record_items_processed(result.moved);
        span.record_result(true);

        info!(
            passes = result.passes,
            moved = result.moved,
            "Compacted memory pool"
        );
        result
    }

    /// One tag per address
    pub fn snapshot(&self) -> Vec<Tag> {
        self.space.slots().to_vec()
    }

    /// Holes of at least `min_size` slots in address order
    pub fn find_free_regions(&self, min_size: Size) -> Vec<Hole> {
        find_holes(&self.space, min_size).collect()
    }

    /// Runs of equal tags in address order
    pub fn regions(&self) -> Vec<Region> {
        stats::regions(&self.space)
    }

    pub fn slot_at(&self, address: Address) -> MemoryResult<Tag> {
        self.space.slot_at(address)
    }

    /// Pool rendered as one glyph per slot
    pub fn render(&self) -> String {
        self.space.render()
    }

    pub fn stats(&self) -> MemoryStats {
        stats::compute_stats(&self.space)
    }

    pub fn info(&self) -> (Size, Size, Size) {
        let total = self.space.len();
        let free = self.space.free_count();
        (total, total - free, free)
    }
}

impl Allocator for MemoryManager {
    fn allocate(&mut self, request: PlacementRequest) -> Option<Address> {
        MemoryManager::allocate(self, request.pid, request.size, request.strategy)
    }

    fn deallocate(&mut self, pid: ProcessId) -> Size {
        MemoryManager::deallocate(self, pid)
    }

    fn compact(&mut self) -> CompactionStats {
        MemoryManager::compact(self)
    }
}

impl MemoryInfo for MemoryManager {
    fn stats(&self) -> MemoryStats {
        MemoryManager::stats(self)
    }

    fn info(&self) -> (Size, Size, Size) {
        MemoryManager::info(self)
    }

    fn process_memory(&self, pid: ProcessId) -> Size {
        MemoryManager::process_memory(self, pid)
    }
}
