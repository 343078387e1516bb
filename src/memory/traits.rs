/*!
 * Memory Traits
 * Memory management abstractions
 */

use super::holes::Holes;
use super::types::*;
use crate::core::types::{Address, ProcessId, Size};

/// Hole selection rule
///
/// Implementations only choose; they never mutate the pool.
pub trait PlacementPolicy {
    /// Pick one hole from an address-ascending sequence of qualifying holes
    fn select(&self, holes: Holes<'_>) -> Option<Hole>;
}

/// Memory allocator interface
pub trait Allocator {
    /// Place `request` and return its starting address, or `None` if it does not fit
    fn allocate(&mut self, request: PlacementRequest) -> Option<Address>;

    /// Free every slot owned by a process, returning how many were freed
    fn deallocate(&mut self, pid: ProcessId) -> Size;

    /// Slide all allocations toward address zero
    fn compact(&mut self) -> CompactionStats;
}

/// Memory statistics provider
pub trait MemoryInfo {
    /// Get overall memory statistics
    fn stats(&self) -> MemoryStats;

    /// Get memory info as (total, used, available)
    fn info(&self) -> (Size, Size, Size);

    /// Get slot usage for a specific process
    fn process_memory(&self, pid: ProcessId) -> Size;

    /// Get memory pressure level
    fn pressure(&self) -> MemoryPressure {
        self.stats().memory_pressure()
    }
}
