/*!
 * Pool Statistics
 * Region listing, usage, and fragmentation reporting
 */

use super::holes::find_holes;
use super::space::AddressSpace;
use super::types::{MemoryStats, ProcessAllocation, Region};
use crate::core::types::ProcessId;

/// Maximal runs of equal tags in address order
pub fn regions(space: &AddressSpace) -> Vec<Region> {
    let mut regions = Vec::new();
    let mut start = 0;

    while start < space.len() {
        let tag = space.slots()[start];
        let run = space.contiguous_from(start, tag);
        regions.push(Region {
            start,
            end: start + run - 1,
            tag,
        });
        start += run;
    }

    regions
}

/// Fragmentation ratio: 1 - largest_hole / free, clamped to [0, 1]
///
/// Zero when nothing is free or all free slots form a single hole.
pub fn fragmentation_ratio(free: usize, largest_hole: usize) -> f64 {
    if free == 0 {
        return 0.0;
    }
    let largest = largest_hole.min(free) as f64;
    (1.0 - largest / free as f64).clamp(0.0, 1.0)
}

pub fn compute_stats(space: &AddressSpace) -> MemoryStats {
    let total = space.len();
    let free = space.free_count();
    let used = total - free;

    let (hole_count, largest_hole) = find_holes(space, 1)
        .fold((0, 0), |(count, largest), hole| (count + 1, largest.max(hole.len)));

    MemoryStats {
        total_slots: total,
        used_slots: used,
        free_slots: free,
        usage_percentage: (used as f64 / total as f64) * 100.0,
        process_count: space.processes().len(),
        hole_count,
        largest_hole,
        fragmentation: fragmentation_ratio(free, largest_hole),
    }
}

pub fn process_allocation(space: &AddressSpace, pid: ProcessId) -> ProcessAllocation {
    let regions: Vec<Region> = regions(space)
        .into_iter()
        .filter(|r| r.tag.is_owned_by(pid))
        .collect();

    ProcessAllocation {
        pid,
        slots: regions.iter().map(Region::len).sum(),
        regions,
    }
}
