/*!
 * Memory Manager Scenario Tests
 * End-to-end allocate, free, and compact sequences on small pools
 */

use contiguous_allocator::memory::{Allocator, MemoryInfo, PlacementRequest};
use contiguous_allocator::{MemoryError, MemoryManager, ProcessId, Strategy, Tag};
use pretty_assertions::assert_eq;

fn pid(c: char) -> ProcessId {
    ProcessId::new(c).unwrap()
}

#[test]
fn test_ten_slot_walkthrough() {
    let mut mgr = MemoryManager::with_capacity(10).unwrap();

    assert_eq!(mgr.allocate(pid('A'), 5, Strategy::First), Some(0));
    assert_eq!(mgr.render(), "AAAAA.....");

    assert_eq!(mgr.allocate(pid('B'), 3, Strategy::First), Some(5));
    assert_eq!(mgr.render(), "AAAAABBB..");

    assert_eq!(mgr.deallocate(pid('A')), 5);
    assert_eq!(mgr.render(), ".....BBB..");

    // Holes are 5@0 and 2@8; only the first can hold 4 slots
    let mut best = mgr.clone();
    assert_eq!(best.allocate(pid('C'), 4, Strategy::Best), Some(0));
    assert_eq!(best.render(), "CCCC.BBB..");

    // Worst fit picks the largest hole, also at 0
    assert_eq!(mgr.allocate(pid('D'), 3, Strategy::Worst), Some(0));
    assert_eq!(mgr.render(), "DDD..BBB..");
}

#[test]
fn test_compacting_compacted_pool_is_unchanged() {
    let mut mgr = MemoryManager::with_capacity(10).unwrap();
    mgr.allocate(pid('C'), 5, Strategy::First);
    mgr.allocate(pid('B'), 3, Strategy::First);
    assert_eq!(mgr.render(), "CCCCCBBB..");

    let stats = mgr.compact();
    assert_eq!(mgr.render(), "CCCCCBBB..");
    assert_eq!(stats.moved, 0);
}

#[test]
fn test_compaction_enables_large_allocation() {
    let mut mgr = MemoryManager::with_capacity(12).unwrap();
    for (c, size) in [('A', 3), ('B', 3), ('C', 3), ('D', 3)] {
        mgr.allocate(pid(c), size, Strategy::First);
    }
    mgr.deallocate(pid('A'));
    mgr.deallocate(pid('C'));
    assert_eq!(mgr.render(), "...BBB...DDD");

    // Two 3-slot holes cannot hold 6 slots
    assert_eq!(mgr.allocate(pid('E'), 6, Strategy::First), None);

    mgr.compact();
    assert_eq!(mgr.render(), "BBBDDD......");
    assert_eq!(mgr.allocate(pid('E'), 6, Strategy::First), Some(6));
    assert_eq!(mgr.render(), "BBBDDDEEEEEE");
}

#[test]
fn test_snapshot_and_free_regions() {
    let mut mgr = MemoryManager::with_capacity(6).unwrap();
    mgr.allocate(pid('X'), 2, Strategy::First);

    let snapshot = mgr.snapshot();
    assert_eq!(snapshot.len(), 6);
    assert_eq!(snapshot[0], Tag::Owned(pid('X')));
    assert_eq!(snapshot[5], Tag::Free);

    let holes = mgr.find_free_regions(1);
    assert_eq!(holes.len(), 1);
    assert_eq!((holes[0].start, holes[0].len), (2, 4));
    assert!(mgr.find_free_regions(5).is_empty());
}

#[test]
fn test_trait_interfaces() {
    let mut mgr = MemoryManager::with_capacity(8).unwrap();
    let request = PlacementRequest::new(pid('T'), 6).with_strategy(Strategy::Worst);

    assert_eq!(Allocator::allocate(&mut mgr, request), Some(0));
    assert_eq!(MemoryInfo::info(&mgr), (8, 6, 2));
    assert_eq!(MemoryInfo::process_memory(&mgr, pid('T')), 6);
    assert_eq!(
        mgr.pressure(),
        contiguous_allocator::memory::MemoryPressure::Medium
    );
    assert_eq!(Allocator::deallocate(&mut mgr, pid('T')), 6);
    assert_eq!(Allocator::compact(&mut mgr).passes, 1);
}

#[test]
fn test_pool_construction_errors() {
    assert!(matches!(
        MemoryManager::with_capacity(0),
        Err(MemoryError::EmptyPool)
    ));
    assert!(matches!(
        MemoryManager::with_capacity(usize::MAX),
        Err(MemoryError::StorageExhausted { .. })
    ));

    let mgr = MemoryManager::with_capacity(3).unwrap();
    assert_eq!(
        mgr.slot_at(3),
        Err(MemoryError::IndexOutOfRange { index: 3, len: 3 })
    );
}

#[test]
fn test_stats_track_usage() {
    let mut mgr = MemoryManager::with_capacity(20).unwrap();
    mgr.allocate(pid('A'), 4, Strategy::First);
    mgr.allocate(pid('B'), 4, Strategy::First);
    mgr.allocate(pid('C'), 4, Strategy::First);
    mgr.deallocate(pid('B'));

    let stats = mgr.stats();
    assert_eq!(stats.used_slots, 8);
    assert_eq!(stats.free_slots, 12);
    assert_eq!(stats.process_count, 2);
    assert_eq!(stats.hole_count, 2);
    assert_eq!(stats.largest_hole, 8);
    assert!((stats.usage_percentage - 40.0).abs() < 1e-9);
    assert!((stats.fragmentation - (1.0 - 8.0 / 12.0)).abs() < 1e-9);
}
