/*!
 * Compaction Tests
 * Final-state checks against a stable partition of the pool
 */

use contiguous_allocator::memory::{compact, is_compacted};
use contiguous_allocator::{AddressSpace, MemoryManager, ProcessId, Strategy, Tag};
use pretty_assertions::assert_eq;

/// Occupied slots in order followed by FREE slots
fn stable_partition(tags: &[Tag]) -> Vec<Tag> {
    let mut out: Vec<Tag> = tags.iter().copied().filter(|t| !t.is_free()).collect();
    out.resize(tags.len(), Tag::Free);
    out
}

#[test]
fn test_matches_stable_partition() {
    for pattern in [
        "..........",
        "ABCDEFGHIJ",
        ".A.B.C.D.E",
        "A.........B",
        "....AAAA....BB..",
        ".Z",
        "Z.",
    ] {
        let mut space = AddressSpace::from_glyphs(pattern).unwrap();
        let expected = stable_partition(space.slots());
        compact(&mut space);
        assert_eq!(space.slots(), expected.as_slice(), "pattern {}", pattern);
        assert!(is_compacted(&space));
    }
}

#[test]
fn test_interleaved_owners_keep_order() {
    let mut space = AddressSpace::from_glyphs(".AB.A..BA.").unwrap();
    compact(&mut space);
    assert_eq!(space.render(), "ABABA.....");
}

#[test]
fn test_compact_is_idempotent() {
    let mut space = AddressSpace::from_glyphs("..X..YY...Z").unwrap();
    compact(&mut space);
    let once = space.clone();
    let stats = compact(&mut space);

    assert_eq!(space, once);
    assert_eq!(stats.moved, 0);
    assert_eq!(stats.passes, 1);
}

#[test]
fn test_manager_compaction_preserves_process_sizes() {
    let mut mgr = MemoryManager::with_capacity(30).unwrap();
    let ids: Vec<ProcessId> = "ABCDE".chars().map(|c| ProcessId::new(c).unwrap()).collect();
    for (i, pid) in ids.iter().enumerate() {
        mgr.allocate(*pid, i + 2, Strategy::First);
    }
    mgr.deallocate(ids[1]);
    mgr.deallocate(ids[3]);

    let before: Vec<usize> = ids.iter().map(|p| mgr.process_memory(*p)).collect();
    let stats = mgr.compact();
    let after: Vec<usize> = ids.iter().map(|p| mgr.process_memory(*p)).collect();

    assert_eq!(before, after);
    assert!(stats.moved > 0);
    assert_eq!(mgr.find_free_regions(1).len(), 1);
    assert_eq!(mgr.render(), "AACCCCEEEEEE..................");
}
