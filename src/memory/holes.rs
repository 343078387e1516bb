/*!
 * Hole Finder
 * Address-ordered scan for runs of free slots
 */

use super::space::AddressSpace;
use super::types::Hole;
use crate::core::types::{Address, Size, Tag};
use std::iter::FusedIterator;

/// Lazy, address-ascending iterator over holes of at least `min_size` slots
///
/// Borrows the space, so it cannot outlive a mutation. Call [`find_holes`]
/// again to restart the scan.
#[derive(Debug, Clone)]
pub struct Holes<'a> {
    slots: &'a [Tag],
    cursor: Address,
    min_size: Size,
}

/// Scan `space` for maximal FREE runs with `len >= min_size`
///
/// A `min_size` of zero is treated as one: holes are never empty.
pub fn find_holes(space: &AddressSpace, min_size: Size) -> Holes<'_> {
    Holes {
        slots: space.slots(),
        cursor: 0,
        min_size: min_size.max(1),
    }
}

impl Iterator for Holes<'_> {
    type Item = Hole;

    fn next(&mut self) -> Option<Hole> {
        while self.cursor < self.slots.len() {
            let start = self.cursor;
            let run = self.slots[start..]
                .iter()
                .take_while(|t| t.is_free())
                .count();

            if run == 0 {
                // Skip the occupied run in one step
                self.cursor += self.slots[start..]
                    .iter()
                    .take_while(|t| !t.is_free())
                    .count();
                continue;
            }

            self.cursor = start + run;
            let hole = Hole::new(start, run);
            if hole.fits(self.min_size) {
                return Some(hole);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.slots.len() - self.cursor;
        (0, Some(remaining.div_ceil(2)))
    }
}

impl FusedIterator for Holes<'_> {}
