/*!
 * Address Space
 * Fixed-length, tag-per-slot buffer backing the simulated pool
 */

use super::types::{MemoryError, MemoryResult};
use crate::core::limits::FREE_GLYPH;
use crate::core::types::{Address, ProcessId, Size, Tag};
use std::collections::BTreeSet;

/// Fixed-length sequence of tagged slots
///
/// The length is set at construction and never changes. All mutation goes
/// through range-checked methods; out-of-range writes are rejected, not clamped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressSpace {
    slots: Box<[Tag]>,
}

impl AddressSpace {
    /// Create a pool of `size` FREE slots
    pub fn new(size: Size) -> MemoryResult<Self> {
        if size == 0 {
            return Err(MemoryError::EmptyPool);
        }

        let mut slots = Vec::new();
        slots
            .try_reserve_exact(size)
            .map_err(|_| MemoryError::StorageExhausted { requested: size })?;
        slots.resize(size, Tag::Free);

        Ok(Self {
            slots: slots.into_boxed_slice(),
        })
    }

    /// Build a space from a rendered pool such as `"AA..B"`
    pub fn from_glyphs(pattern: &str) -> MemoryResult<Self> {
        let mut space = Self::new(pattern.chars().count())?;
        for (slot, glyph) in space.slots.iter_mut().zip(pattern.chars()) {
            if glyph != FREE_GLYPH {
                *slot = Tag::Owned(ProcessId::new(glyph)?);
            }
        }
        Ok(space)
    }

    #[inline]
    pub fn len(&self) -> Size {
        self.slots.len()
    }

    /// Always false: an address space has at least one slot
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slot_at(&self, index: Address) -> MemoryResult<Tag> {
        self.slots
            .get(index)
            .copied()
            .ok_or(MemoryError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// Set every slot in `[start, end)` to `tag`
    pub fn tag_range(&mut self, start: Address, end: Address, tag: Tag) -> MemoryResult<()> {
        let len = self.len();
        if start > end || end > len {
            return Err(MemoryError::InvalidRange { start, end, len });
        }
        self.slots[start..end].fill(tag);
        Ok(())
    }

    /// One left-to-right pass moving each occupied slot into a FREE predecessor
    ///
    /// Returns the number of swaps; zero means the space is already compacted.
    pub(crate) fn shift_pass(&mut self) -> Size {
        let mut swaps = 0;
        for i in 1..self.slots.len() {
            if self.slots[i - 1].is_free() && !self.slots[i].is_free() {
                self.slots.swap(i - 1, i);
                swaps += 1;
            }
        }
        swaps
    }

    /// Retag every slot owned by `pid` as FREE, returning the count
    pub(crate) fn release(&mut self, pid: ProcessId) -> Size {
        let mut freed = 0;
        for slot in self.slots.iter_mut().filter(|s| s.is_owned_by(pid)) {
            *slot = Tag::Free;
            freed += 1;
        }
        freed
    }

    #[inline]
    pub fn slots(&self) -> &[Tag] {
        &self.slots
    }

    pub fn iter(&self) -> impl Iterator<Item = Tag> + '_ {
        self.slots.iter().copied()
    }

    /// Length of the run of `tag` starting at `start` (0 if `start` is past the end)
    pub fn contiguous_from(&self, start: Address, tag: Tag) -> Size {
        self.slots
            .get(start..)
            .map_or(0, |rest| rest.iter().take_while(|&&s| s == tag).count())
    }

    pub fn free_count(&self) -> Size {
        self.iter().filter(|t| t.is_free()).count()
    }

    pub fn owned_count(&self) -> Size {
        self.len() - self.free_count()
    }

    pub fn count_owned_by(&self, pid: ProcessId) -> Size {
        self.iter().filter(|t| t.is_owned_by(pid)).count()
    }

    /// Distinct owners, ordered by their lowest address
    pub fn processes(&self) -> Vec<ProcessId> {
        let mut seen = BTreeSet::new();
        self.iter()
            .filter_map(Tag::owner)
            .filter(|pid| seen.insert(*pid))
            .collect()
    }

    /// One glyph per slot
    pub fn render(&self) -> String {
        self.iter().map(Tag::glyph).collect()
    }
}
