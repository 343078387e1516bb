/*!
 * Memory Types
 * Common types for the simulated memory pool
 */

use crate::core::limits::{
    PRESSURE_CRITICAL_THRESHOLD, PRESSURE_HIGH_THRESHOLD, PRESSURE_MEDIUM_THRESHOLD,
};
use crate::core::types::{Address, ProcessId, Size, Tag};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Memory operation result
pub type MemoryResult<T> = Result<T, MemoryError>;

/// Memory errors
///
/// An allocation that cannot be placed is not an error; see [`Strategy`].
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Diagnostic)]
#[serde(rename_all = "snake_case", tag = "error", content = "details")]
pub enum MemoryError {
    #[error("Memory pool size must be greater than zero")]
    #[diagnostic(
        code(memory::empty_pool),
        help("Pass a positive pool size, e.g. `allocator 80`.")
    )]
    EmptyPool,

    #[error("Failed to reserve backing storage for {requested} slots")]
    #[diagnostic(
        code(memory::storage_exhausted),
        help("The host could not provide a buffer this large. Use a smaller pool.")
    )]
    StorageExhausted { requested: Size },

    #[error("Address {index} is out of range for a pool of {len} slots")]
    #[diagnostic(code(memory::index_out_of_range))]
    IndexOutOfRange { index: Address, len: Size },

    #[error("Invalid range [{start}, {end}) for a pool of {len} slots")]
    #[diagnostic(
        code(memory::invalid_range),
        help("Ranges are half-open and must satisfy start <= end <= pool size.")
    )]
    InvalidRange { start: Address, end: Address, len: Size },

    #[error("Invalid process identifier {0:?}")]
    #[diagnostic(
        code(memory::invalid_process_id),
        help("Process identifiers are a single printable character other than '.'.")
    )]
    InvalidProcessId(char),
}

/// Placement strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// First hole, in address order, that is large enough
    First,
    /// Smallest hole that is large enough
    Best,
    /// Largest hole
    Worst,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::First, Strategy::Best, Strategy::Worst];
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Strategy::First => write!(f, "first-fit"),
            Strategy::Best => write!(f, "best-fit"),
            Strategy::Worst => write!(f, "worst-fit"),
        }
    }
}

/// Maximal run of FREE slots
///
/// Holes are computed on demand and describe the pool only until its next mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hole {
    pub start: Address,
    pub len: Size,
}

impl Hole {
    pub fn new(start: Address, len: Size) -> Self {
        Self { start, len }
    }

    /// One past the last address of the hole
    #[inline]
    pub fn end(&self) -> Address {
        self.start + self.len
    }

    #[inline]
    pub fn fits(&self, size: Size) -> bool {
        self.len >= size
    }
}

/// Maximal run of slots sharing one tag, bounds inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub start: Address,
    pub end: Address,
    pub tag: Tag,
}

impl Region {
    #[inline]
    pub fn len(&self) -> Size {
        self.end - self.start + 1
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Memory allocation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementRequest {
    pub pid: ProcessId,
    pub size: Size,
    pub strategy: Strategy,
}

impl PlacementRequest {
    pub fn new(pid: ProcessId, size: Size) -> Self {
        Self {
            pid,
            size,
            strategy: Strategy::First,
        }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// Outcome of a compaction run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompactionStats {
    /// Full left-to-right passes, including the final pass that changed nothing
    pub passes: usize,
    /// Single-slot swaps performed
    pub moved: usize,
}

/// Memory statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryStats {
    pub total_slots: Size,
    pub used_slots: Size,
    pub free_slots: Size,
    pub usage_percentage: f64,
    pub process_count: usize,
    pub hole_count: usize,
    pub largest_hole: Size,
    /// 1 - largest_hole / free_slots, 0 when nothing is free
    pub fragmentation: f64,
}

impl MemoryStats {
    pub fn memory_pressure(&self) -> MemoryPressure {
        MemoryPressure::from_ratio(self.usage_percentage / 100.0)
    }
}

/// Memory pressure levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MemoryPressure {
    Low,
    Medium,
    High,
    Critical,
}

impl MemoryPressure {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= PRESSURE_CRITICAL_THRESHOLD {
            MemoryPressure::Critical
        } else if ratio >= PRESSURE_HIGH_THRESHOLD {
            MemoryPressure::High
        } else if ratio >= PRESSURE_MEDIUM_THRESHOLD {
            MemoryPressure::Medium
        } else {
            MemoryPressure::Low
        }
    }
}

impl fmt::Display for MemoryPressure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MemoryPressure::Low => write!(f, "LOW"),
            MemoryPressure::Medium => write!(f, "MEDIUM"),
            MemoryPressure::High => write!(f, "HIGH"),
            MemoryPressure::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Slots held by one process
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessAllocation {
    pub pid: ProcessId,
    pub slots: Size,
    /// Contiguous runs owned by the process, bounds inclusive
    pub regions: Vec<Region>,
}
