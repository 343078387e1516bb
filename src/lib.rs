/*!
 * Contiguous Allocator Library
 * Simulated memory pool with first/best/worst fit placement and compaction
 */

pub mod core;
pub mod memory;
pub mod monitoring;
pub mod shell;

// Re-exports
pub use crate::core::{ProcessId, SimulatorConfig, SimulatorError, Tag};
pub use memory::{
    AddressSpace, CompactionStats, Hole, MemoryError, MemoryManager, MemoryStats, Region,
    Strategy,
};
pub use monitoring::init_tracing;
pub use shell::{Command, Flow, Shell};
