/*!
 * Memory Module
 * Simulated contiguous memory pool and placement
 */

pub mod compaction;
pub mod holes;
pub mod manager;
pub mod placement;
pub mod space;
pub mod stats;
pub mod traits;
pub mod types;

// Re-export for convenience
pub use compaction::{compact, is_compacted};
pub use holes::{find_holes, Holes};
pub use manager::MemoryManager;
pub use placement::{select, BestFit, FirstFit, WorstFit};
pub use space::AddressSpace;
pub use traits::*;
pub use types::*;
