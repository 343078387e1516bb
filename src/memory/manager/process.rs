/*!
 * Process Memory Operations
 * Process-scoped release and per-process reporting
 */

use super::super::stats;
use super::super::types::ProcessAllocation;
use super::MemoryManager;
use crate::core::types::{ProcessId, Size};
use tracing::{debug, info};

impl MemoryManager {
    /// Free every slot owned by `pid`, returning how many were freed
    ///
    /// Unknown processes are a no-op. Freed slots merge with neighbouring
    /// holes implicitly since FREE slots carry no history.
    pub fn deallocate(&mut self, pid: ProcessId) -> Size {
        let freed = self.space.release(pid);

        if freed > 0 {
            let (_, _, available) = self.info();
            info!(
                "Freed {} slots from process {} ({} slots now available)",
                freed, pid, available
            );
        } else {
            debug!(pid = %pid, "Deallocate of process with no slots");
        }

        freed
    }

    /// Slots currently owned by `pid`
    pub fn process_memory(&self, pid: ProcessId) -> Size {
        self.space.count_owned_by(pid)
    }

    /// Contiguous runs owned by `pid`
    pub fn process_allocations(&self, pid: ProcessId) -> ProcessAllocation {
        stats::process_allocation(&self.space, pid)
    }

    /// Processes holding memory, ordered by lowest address
    pub fn processes(&self) -> Vec<ProcessId> {
        self.space.processes()
    }
}
