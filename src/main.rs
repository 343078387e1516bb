/*!
 * Allocator - Main Entry Point
 *
 * Interactive contiguous memory allocation simulator:
 * - First, best, and worst fit placement
 * - Process-scoped deallocation
 * - Compaction
 */

use clap::Parser;
use contiguous_allocator::shell::Flow;
use contiguous_allocator::{init_tracing, MemoryManager, Shell, SimulatorConfig};
use std::io;
use tracing::info;

fn main() -> miette::Result<()> {
    let config = SimulatorConfig::parse();
    init_tracing(&config.log_level, config.trace_json);
    config.validate()?;

    info!(
        pool_size = config.pool_size,
        width = config.width,
        "Allocator starting"
    );

    let manager = MemoryManager::with_capacity(config.pool_size)?;
    let script = config.script.clone();

    let stdin = io::stdin();
    let mut shell = Shell::new(manager, config, io::stdout(), io::stderr());

    if let Some(path) = script {
        info!(path = %path.display(), "Running startup script");
        if shell.run_script(&path)? == Flow::Exit {
            return Ok(());
        }
    }

    shell.run(stdin.lock(), true)?;
    info!("Allocator exiting");
    Ok(())
}
