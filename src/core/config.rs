/*!
 * Configuration
 * Command line flags with ALLOCATOR_* environment fallbacks
 */

use super::errors::{Result, SimulatorError};
use super::limits::{DEFAULT_LINE_WIDTH, DEFAULT_LOG_LEVEL, DEFAULT_PROMPT};
use crate::core::types::Size;
use clap::Parser;
use std::path::PathBuf;

/// Contiguous memory allocation simulator
#[derive(Parser, Debug, Clone)]
#[command(name = "allocator")]
#[command(about = "Simulate first, best, and worst fit allocation with compaction")]
pub struct SimulatorConfig {
    /// Number of slots in the memory pool
    #[arg(value_name = "MEMORY POOL SIZE", env = "ALLOCATOR_POOL_SIZE")]
    pub pool_size: Size,

    /// Script to run before reading commands from stdin
    #[arg(long, env = "ALLOCATOR_SCRIPT")]
    pub script: Option<PathBuf>,

    /// Longest accepted command line and wrap width for SHOW
    #[arg(long, default_value_t = DEFAULT_LINE_WIDTH, env = "ALLOCATOR_LINE_WIDTH")]
    pub width: usize,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = DEFAULT_LOG_LEVEL, env = "ALLOCATOR_LOG")]
    pub log_level: String,

    /// Emit logs as JSON
    #[arg(long, env = "ALLOCATOR_TRACE_JSON")]
    pub trace_json: bool,

    /// Prompt printed before each interactive command
    #[arg(long, default_value = DEFAULT_PROMPT, env = "ALLOCATOR_PROMPT")]
    pub prompt: String,
}

impl SimulatorConfig {
    pub fn new(pool_size: Size) -> Self {
        Self {
            pool_size,
            script: None,
            width: DEFAULT_LINE_WIDTH,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            trace_json: false,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Reject settings the shell cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(SimulatorError::Configuration(
                "line width must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}
