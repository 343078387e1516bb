/*!
 * Error Types
 * Centralized error handling with thiserror and miette
 */

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

// Re-export MemoryError from memory module
pub use crate::memory::MemoryError;

// Re-export CommandError from shell module
pub use crate::shell::CommandError;

/// Unified simulator error type with miette diagnostics
#[derive(Error, Debug, Diagnostic)]
pub enum SimulatorError {
    #[error("Memory error: {0}")]
    #[diagnostic(transparent)]
    Memory(#[from] MemoryError),

    #[error("Command error: {0}")]
    #[diagnostic(transparent)]
    Command(#[from] CommandError),

    #[error("Cannot read script {}: {reason}", .path.display())]
    #[diagnostic(
        code(shell::script_unreadable),
        help("Check the path names a readable file; scripts are resolved relative to the working directory.")
    )]
    ScriptUnreadable { path: PathBuf, reason: String },

    #[error("Script nesting exceeds {limit} levels")]
    #[diagnostic(
        code(shell::script_depth_exceeded),
        help("A script probably reads itself. Remove the recursive `R` command.")
    )]
    ScriptDepthExceeded { limit: usize },

    #[error("I/O error: {0}")]
    #[diagnostic(
        code(simulator::io_error),
        help("Reading input or writing output failed.")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(simulator::configuration_error),
        help("Invalid configuration. Review command line flags and ALLOCATOR_* variables.")
    )]
    Configuration(String),
}

impl SimulatorError {
    /// Errors after which the session cannot continue
    pub fn is_fatal(&self) -> bool {
        matches!(self, SimulatorError::Io(_) | SimulatorError::Configuration(_))
    }
}

/// Result type for simulator operations
pub type Result<T> = std::result::Result<T, SimulatorError>;
