/*!
 * System Limits and Constants
 *
 * Centralized location for the simulator's limits, thresholds, and magic numbers.
 */

use std::time::Duration;

// =============================================================================
// POOL
// =============================================================================

/// Glyph printed for a FREE slot
pub const FREE_GLYPH: char = '.';

/// Usage ratio at which memory pressure is reported as medium
pub const PRESSURE_MEDIUM_THRESHOLD: f64 = 0.60;

/// Usage ratio at which memory pressure is reported as high
pub const PRESSURE_HIGH_THRESHOLD: f64 = 0.80;

/// Usage ratio at which memory pressure is reported as critical
pub const PRESSURE_CRITICAL_THRESHOLD: f64 = 0.95;

// =============================================================================
// SHELL
// =============================================================================

/// Default terminal width: longest accepted command line and wrap width for SHOW
pub const DEFAULT_LINE_WIDTH: usize = 80;

/// Default REPL prompt
pub const DEFAULT_PROMPT: &str = "allocator> ";

/// Maximum nesting of `R <file>` commands
/// Stops a script that reads itself from recursing forever
pub const MAX_SCRIPT_DEPTH: usize = 16;

/// Terminal clear sequence emitted by CLEAR (reset + scrollback wipe)
pub const CLEAR_SEQUENCE: &str = "\x1bc\x1b[3J";

// =============================================================================
// MONITORING
// =============================================================================

/// Operations slower than this are logged at warn level
pub const SLOW_OPERATION_THRESHOLD: Duration = Duration::from_millis(100);

/// Default log filter when RUST_LOG is unset
pub const DEFAULT_LOG_LEVEL: &str = "warn";
