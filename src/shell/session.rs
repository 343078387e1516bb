/*!
 * Shell Session
 * Executes parsed commands against one memory manager
 */

use super::command::Command;
use super::render::{render_dump, render_pool, render_stat, PoolReport};
use crate::core::config::SimulatorConfig;
use crate::core::errors::{Result, SimulatorError};
use crate::core::limits::{CLEAR_SEQUENCE, MAX_SCRIPT_DEPTH};
use crate::memory::MemoryManager;
use crate::monitoring::span_operation;
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{debug, warn};

/// Whether the session keeps reading commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Command interpreter bound to one pool
///
/// Command output goes to `out`; parse and script errors are reported on `err`
/// and do not end the session.
pub struct Shell<W: Write, E: Write> {
    manager: MemoryManager,
    config: SimulatorConfig,
    out: W,
    err: E,
    depth: usize,
}

impl<W: Write, E: Write> Shell<W, E> {
    pub fn new(manager: MemoryManager, config: SimulatorConfig, out: W, err: E) -> Self {
        Self {
            manager,
            config,
            out,
            err,
            depth: 0,
        }
    }

    pub fn manager(&self) -> &MemoryManager {
        &self.manager
    }

    pub fn into_parts(self) -> (MemoryManager, W, E) {
        (self.manager, self.out, self.err)
    }

    /// Execute one parsed command
    pub fn execute(&mut self, command: Command) -> Result<Flow> {
        debug!(?command, depth = self.depth, "Executing command");

        match command {
            Command::Allocate(request) => {
                // Unplaceable requests print nothing; the manager logs them
                self.manager
                    .allocate(request.pid, request.size, request.strategy);
            }
            Command::Free(pid) => {
                self.manager.deallocate(pid);
            }
            Command::Show => {
                let text = render_pool(self.manager.space().slots(), self.config.width);
                self.out.write_all(text.as_bytes())?;
            }
            Command::Stat => {
                let text = render_stat(&self.manager.regions());
                self.out.write_all(text.as_bytes())?;
            }
            Command::Compact => {
                self.manager.compact();
            }
            Command::Clear => {
                self.out.write_all(CLEAR_SEQUENCE.as_bytes())?;
            }
            Command::Run(path) => return self.run_script(&path),
            Command::Dump => {
                let regions = self.manager.regions();
                let stats = self.manager.stats();
                let report = PoolReport {
                    pressure: stats.memory_pressure().to_string(),
                    stats,
                    processes: self.manager.processes(),
                    regions: &regions,
                };
                let json = render_dump(&report).map_err(std::io::Error::from)?;
                self.out.write_all(json.as_bytes())?;
            }
            Command::Exit => return Ok(Flow::Exit),
        }

        self.out.flush()?;
        Ok(Flow::Continue)
    }

    /// Parse and execute one line
    pub fn execute_line(&mut self, line: &str) -> Result<Flow> {
        match Command::parse_line(line)? {
            Some(command) => self.execute(command),
            None => Ok(Flow::Continue),
        }
    }

    /// Execute commands from `input` until EXIT or end of input
    ///
    /// With `interactive` set, the prompt is printed before each line. Input is
    /// read as raw bytes; invalid UTF-8 is replaced rather than rejected, so a
    /// stray byte yields an unknown command instead of ending the session.
    pub fn run<R: BufRead>(&mut self, mut input: R, interactive: bool) -> Result<Flow> {
        let mut line = Vec::new();

        loop {
            if interactive {
                self.out.write_all(self.config.prompt.as_bytes())?;
                self.out.flush()?;
            }

            line.clear();
            if input.read_until(b'\n', &mut line)? == 0 {
                return Ok(Flow::Continue);
            }

            let decoded = String::from_utf8_lossy(&line);
            let text = truncate(decoded.trim_end_matches(['\r', '\n']), self.config.width);
            match self.execute_line(text) {
                Ok(Flow::Exit) => return Ok(Flow::Exit),
                Ok(Flow::Continue) => {}
                Err(e) if self.aborts(&e) => return Err(e),
                Err(e) => self.report(&e)?,
            }
        }
    }

    /// Run a script file; EXIT inside it ends the whole session
    ///
    /// The file is read in full before any command runs. A path that cannot be
    /// read (missing, a directory, no permission) is a non-fatal error.
    pub fn run_script(&mut self, path: &Path) -> Result<Flow> {
        if self.depth >= MAX_SCRIPT_DEPTH {
            return Err(SimulatorError::ScriptDepthExceeded {
                limit: MAX_SCRIPT_DEPTH,
            });
        }

        let contents = fs::read(path).map_err(|e| SimulatorError::ScriptUnreadable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let span = span_operation("script");
        let _entered = span.enter();
        debug!(path = %path.display(), depth = self.depth, "Running script");

        self.depth += 1;
        let result = self.run(contents.as_slice(), false);
        self.depth -= 1;

        span.record_result(result.is_ok());
        result
    }

    /// Errors that stop the current input source instead of being reported
    fn aborts(&self, error: &SimulatorError) -> bool {
        error.is_fatal()
            || (self.depth > 0 && matches!(error, SimulatorError::ScriptDepthExceeded { .. }))
    }

    fn report(&mut self, error: &SimulatorError) -> Result<()> {
        warn!(error = %error, "Command failed");
        writeln!(self.err, "Error: {}", error)?;
        self.err.flush()?;
        Ok(())
    }
}

/// First `width` characters of `line`
fn truncate(line: &str, width: usize) -> &str {
    match line.char_indices().nth(width) {
        Some((idx, _)) => &line[..idx],
        None => line,
    }
}
