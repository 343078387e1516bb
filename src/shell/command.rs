/*!
 * Commands
 * Parsing of textual commands into validated engine requests
 *
 * The command word is matched case-insensitively: `STAT` and `CLEAR` by
 * their full name, everything else by its first letter.
 */

use crate::core::types::{ProcessId, Size};
use crate::memory::{PlacementRequest, Strategy};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Command parse errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Diagnostic)]
#[serde(rename_all = "snake_case", tag = "error", content = "details")]
pub enum CommandError {
    #[error("{command}: missing {argument}")]
    #[diagnostic(
        code(command::missing_argument),
        help("Usage: A <process> <size> <F|B|W>, F <process>, R <file>.")
    )]
    MissingArgument { command: String, argument: String },

    #[error("Invalid allocation size {0:?}")]
    #[diagnostic(
        code(command::invalid_size),
        help("Sizes are non-negative whole numbers of slots.")
    )]
    InvalidSize(String),

    #[error("Unknown placement strategy {0:?}")]
    #[diagnostic(
        code(command::unknown_strategy),
        help("Use F (first fit), B (best fit), or W (worst fit).")
    )]
    UnknownStrategy(String),

    #[error("Invalid process name {0:?}")]
    #[diagnostic(
        code(command::invalid_process),
        help("Process names are a single printable character other than '.'.")
    )]
    InvalidProcess(String),

    #[error("Unknown command {0:?}")]
    #[diagnostic(
        code(command::unknown),
        help("Commands: A, F, S(HOW), STAT, C(OMPACT), CLEAR, R, D(UMP), E(XIT).")
    )]
    UnknownCommand(String),
}

/// Parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `A <process> <size> <strategy>`
    Allocate(PlacementRequest),
    /// `F <process>`
    Free(ProcessId),
    /// `S` / `SHOW`
    Show,
    /// `STAT`
    Stat,
    /// `C` / `COMPACT`
    Compact,
    /// `CLEAR`
    Clear,
    /// `R <file>`
    Run(PathBuf),
    /// `D` / `DUMP`
    Dump,
    /// `E` / `EXIT`
    Exit,
}

impl Command {
    /// Parse one line; blank lines yield `None`
    pub fn parse_line(line: &str) -> Result<Option<Command>, CommandError> {
        let mut tokens = line.split_whitespace();
        let Some(word) = tokens.next() else {
            return Ok(None);
        };
        let word = word.to_ascii_uppercase();

        let command = match word.as_str() {
            "STAT" => Command::Stat,
            "CLEAR" => Command::Clear,
            _ => match word.chars().next() {
                Some('A') => {
                    let pid = parse_process(&word, tokens.next())?;
                    let size = parse_size(&word, tokens.next())?;
                    let strategy = parse_strategy(&word, tokens.next())?;
                    Command::Allocate(PlacementRequest::new(pid, size).with_strategy(strategy))
                }
                Some('F') => Command::Free(parse_process(&word, tokens.next())?),
                Some('S') => Command::Show,
                Some('C') => Command::Compact,
                Some('R') => {
                    let path = tokens.next().ok_or_else(|| missing(&word, "script file"))?;
                    Command::Run(PathBuf::from(path))
                }
                Some('D') => Command::Dump,
                Some('E') => Command::Exit,
                _ => return Err(CommandError::UnknownCommand(word)),
            },
        };

        Ok(Some(command))
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::parse_line(s)?.ok_or_else(|| CommandError::UnknownCommand(String::new()))
    }
}

/// Parse a strategy token: `F`/`FIRST`, `B`/`BEST`, `W`/`WORST`
pub fn parse_strategy_token(token: &str) -> Result<Strategy, CommandError> {
    match token.to_ascii_uppercase().as_str() {
        "F" | "FIRST" => Ok(Strategy::First),
        "B" | "BEST" => Ok(Strategy::Best),
        "W" | "WORST" => Ok(Strategy::Worst),
        _ => Err(CommandError::UnknownStrategy(token.to_string())),
    }
}

fn missing(command: &str, argument: &str) -> CommandError {
    CommandError::MissingArgument {
        command: command.to_string(),
        argument: argument.to_string(),
    }
}

fn parse_process(command: &str, token: Option<&str>) -> Result<ProcessId, CommandError> {
    let token = token.ok_or_else(|| missing(command, "process name"))?;
    token
        .parse()
        .map_err(|_| CommandError::InvalidProcess(token.to_string()))
}

fn parse_size(command: &str, token: Option<&str>) -> Result<Size, CommandError> {
    let token = token.ok_or_else(|| missing(command, "size"))?;
    token
        .parse()
        .map_err(|_| CommandError::InvalidSize(token.to_string()))
}

fn parse_strategy(command: &str, token: Option<&str>) -> Result<Strategy, CommandError> {
    parse_strategy_token(token.ok_or_else(|| missing(command, "strategy"))?)
}
