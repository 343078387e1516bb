/*!
 * Core Types
 * Common types used across the simulator
 */

use super::limits::FREE_GLYPH;
use crate::memory::{MemoryError, MemoryResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Address type for slots in the pool
pub type Address = usize;

/// Size type for slot counts
pub type Size = usize;

/// Single-character process identifier
///
/// Any printable, non-whitespace character except the FREE glyph is accepted,
/// so a rendered pool is always unambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct ProcessId(char);

impl ProcessId {
    pub fn new(id: char) -> MemoryResult<Self> {
        if id == FREE_GLYPH || id.is_whitespace() || id.is_control() {
            return Err(MemoryError::InvalidProcessId(id));
        }
        Ok(Self(id))
    }

    #[inline]
    pub fn as_char(self) -> char {
        self.0
    }
}

impl TryFrom<char> for ProcessId {
    type Error = MemoryError;

    fn try_from(id: char) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl From<ProcessId> for char {
    fn from(pid: ProcessId) -> Self {
        pid.0
    }
}

impl FromStr for ProcessId {
    type Err = MemoryError;

    /// Parses a token that must be exactly one character long
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(id), None) => Self::new(id),
            (Some(id), Some(_)) => Err(MemoryError::InvalidProcessId(id)),
            (None, _) => Err(MemoryError::InvalidProcessId(FREE_GLYPH)),
        }
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Slot tag: either free or owned by a process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "owner")]
pub enum Tag {
    #[default]
    Free,
    Owned(ProcessId),
}

impl Tag {
    #[inline]
    pub fn is_free(self) -> bool {
        matches!(self, Tag::Free)
    }

    #[inline]
    pub fn is_owned_by(self, pid: ProcessId) -> bool {
        self == Tag::Owned(pid)
    }

    #[inline]
    pub fn owner(self) -> Option<ProcessId> {
        match self {
            Tag::Free => None,
            Tag::Owned(pid) => Some(pid),
        }
    }

    /// Glyph used when rendering the pool
    #[inline]
    pub fn glyph(self) -> char {
        match self {
            Tag::Free => FREE_GLYPH,
            Tag::Owned(pid) => pid.as_char(),
        }
    }
}

impl From<ProcessId> for Tag {
    fn from(pid: ProcessId) -> Self {
        Tag::Owned(pid)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
