/*!
 * Rendering
 * Text and JSON views of the pool for SHOW, STAT, and DUMP
 */

use crate::core::types::{ProcessId, Tag};
use crate::memory::{MemoryStats, Region};
use serde::Serialize;
use std::fmt::Write as _;

/// Pool glyphs wrapped every `width` slots, terminated by a newline
///
/// A pool whose size is a multiple of `width` ends with an empty line.
pub fn render_pool(tags: &[Tag], width: usize) -> String {
    let width = width.max(1);
    let mut out = String::with_capacity(tags.len() + tags.len() / width + 1);
    for (i, tag) in tags.iter().enumerate() {
        out.push(tag.glyph());
        if (i + 1) % width == 0 {
            out.push('\n');
        }
    }
    out.push('\n');
    out
}

/// One line per region followed by a blank line
pub fn render_stat(regions: &[Region]) -> String {
    let mut out = String::new();
    for region in regions {
        // Writing to a String cannot fail
        let _ = match region.tag {
            Tag::Free => writeln!(
                out,
                "\taddresses [{}:{}] - unallocated",
                region.start, region.end
            ),
            Tag::Owned(pid) => writeln!(
                out,
                "\taddresses [{}:{}] - process {}",
                region.start, region.end, pid
            ),
        };
    }
    out.push('\n');
    out
}

/// Machine-readable report printed by DUMP
#[derive(Debug, Serialize)]
pub struct PoolReport<'a> {
    pub stats: MemoryStats,
    pub pressure: String,
    pub processes: Vec<ProcessId>,
    pub regions: &'a [Region],
}

pub fn render_dump(report: &PoolReport<'_>) -> serde_json::Result<String> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}
