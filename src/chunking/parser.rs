//! Chunk parser.
//!
//! Splits directive-filtered text into an ordered sequence of prose and code
//! chunks. The grammar is line based:
//!
//! - `#'` starts (or continues) a prose chunk; the `#' ` prefix is stripped,
//! - `#-` forces a chunk break without changing the chunk type,
//! - every other line is code and is kept verbatim.
//!
//! Malformed marker sequences never fail: empty chunks produced along the way
//! are dropped during cleanup.

use crate::core::{Chunk, ChunkKind};

/// Marks a prose line.
pub const PROSE_MARKER: &str = "#'";

/// Forces a chunk break.
pub const BREAK_MARKER: &str = "#-";

/// Parses filtered content into chunks.
///
/// # Examples
///
/// ```
/// use literate_rs::chunking::parse;
/// use literate_rs::core::Chunk;
///
/// let chunks = parse("#' Hello\nx = 1\n");
/// assert_eq!(chunks, vec![
///     Chunk::prose(vec!["Hello".to_string()]),
///     Chunk::code(vec!["x = 1".to_string()]),
/// ]);
/// ```
#[must_use]
pub fn parse(content: &str) -> Vec<Chunk> {
    let Some(first) = content.lines().next() else {
        return Vec::new();
    };

    let mut chunks = vec![Chunk::empty(kind_of(first))];

    for line in content.lines() {
        let current = chunks.last().map_or(ChunkKind::Code, Chunk::kind);

        if line.starts_with(BREAK_MARKER) {
            chunks.push(Chunk::empty(current));
            continue;
        }

        let kind = kind_of(line);
        let text = match kind {
            ChunkKind::Prose => strip_prose_marker(line),
            ChunkKind::Code => line,
        };
        if kind != current {
            chunks.push(Chunk::empty(kind));
        }
        if let Some(chunk) = chunks.last_mut() {
            chunk.lines_mut().push(text.to_string());
        }
    }

    cleanup(&mut chunks);
    mark_continuations(&mut chunks);
    chunks
}

fn kind_of(line: &str) -> ChunkKind {
    if line.starts_with(PROSE_MARKER) {
        ChunkKind::Prose
    } else {
        ChunkKind::Code
    }
}

/// Strips `#' ` from a prose line, or reduces a bare `#'` to an empty line.
fn strip_prose_marker(line: &str) -> &str {
    if line == PROSE_MARKER {
        ""
    } else {
        line.strip_prefix("#' ").unwrap_or(line)
    }
}

/// Drops empty and blank chunks, then trims empty edge lines.
fn cleanup(chunks: &mut Vec<Chunk>) {
    chunks.retain(|c| !c.is_empty() && !c.is_blank());
    for chunk in chunks.iter_mut() {
        chunk.trim();
    }
}

fn starts_with_whitespace(line: Option<&str>) -> bool {
    line.and_then(|l| l.chars().next())
        .is_some_and(char::is_whitespace)
}

/// Sets `continued` on code chunks whose statement spans a chunk break.
///
/// A code chunk is continued when its first or last line is indented, when
/// the previous code chunk ended indented, or when the next code chunk starts
/// indented.
fn mark_continuations(chunks: &mut [Chunk]) {
    let mut previous: Option<usize> = None;

    for i in 0..chunks.len() {
        if !chunks[i].is_code() {
            continue;
        }

        let opens = starts_with_whitespace(chunks[i].first_line());
        let closes = starts_with_whitespace(chunks[i].last_line());
        let after_open = previous.is_some_and(|p| starts_with_whitespace(chunks[p].last_line()));

        if closes || opens || after_open {
            chunks[i].set_continued(true);
        }
        if opens && let Some(p) = previous {
            chunks[p].set_continued(true);
        }

        previous = Some(i);
    }
}
