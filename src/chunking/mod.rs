//! Directive filtering and chunk parsing.
//!
//! Turning a literate source into chunks is a two-phase process: the
//! [`filter`] applies the directive rules of one output target, then
//! [`parse`] splits the filtered text into prose and code chunks. The phases
//! stay separate so each target can share the parser.

pub mod filter;
pub mod parser;

pub use filter::{NAME_PLACEHOLDER, filter};
pub use parser::{BREAK_MARKER, PROSE_MARKER, parse};

use crate::core::{Chunk, Target};

/// Filters `content` for `target` and parses the result.
#[must_use]
pub fn chunk(content: &str, target: Target, name: &str) -> Vec<Chunk> {
    parse(&filter(content, target, name))
}
