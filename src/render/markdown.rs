//! Markdown renderer.
//!
//! Prose is written as-is and code chunks are wrapped in a configurable
//! fence pair. With the default Documenter-style `@example` fence, chunks
//! whose statement spans a chunk break are tagged `continued = true` so the
//! documentation build evaluates them together.

use crate::core::{Chunk, Target};
use crate::error::Result;
use crate::render::Renderer;
use serde::Serialize;

/// Opening fence prefix of an executable example block.
pub const EXAMPLE_FENCE: &str = "```@example";

/// Suffix appended to an example fence of a continued chunk.
pub const CONTINUED_SUFFIX: &str = "; continued = true";

/// Opening and closing delimiters of a markdown code block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeFence {
    /// Opening fence line.
    pub open: String,
    /// Closing fence line.
    pub close: String,
}

impl CodeFence {
    /// Creates a fence pair.
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// The default fence: an executable example block keyed by `name`.
    #[must_use]
    pub fn example(name: &str) -> Self {
        Self::new(format!("{EXAMPLE_FENCE} {name}"), "```")
    }

    /// True if the opening fence is an executable example fence.
    #[must_use]
    pub fn is_example(&self) -> bool {
        self.open.starts_with(EXAMPLE_FENCE)
    }
}

/// Renders chunks as markdown.
///
/// # Examples
///
/// ```
/// use literate_rs::chunking::parse;
/// use literate_rs::render::{CodeFence, render_markdown};
///
/// let chunks = parse("#' Hello\nx = 1\n");
/// let md = render_markdown(&chunks, &CodeFence::new("```julia", "```"));
/// assert_eq!(md, "Hello\n\n```julia\nx = 1\n```\n\n");
/// ```
#[must_use]
pub fn render_markdown(chunks: &[Chunk], fence: &CodeFence) -> String {
    let mut out = String::new();
    for chunk in chunks {
        if chunk.is_code() {
            out.push_str(&fence.open);
            if chunk.is_continued() && fence.is_example() {
                out.push_str(CONTINUED_SUFFIX);
            }
            out.push('\n');
        }
        for line in chunk.lines() {
            out.push_str(line);
            out.push('\n');
        }
        if chunk.is_code() {
            out.push_str(&fence.close);
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

/// [`Renderer`] for markdown documents.
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    fence: CodeFence,
}

impl MarkdownRenderer {
    /// Creates a renderer using `fence` around code blocks.
    #[must_use]
    pub const fn new(fence: CodeFence) -> Self {
        Self { fence }
    }

    /// Returns the fence pair.
    #[must_use]
    pub const fn fence(&self) -> &CodeFence {
        &self.fence
    }
}

impl Renderer for MarkdownRenderer {
    fn target(&self) -> Target {
        Target::Markdown
    }

    fn render(&self, chunks: &[Chunk]) -> Result<String> {
        Ok(render_markdown(chunks, &self.fence))
    }
}
