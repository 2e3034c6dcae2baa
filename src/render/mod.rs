//! Renderers for the three output targets.
//!
//! Each renderer turns a chunk sequence into the text of one artifact. The
//! free functions are the pure transforms; the [`Renderer`] trait lets the
//! generation pipeline treat all three uniformly.

pub mod markdown;
pub mod notebook;
pub mod script;

pub use markdown::{CodeFence, MarkdownRenderer, render_markdown};
pub use notebook::{Cell, Notebook, NotebookRenderer, NotebookRuntime, render_notebook};
pub use script::{ScriptRenderer, render_script};

use crate::core::{Chunk, Target};
use crate::error::Result;

/// Trait for turning chunks into the text of an output artifact.
///
/// # Examples
///
/// ```
/// use literate_rs::chunking::chunk;
/// use literate_rs::core::Target;
/// use literate_rs::render::{Renderer, ScriptRenderer};
///
/// let renderer = ScriptRenderer;
/// let chunks = chunk("#' Intro\nx = 1\n", renderer.target(), "demo");
/// assert_eq!(renderer.render(&chunks).unwrap(), "x = 1\n\n");
/// ```
pub trait Renderer {
    /// The target this renderer produces.
    fn target(&self) -> Target;

    /// Renders the chunks.
    ///
    /// # Errors
    ///
    /// Returns an error only if the output encoding fails.
    fn render(&self, chunks: &[Chunk]) -> Result<String>;

    /// File extension of the rendered artifact.
    fn extension(&self) -> &'static str {
        self.target().extension()
    }
}
