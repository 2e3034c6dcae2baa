//! Script renderer.

use crate::core::{Chunk, Target};
use crate::error::Result;
use crate::render::Renderer;

/// Renders only the code chunks, separated by one blank line.
///
/// # Examples
///
/// ```
/// use literate_rs::chunking::parse;
/// use literate_rs::render::render_script;
///
/// let chunks = parse("#' Hello\nx = 1\n");
/// assert_eq!(render_script(&chunks), "x = 1\n\n");
/// ```
#[must_use]
pub fn render_script(chunks: &[Chunk]) -> String {
    let mut out = String::new();
    for chunk in chunks.iter().filter(|c| c.is_code()) {
        for line in chunk.lines() {
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

/// [`Renderer`] for plain scripts.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptRenderer;

impl Renderer for ScriptRenderer {
    fn target(&self) -> Target {
        Target::Script
    }

    fn render(&self, chunks: &[Chunk]) -> Result<String> {
        Ok(render_script(chunks))
    }
}
