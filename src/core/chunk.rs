//! Chunk representation.
//!
//! A chunk is a contiguous block of lines from a literate source that is
//! either prose (markdown text) or code. Chunks are produced by the parser,
//! never edited after cleanup, and consumed once by a renderer.

use serde::Serialize;

/// A typed block of lines.
///
/// # Examples
///
/// ```
/// use literate_rs::core::Chunk;
///
/// let chunk = Chunk::code(vec!["x = 1".to_string()]);
/// assert!(chunk.is_code());
/// assert!(!chunk.is_continued());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Chunk {
    /// Markdown text with the `#'` prefix already stripped.
    Prose {
        /// Lines of the chunk.
        lines: Vec<String>,
    },
    /// Verbatim source lines.
    Code {
        /// Lines of the chunk.
        lines: Vec<String>,
        /// Whether a statement in this chunk spans a chunk break.
        continued: bool,
    },
}

/// The variant of a chunk, without its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkKind {
    /// Prose chunk.
    Prose,
    /// Code chunk.
    Code,
}

impl Chunk {
    /// Creates a prose chunk.
    #[must_use]
    pub const fn prose(lines: Vec<String>) -> Self {
        Self::Prose { lines }
    }

    /// Creates a code chunk that is not continued.
    #[must_use]
    pub const fn code(lines: Vec<String>) -> Self {
        Self::Code {
            lines,
            continued: false,
        }
    }

    /// Creates an empty chunk of the given kind.
    #[must_use]
    pub const fn empty(kind: ChunkKind) -> Self {
        match kind {
            ChunkKind::Prose => Self::prose(Vec::new()),
            ChunkKind::Code => Self::code(Vec::new()),
        }
    }

    /// Returns the kind of this chunk.
    #[must_use]
    pub const fn kind(&self) -> ChunkKind {
        match self {
            Self::Prose { .. } => ChunkKind::Prose,
            Self::Code { .. } => ChunkKind::Code,
        }
    }

    /// Returns true for prose chunks.
    #[must_use]
    pub const fn is_prose(&self) -> bool {
        matches!(self, Self::Prose { .. })
    }

    /// Returns true for code chunks.
    #[must_use]
    pub const fn is_code(&self) -> bool {
        matches!(self, Self::Code { .. })
    }

    /// Returns the lines of the chunk.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        match self {
            Self::Prose { lines } | Self::Code { lines, .. } => lines,
        }
    }

    pub(crate) fn lines_mut(&mut self) -> &mut Vec<String> {
        match self {
            Self::Prose { lines } | Self::Code { lines, .. } => lines,
        }
    }

    /// Returns the continuation flag. Always false for prose.
    #[must_use]
    pub const fn is_continued(&self) -> bool {
        match self {
            Self::Prose { .. } => false,
            Self::Code { continued, .. } => *continued,
        }
    }

    /// Sets the continuation flag. No-op on prose chunks.
    pub fn set_continued(&mut self, value: bool) {
        if let Self::Code { continued, .. } = self {
            *continued = value;
        }
    }

    /// Number of lines in the chunk.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines().len()
    }

    /// True if the chunk holds no lines at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines().is_empty()
    }

    /// True if every line is the empty string (vacuously true when empty).
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.lines().iter().all(String::is_empty)
    }

    /// First line, if any.
    #[must_use]
    pub fn first_line(&self) -> Option<&str> {
        self.lines().first().map(String::as_str)
    }

    /// Last line, if any.
    #[must_use]
    pub fn last_line(&self) -> Option<&str> {
        self.lines().last().map(String::as_str)
    }

    /// Removes leading and trailing empty lines.
    pub(crate) fn trim(&mut self) {
        let lines = self.lines_mut();
        let end = lines.iter().rposition(|l| !l.is_empty()).map_or(0, |i| i + 1);
        lines.truncate(end);
        let start = lines.iter().position(|l| !l.is_empty()).unwrap_or(0);
        lines.drain(..start);
    }
}
