//! Notebook renderer.
//!
//! Maps every chunk to one Jupyter cell. Kernel and language descriptors are
//! injected through [`NotebookRuntime`] rather than read from the process, so
//! rendering stays a pure function of its inputs.

use crate::core::{Chunk, Target};
use crate::error::Result;
use crate::render::Renderer;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Notebook format major version written by default.
pub const NBFORMAT: u32 = 4;

/// Notebook format minor version written by default.
pub const NBFORMAT_MINOR: u32 = 3;

/// Kernel and language information embedded in generated notebooks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotebookRuntime {
    /// Notebook format major version.
    pub nbformat: u32,
    /// Notebook format minor version.
    pub nbformat_minor: u32,
    /// Language name as used by the kernel (e.g. `julia`).
    pub language: String,
    /// Human readable language name (e.g. `Julia`).
    pub display_language: String,
    /// Language version string (e.g. `1.0.0`).
    pub version: String,
    /// Source file extension, including the dot.
    pub file_extension: String,
    /// Source mimetype.
    pub mimetype: String,
}

impl Default for NotebookRuntime {
    fn default() -> Self {
        Self {
            nbformat: NBFORMAT,
            nbformat_minor: NBFORMAT_MINOR,
            language: "julia".to_string(),
            display_language: "Julia".to_string(),
            version: "1.0.0".to_string(),
            file_extension: ".jl".to_string(),
            mimetype: "application/julia".to_string(),
        }
    }
}

impl NotebookRuntime {
    /// Sets the language version.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Kernel name, `<language>-<major>.<minor>`.
    #[must_use]
    pub fn kernel_name(&self) -> String {
        let short: Vec<&str> = self.version.split('.').take(2).collect();
        format!("{}-{}", self.language, short.join("."))
    }

    /// Kernel display name, `<Language> <version>`.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.display_language, self.version)
    }

    fn metadata(&self) -> NotebookMetadata {
        NotebookMetadata {
            kernelspec: KernelSpec {
                display_name: self.display_name(),
                language: self.language.clone(),
                name: self.kernel_name(),
            },
            language_info: LanguageInfo {
                file_extension: self.file_extension.clone(),
                mimetype: self.mimetype.clone(),
                name: self.language.clone(),
                version: self.version.clone(),
            },
        }
    }
}

/// A Jupyter notebook document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notebook {
    /// Cells in document order.
    pub cells: Vec<Cell>,
    /// Kernel and language metadata.
    pub metadata: NotebookMetadata,
    /// Format major version.
    pub nbformat: u32,
    /// Format minor version.
    pub nbformat_minor: u32,
}

/// A notebook cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cell_type", rename_all = "lowercase")]
pub enum Cell {
    /// A markdown cell.
    Markdown {
        /// Cell metadata, always empty.
        metadata: Map<String, Value>,
        /// Cell outputs, always empty.
        outputs: Vec<Value>,
        /// Source lines, newline-terminated except the last.
        source: Vec<String>,
    },
    /// A code cell.
    Code {
        /// Execution counter, `null` until executed.
        execution_count: Option<u64>,
        /// Cell metadata, always empty.
        metadata: Map<String, Value>,
        /// Cell outputs, empty until executed.
        outputs: Vec<Value>,
        /// Source lines, newline-terminated except the last.
        source: Vec<String>,
    },
}

impl Cell {
    fn from_chunk(chunk: &Chunk) -> Self {
        let source = cell_source(chunk.lines());
        match chunk {
            Chunk::Prose { .. } => Self::Markdown {
                metadata: Map::new(),
                outputs: Vec::new(),
                source,
            },
            Chunk::Code { .. } => Self::Code {
                execution_count: None,
                metadata: Map::new(),
                outputs: Vec::new(),
                source,
            },
        }
    }

    /// Source lines of the cell.
    #[must_use]
    pub fn source(&self) -> &[String] {
        match self {
            Self::Markdown { source, .. } | Self::Code { source, .. } => source,
        }
    }

    /// True for code cells.
    #[must_use]
    pub const fn is_code(&self) -> bool {
        matches!(self, Self::Code { .. })
    }
}

/// Notebook-level metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotebookMetadata {
    /// Kernel descriptor.
    pub kernelspec: KernelSpec,
    /// Language descriptor.
    pub language_info: LanguageInfo,
}

/// Kernel descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KernelSpec {
    /// Display name.
    pub display_name: String,
    /// Kernel language.
    pub language: String,
    /// Kernel name.
    pub name: String,
}

/// Language descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageInfo {
    /// Source file extension.
    pub file_extension: String,
    /// Source mimetype.
    pub mimetype: String,
    /// Language name.
    pub name: String,
    /// Language version.
    pub version: String,
}

impl Notebook {
    /// Serializes the notebook as JSON with 2-space indentation.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Serialization`] if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn cell_source(lines: &[String]) -> Vec<String> {
    let last = lines.len().saturating_sub(1);
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i == last {
                line.clone()
            } else {
                format!("{line}\n")
            }
        })
        .collect()
}

/// Renders chunks as a notebook document.
///
/// # Examples
///
/// ```
/// use literate_rs::chunking::parse;
/// use literate_rs::render::{NotebookRuntime, render_notebook};
///
/// let chunks = parse("#' Hello\nx = 1\n");
/// let nb = render_notebook(&chunks, &NotebookRuntime::default());
/// assert_eq!(nb.cells.len(), 2);
/// assert!(nb.cells[1].is_code());
/// ```
#[must_use]
pub fn render_notebook(chunks: &[Chunk], runtime: &NotebookRuntime) -> Notebook {
    Notebook {
        cells: chunks.iter().map(Cell::from_chunk).collect(),
        metadata: runtime.metadata(),
        nbformat: runtime.nbformat,
        nbformat_minor: runtime.nbformat_minor,
    }
}

/// [`Renderer`] for Jupyter notebooks.
#[derive(Debug, Clone, Default)]
pub struct NotebookRenderer {
    runtime: NotebookRuntime,
}

impl NotebookRenderer {
    /// Creates a renderer embedding `runtime` metadata.
    #[must_use]
    pub const fn new(runtime: NotebookRuntime) -> Self {
        Self { runtime }
    }
}

impl Renderer for NotebookRenderer {
    fn target(&self) -> Target {
        Target::Notebook
    }

    fn render(&self, chunks: &[Chunk]) -> Result<String> {
        render_notebook(chunks, &self.runtime).to_json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| (*s).to_string()).collect()
    }

    fn scenario() -> Vec<Chunk> {
        vec![Chunk::prose(lines(&["Hello"])), Chunk::code(lines(&["x = 1"]))]
    }

    #[test]
    fn test_cells_in_order() {
        let nb = render_notebook(&scenario(), &NotebookRuntime::default());
        assert_eq!(nb.cells.len(), 2);
        assert!(!nb.cells[0].is_code());
        assert_eq!(nb.cells[0].source(), ["Hello"]);
        assert!(nb.cells[1].is_code());
        assert_eq!(nb.cells[1].source(), ["x = 1"]);
    }

    #[test]
    fn test_source_newlines() {
        let chunk = Chunk::code(lines(&["a", "", "b"]));
        let nb = render_notebook(&[chunk], &NotebookRuntime::default());
        assert_eq!(nb.cells[0].source(), ["a\n", "\n", "b"]);
    }

    #[test]
    fn test_json_shape() {
        let json = render_notebook(&scenario(), &NotebookRuntime::default())
            .to_json()
            .unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["nbformat"], 4);
        assert_eq!(value["nbformat_minor"], 3);

        let md = &value["cells"][0];
        assert_eq!(md["cell_type"], "markdown");
        assert_eq!(md["source"], serde_json::json!(["Hello"]));
        assert_eq!(md["outputs"], serde_json::json!([]));
        assert_eq!(md["metadata"], serde_json::json!({}));
        assert!(md.get("execution_count").is_none());

        let code = &value["cells"][1];
        assert_eq!(code["cell_type"], "code");
        assert!(code["execution_count"].is_null());
        assert!(code.get("execution_count").is_some());
        assert_eq!(code["outputs"], serde_json::json!([]));
    }

    #[test]
    fn test_json_two_space_indent() {
        let json = render_notebook(&scenario(), &NotebookRuntime::default())
            .to_json()
            .unwrap();
        assert!(json.starts_with("{\n  \"cells\": ["));
    }

    #[test]
    fn test_runtime_metadata() {
        let runtime = NotebookRuntime::default().with_version("1.10.4");
        let nb = render_notebook(&[], &runtime);
        assert_eq!(nb.metadata.kernelspec.name, "julia-1.10");
        assert_eq!(nb.metadata.kernelspec.display_name, "Julia 1.10.4");
        assert_eq!(nb.metadata.kernelspec.language, "julia");
        assert_eq!(nb.metadata.language_info.file_extension, ".jl");
        assert_eq!(nb.metadata.language_info.mimetype, "application/julia");
        assert_eq!(nb.metadata.language_info.version, "1.10.4");
    }

    #[test]
    fn test_roundtrip_json() {
        let nb = render_notebook(&scenario(), &NotebookRuntime::default());
        let back: Notebook = serde_json::from_str(&nb.to_json().unwrap()).unwrap();
        assert_eq!(back, nb);
    }

    #[test]
    fn test_renderer_trait() {
        let renderer = NotebookRenderer::default();
        assert_eq!(renderer.target(), Target::Notebook);
        let json = renderer.render(&scenario()).unwrap();
        assert!(json.contains("\"cell_type\": \"markdown\""));
        assert!(json.contains("\"cell_type\": \"code\""));
    }
}
