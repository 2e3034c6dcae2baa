//! Conversion configuration.
//!
//! One [`Config`] drives all three conversions; options that only apply to
//! one target (`codefence`, `execute`, `runtime`, `jupyter`) are ignored by
//! the others.

use crate::error::{Error, Result};
use crate::render::{CodeFence, NotebookRuntime};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Text transform applied before parsing or after rendering.
pub type Hook = Arc<dyn Fn(String) -> String + Send + Sync>;

/// Default notebook executor program.
pub const DEFAULT_JUPYTER: &str = "jupyter";

/// Options shared by the script, markdown and notebook conversions.
///
/// # Examples
///
/// ```
/// use literate_rs::Config;
///
/// let config = Config::new()
///     .name("guide")
///     .preprocess(|s| s.replace("TODAY", "2024-01-01"))
///     .execute(false);
/// assert_eq!(config.name.as_deref(), Some("guide"));
/// ```
#[derive(Clone)]
pub struct Config {
    /// Base name for the output file, fences and `@__NAME__`.
    /// Defaults to the input file stem.
    pub name: Option<String>,
    /// Applied to the raw input before filtering.
    pub preprocess: Hook,
    /// Applied to the rendered output before writing.
    pub postprocess: Hook,
    /// Markdown fence pair. Defaults to [`CodeFence::example`] of the name.
    pub codefence: Option<CodeFence>,
    /// Run the generated notebook through the executor.
    pub execute: bool,
    /// Notebook kernel/language metadata.
    pub runtime: NotebookRuntime,
    /// Program used to execute notebooks.
    pub jupyter: PathBuf,
}

fn identity(s: String) -> String {
    s
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: None,
            preprocess: Arc::new(identity),
            postprocess: Arc::new(identity),
            codefence: None,
            execute: false,
            runtime: NotebookRuntime::default(),
            jupyter: PathBuf::from(DEFAULT_JUPYTER),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("name", &self.name)
            .field("codefence", &self.codefence)
            .field("execute", &self.execute)
            .field("runtime", &self.runtime)
            .field("jupyter", &self.jupyter)
            .finish_non_exhaustive()
    }
}

impl Config {
    /// Creates a configuration with all defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the preprocessing hook.
    #[must_use]
    pub fn preprocess<F>(mut self, f: F) -> Self
    where
        F: Fn(String) -> String + Send + Sync + 'static,
    {
        self.preprocess = Arc::new(f);
        self
    }

    /// Sets the postprocessing hook.
    #[must_use]
    pub fn postprocess<F>(mut self, f: F) -> Self
    where
        F: Fn(String) -> String + Send + Sync + 'static,
    {
        self.postprocess = Arc::new(f);
        self
    }

    /// Sets the markdown fence pair.
    #[must_use]
    pub fn codefence(mut self, fence: CodeFence) -> Self {
        self.codefence = Some(fence);
        self
    }

    /// Sets whether generated notebooks are executed.
    #[must_use]
    pub const fn execute(mut self, execute: bool) -> Self {
        self.execute = execute;
        self
    }

    /// Sets the notebook runtime metadata.
    #[must_use]
    pub fn runtime(mut self, runtime: NotebookRuntime) -> Self {
        self.runtime = runtime;
        self
    }

    /// Sets the notebook executor program.
    #[must_use]
    pub fn jupyter(mut self, program: impl Into<PathBuf>) -> Self {
        self.jupyter = program.into();
        self
    }

    /// Resolves the name used for `input`: the configured name, otherwise
    /// the input file stem.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if no name is configured and the path has
    /// no usable file stem.
    pub fn name_for(&self, input: &Path) -> Result<String> {
        if let Some(ref name) = self.name {
            return Ok(name.clone());
        }
        input
            .file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .map(String::from)
            .ok_or_else(|| Error::config(format!("cannot derive a name from {}", input.display())))
    }

    /// Resolves the fence pair for documents called `name`.
    #[must_use]
    pub fn codefence_for(&self, name: &str) -> CodeFence {
        self.codefence
            .clone()
            .unwrap_or_else(|| CodeFence::example(name))
    }
}
