//! Output targets.

use crate::error::{CommandError, Result};
use serde::Serialize;
use std::fmt;

/// One of the three artifacts a literate source can be converted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Plain executable script.
    Script,
    /// Markdown document with fenced code blocks.
    Markdown,
    /// Jupyter notebook.
    Notebook,
}

impl Target {
    /// All targets, in CLI order.
    pub const ALL: [Self; 3] = [Self::Script, Self::Markdown, Self::Notebook];

    /// Parses a target by name.
    ///
    /// Accepts the long names as well as the directive tags (`jl`, `md`,
    /// `nb`), case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::InvalidArgument`] for unknown names.
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "script" | "jl" => Ok(Self::Script),
            "markdown" | "md" => Ok(Self::Markdown),
            "notebook" | "nb" | "ipynb" => Ok(Self::Notebook),
            _ => Err(CommandError::InvalidArgument(format!("unknown target: {name}")).into()),
        }
    }

    /// Canonical lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Script => "script",
            Self::Markdown => "markdown",
            Self::Notebook => "notebook",
        }
    }

    /// File extension of the generated artifact, without the dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Script => "jl",
            Self::Markdown => "md",
            Self::Notebook => "ipynb",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
