//! # literate-rs
//!
//! Converts literate source files into runnable scripts, markdown documents
//! and Jupyter notebooks.
//!
//! A literate source is an ordinary script in which prose lives in `#'`
//! comment lines. One input produces three artifacts:
//!
//! - **Script**: only the code, prose dropped
//! - **Markdown**: prose as text, code wrapped in fences
//! - **Notebook**: prose as markdown cells, code as code cells
//!
//! Line directives (`#md`, `#nb`, `#jl`) restrict a line to one output and
//! `#-` forces a chunk break.
//!
//! ## Example
//!
//! ```no_run
//! use literate_rs::{Config, script};
//!
//! let path = script("docs/intro.jl", "build", &Config::new()).unwrap();
//! println!("wrote {}", path.display());
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod chunking;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod execute;
pub mod generate;
pub mod io;
pub mod logging;
pub mod render;

// Re-export commonly used types at crate root
pub use config::Config;
pub use error::{Error, Result};

// Re-export core domain types
pub use core::{Chunk, ChunkKind, Target};

// Re-export the conversion entry points
pub use generate::{Generated, generate, generate_with, markdown, notebook, script};

// Re-export chunking
pub use chunking::{chunk, filter, parse};

// Re-export renderers
pub use render::{
    CodeFence, MarkdownRenderer, Notebook, NotebookRenderer, NotebookRuntime, Renderer,
    ScriptRenderer, render_markdown, render_notebook, render_script,
};

// Re-export notebook execution
pub use execute::{Jupyter, NotebookExecutor, execute_notebook};

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};
