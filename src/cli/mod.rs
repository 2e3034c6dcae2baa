//! CLI layer for literate-rs.
//!
//! Provides the command-line interface using clap, with one command per
//! output target plus a command to inspect the parsed chunks.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::{Cli, Commands};
