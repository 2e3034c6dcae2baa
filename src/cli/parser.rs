//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// literate-rs: convert literate sources into scripts, markdown and notebooks.
///
/// Prose lives in `#'` comment lines, `#-` forces a chunk break and
/// `#md`/`#nb`/`#jl` restrict a line to one output.
#[derive(Parser, Debug)]
#[command(name = "literate-rs")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments shared by every conversion.
#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    /// Literate source file.
    pub input: PathBuf,

    /// Existing output directory.
    #[arg(default_value = ".")]
    pub outdir: PathBuf,

    /// Output name (defaults to the input file stem).
    #[arg(short, long)]
    pub name: Option<String>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a plain script containing only the code.
    #[command(alias = "jl")]
    Script {
        /// Input, output directory and name.
        #[command(flatten)]
        args: ConvertArgs,
    },

    /// Generate a markdown document.
    #[command(alias = "md")]
    Markdown {
        /// Input, output directory and name.
        #[command(flatten)]
        args: ConvertArgs,

        /// Opening code fence (default: "```@example <name>").
        #[arg(long, allow_hyphen_values = true)]
        fence_open: Option<String>,

        /// Closing code fence.
        #[arg(long, default_value = "```", allow_hyphen_values = true)]
        fence_close: String,
    },

    /// Generate a Jupyter notebook.
    #[command(alias = "nb")]
    Notebook {
        /// Input, output directory and name.
        #[command(flatten)]
        args: ConvertArgs,

        /// Execute the notebook after writing it.
        #[arg(short = 'x', long)]
        execute: bool,

        /// Program used to execute notebooks.
        #[arg(long, env = "LITERATE_JUPYTER", default_value = "jupyter")]
        jupyter: PathBuf,

        /// Language version recorded in the notebook metadata.
        #[arg(long, env = "LITERATE_LANGUAGE_VERSION")]
        language_version: Option<String>,
    },

    /// Show the chunks a source parses into, without writing anything.
    Chunks {
        /// Literate source file.
        input: PathBuf,

        /// Target whose directive rules are applied (script, markdown, notebook).
        #[arg(short, long, default_value = "markdown")]
        target: String,

        /// Name substituted for `@__NAME__`.
        #[arg(short, long)]
        name: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_script_defaults() {
        let cli = Cli::try_parse_from(["literate-rs", "script", "intro.jl"]).unwrap();
        match cli.command {
            Commands::Script { args } => {
                assert_eq!(args.input, PathBuf::from("intro.jl"));
                assert_eq!(args.outdir, PathBuf::from("."));
                assert!(args.name.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.format, "text");
    }

    #[test]
    fn test_markdown_fences() {
        let cli = Cli::try_parse_from([
            "literate-rs",
            "md",
            "intro.jl",
            "docs",
            "--fence-open",
            "```julia",
        ])
        .unwrap();
        match cli.command {
            Commands::Markdown {
                args,
                fence_open,
                fence_close,
            } => {
                assert_eq!(args.outdir, PathBuf::from("docs"));
                assert_eq!(fence_open.as_deref(), Some("```julia"));
                assert_eq!(fence_close, "```");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_notebook_flags() {
        let cli = Cli::try_parse_from([
            "literate-rs",
            "--format",
            "json",
            "nb",
            "intro.jl",
            "-x",
            "--jupyter",
            "/opt/bin/jupyter",
            "--language-version",
            "1.10.4",
        ])
        .unwrap();
        assert_eq!(cli.format, "json");
        match cli.command {
            Commands::Notebook {
                execute,
                jupyter,
                language_version,
                ..
            } => {
                assert!(execute);
                assert_eq!(jupyter, PathBuf::from("/opt/bin/jupyter"));
                assert_eq!(language_version.as_deref(), Some("1.10.4"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_chunks_target() {
        let cli =
            Cli::try_parse_from(["literate-rs", "chunks", "intro.jl", "-t", "nb"]).unwrap();
        assert!(matches!(cli.command, Commands::Chunks { ref target, .. } if target == "nb"));
    }
}
