//! CLI command implementations.
//!
//! Maps parsed arguments onto a [`Config`] and runs the conversion.

use crate::chunking::chunk;
use crate::cli::output::{OutputFormat, format_chunks, format_generated};
use crate::cli::parser::{Cli, Commands, ConvertArgs};
use crate::config::Config;
use crate::core::Target;
use crate::error::Result;
use crate::generate::generate;
use crate::io::read_file;
use crate::render::{CodeFence, NotebookRuntime};
use std::path::{Path, PathBuf};

/// Executes the CLI command.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
///
/// # Returns
///
/// Result with output string on success.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);

    match &cli.command {
        Commands::Script { args } => cmd_convert(args, Target::Script, base_config(args), format),
        Commands::Markdown {
            args,
            fence_open,
            fence_close,
        } => {
            let mut config = base_config(args);
            if let Some(open) = fence_open {
                config = config.codefence(CodeFence::new(open.clone(), fence_close.clone()));
            } else if fence_close != "```" {
                let name = config.name_for(&args.input)?;
                let open = CodeFence::example(&name).open;
                config = config.codefence(CodeFence::new(open, fence_close.clone()));
            }
            cmd_convert(args, Target::Markdown, config, format)
        }
        Commands::Notebook {
            args,
            execute,
            jupyter,
            language_version,
        } => {
            let config = notebook_config(
                base_config(args),
                *execute,
                jupyter,
                language_version.as_deref(),
            );
            cmd_convert(args, Target::Notebook, config, format)
        }
        Commands::Chunks {
            input,
            target,
            name,
        } => cmd_chunks(input, target, name.as_deref(), format),
    }
}

fn base_config(args: &ConvertArgs) -> Config {
    let config = Config::new();
    match args.name {
        Some(ref name) => config.name(name.clone()),
        None => config,
    }
}

fn notebook_config(
    config: Config,
    execute: bool,
    jupyter: &Path,
    language_version: Option<&str>,
) -> Config {
    let runtime = match language_version {
        Some(version) => NotebookRuntime::default().with_version(version),
        None => NotebookRuntime::default(),
    };
    config
        .execute(execute)
        .jupyter(PathBuf::from(jupyter))
        .runtime(runtime)
}

// ==================== Command Implementations ====================

fn cmd_convert(
    args: &ConvertArgs,
    target: Target,
    config: Config,
    format: OutputFormat,
) -> Result<String> {
    let generated = generate(&args.input, &args.outdir, target, &config)?;
    Ok(format_generated(&generated, format))
}

fn cmd_chunks(
    input: &Path,
    target: &str,
    name: Option<&str>,
    format: OutputFormat,
) -> Result<String> {
    let target = Target::from_name(target)?;
    let config = name.map_or_else(Config::new, |n| Config::new().name(n));
    let name = config.name_for(input)?;

    let content = read_file(input)?;
    let chunks = chunk(&content, target, &name);
    Ok(format_chunks(&chunks, target, format))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::TempDir;

    fn setup(content: &str) -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("example.jl");
        std::fs::write(&input, content).unwrap();
        (temp_dir, input)
    }

    fn make_cli(format: &str, command: Commands) -> Cli {
        Cli {
            verbose: false,
            format: format.to_string(),
            command,
        }
    }

    fn convert_args(input: &Path, outdir: &Path) -> ConvertArgs {
        ConvertArgs {
            input: input.to_path_buf(),
            outdir: outdir.to_path_buf(),
            name: None,
        }
    }

    #[test]
    fn test_cmd_script() {
        let (temp_dir, input) = setup("#' Hi\nx = 1\n");
        let out_dir = temp_dir.path().join("out");
        std::fs::create_dir(&out_dir).unwrap();

        let cli = make_cli(
            "text",
            Commands::Script {
                args: convert_args(&input, &out_dir),
            },
        );
        let output = execute(&cli).unwrap();
        assert!(output.starts_with("Wrote script"));
        assert_eq!(
            std::fs::read_to_string(out_dir.join("example.jl")).unwrap(),
            "x = 1\n\n"
        );
    }

    #[test]
    fn test_cmd_markdown_custom_fence() {
        let (temp_dir, input) = setup("x = 1\n");
        let out_dir = temp_dir.path().join("out");
        std::fs::create_dir(&out_dir).unwrap();

        let cli = make_cli(
            "json",
            Commands::Markdown {
                args: convert_args(&input, &out_dir),
                fence_open: Some("```julia".to_string()),
                fence_close: "```".to_string(),
            },
        );
        let output = execute(&cli).unwrap();
        assert!(output.contains("\"target\": \"markdown\""));
        assert_eq!(
            std::fs::read_to_string(out_dir.join("example.md")).unwrap(),
            "```julia\nx = 1\n```\n\n"
        );
    }

    #[test]
    fn test_cmd_markdown_custom_close_only() {
        let (temp_dir, input) = setup("x = 1\n");
        let out_dir = temp_dir.path().join("out");
        std::fs::create_dir(&out_dir).unwrap();

        let cli = make_cli(
            "text",
            Commands::Markdown {
                args: convert_args(&input, &out_dir),
                fence_open: None,
                fence_close: "~~~".to_string(),
            },
        );
        execute(&cli).unwrap();
        assert_eq!(
            std::fs::read_to_string(out_dir.join("example.md")).unwrap(),
            "```@example example\nx = 1\n~~~\n\n"
        );
    }

    #[test]
    fn test_cmd_notebook_language_version() {
        let (temp_dir, input) = setup("#' Hi\nx = 1\n");
        let out_dir = temp_dir.path().join("out");
        std::fs::create_dir(&out_dir).unwrap();

        let cli = make_cli(
            "text",
            Commands::Notebook {
                args: convert_args(&input, &out_dir),
                execute: false,
                jupyter: PathBuf::from("jupyter"),
                language_version: Some("1.9.3".to_string()),
            },
        );
        execute(&cli).unwrap();

        let json: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(out_dir.join("example.ipynb")).unwrap(),
        )
        .unwrap();
        assert_eq!(json["metadata"]["kernelspec"]["name"], "julia-1.9");
        assert_eq!(json["metadata"]["language_info"]["version"], "1.9.3");
    }

    #[test]
    fn test_cmd_notebook_execute_failure() {
        let (temp_dir, input) = setup("x = 1\n");
        let cli = make_cli(
            "text",
            Commands::Notebook {
                args: convert_args(&input, temp_dir.path()),
                execute: true,
                jupyter: temp_dir.path().join("no-such-jupyter"),
                language_version: None,
            },
        );
        let err = execute(&cli).unwrap_err();
        assert!(matches!(err, Error::Execution(_)));
    }

    #[test]
    fn test_cmd_missing_outdir() {
        let (temp_dir, input) = setup("x = 1\n");
        let cli = make_cli(
            "text",
            Commands::Script {
                args: convert_args(&input, &temp_dir.path().join("missing")),
            },
        );
        let err = execute(&cli).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_cmd_chunks() {
        let (_temp, input) = setup("#' # @__NAME__\nx = 1\n");
        let cli = make_cli(
            "json",
            Commands::Chunks {
                input,
                target: "md".to_string(),
                name: Some("demo".to_string()),
            },
        );
        let output = execute(&cli).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["target"], "markdown");
        assert_eq!(value["count"], 2);
        assert_eq!(value["chunks"][0]["lines"][0], "# demo");
    }

    #[test]
    fn test_cmd_chunks_unknown_target() {
        let (_temp, input) = setup("x = 1\n");
        let cli = make_cli(
            "text",
            Commands::Chunks {
                input,
                target: "pdf".to_string(),
                name: None,
            },
        );
        assert!(matches!(execute(&cli), Err(Error::Command(_))));
    }
}
