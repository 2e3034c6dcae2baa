//! Conversion pipeline.
//!
//! Every conversion follows the same steps: check the output directory, read
//! the source, run `preprocess`, filter and parse for the target, render,
//! run `postprocess` and write `<outdir>/<name>.<ext>`. Notebooks may then be
//! executed.

use crate::chunking::chunk;
use crate::config::Config;
use crate::core::{Chunk, Target};
use crate::error::Result;
use crate::execute::{Jupyter, NotebookExecutor, execute_notebook};
use crate::io::{ensure_dir, read_file, write_file};
use crate::render::{MarkdownRenderer, NotebookRenderer, Renderer, ScriptRenderer};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Summary of one conversion.
#[derive(Debug, Clone, Serialize)]
pub struct Generated {
    /// Target that was produced.
    pub target: Target,
    /// Path of the written artifact.
    pub output: PathBuf,
    /// Resolved document name.
    pub name: String,
    /// Number of prose chunks.
    pub prose_chunks: usize,
    /// Number of code chunks.
    pub code_chunks: usize,
    /// Whether the notebook was executed.
    pub executed: bool,
}

/// Converts `input` into a script in `outdir`.
///
/// # Errors
///
/// Fails if `outdir` does not exist, the input cannot be read or the output
/// cannot be written.
///
/// # Examples
///
/// ```no_run
/// use literate_rs::{Config, script};
///
/// let path = script("docs/intro.jl", "build", &Config::new()).unwrap();
/// assert!(path.ends_with("intro.jl"));
/// ```
pub fn script<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    outdir: Q,
    config: &Config,
) -> Result<PathBuf> {
    generate(input.as_ref(), outdir.as_ref(), Target::Script, config).map(|g| g.output)
}

/// Converts `input` into a markdown document in `outdir`.
///
/// # Errors
///
/// Fails if `outdir` does not exist, the input cannot be read or the output
/// cannot be written.
pub fn markdown<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    outdir: Q,
    config: &Config,
) -> Result<PathBuf> {
    generate(input.as_ref(), outdir.as_ref(), Target::Markdown, config).map(|g| g.output)
}

/// Converts `input` into a notebook in `outdir`, executing it if
/// `config.execute` is set.
///
/// # Errors
///
/// Fails if `outdir` does not exist, the input cannot be read, the output
/// cannot be written or execution fails.
pub fn notebook<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    outdir: Q,
    config: &Config,
) -> Result<PathBuf> {
    generate(input.as_ref(), outdir.as_ref(), Target::Notebook, config).map(|g| g.output)
}

/// Runs the conversion for `target` using the configured `jupyter` program
/// for notebook execution.
///
/// # Errors
///
/// See [`generate_with`].
pub fn generate(
    input: &Path,
    outdir: &Path,
    target: Target,
    config: &Config,
) -> Result<Generated> {
    let executor = Jupyter::new(config.jupyter.clone());
    generate_with(input, outdir, target, config, &executor)
}

/// Runs the conversion for `target`, executing notebooks with `executor`.
///
/// # Errors
///
/// Returns a configuration error if `outdir` is not an existing directory
/// (nothing is written), an I/O error if reading or writing fails, and the
/// executor's error if notebook execution fails (the notebook is already
/// written at that point).
pub fn generate_with(
    input: &Path,
    outdir: &Path,
    target: Target,
    config: &Config,
    executor: &dyn NotebookExecutor,
) -> Result<Generated> {
    ensure_dir(outdir)?;
    info!("generating {target} from {}", input.display());

    let name = config.name_for(input)?;
    let output = outdir.join(format!("{name}.{}", target.extension()));

    let content = (config.preprocess)(read_file(input)?);
    let chunks = chunk(&content, target, &name);
    let rendered = renderer_for(target, &name, config).render(&chunks)?;
    let rendered = (config.postprocess)(rendered);

    info!("writing result to {}", output.display());
    write_file(&output, &rendered)?;

    let executed = target == Target::Notebook && config.execute;
    if executed {
        execute_notebook(executor, &output)?;
    }

    Ok(Generated {
        target,
        output,
        name,
        prose_chunks: count(&chunks, Chunk::is_prose),
        code_chunks: count(&chunks, Chunk::is_code),
        executed,
    })
}

/// Builds the renderer for `target`.
#[must_use]
pub fn renderer_for(target: Target, name: &str, config: &Config) -> Box<dyn Renderer> {
    match target {
        Target::Script => Box::new(ScriptRenderer),
        Target::Markdown => Box::new(MarkdownRenderer::new(config.codefence_for(name))),
        Target::Notebook => Box::new(NotebookRenderer::new(config.runtime.clone())),
    }
}

fn count(chunks: &[Chunk], pred: fn(&Chunk) -> bool) -> usize {
    chunks.iter().filter(|c| pred(c)).count()
}
