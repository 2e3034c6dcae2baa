//! External notebook execution.
//!
//! Generated notebooks can optionally be executed in place by an external
//! tool. The default executor shells out to `jupyter nbconvert` and waits
//! for it without a timeout; the executor controls its own budget.

use crate::error::{ExecutionError, Result};
use crate::io::remove_dir_quietly;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, error, info};

/// Directory of execution checkpoints left next to executed notebooks.
pub const CHECKPOINT_DIR: &str = ".ipynb_checkpoints";

/// Executes a notebook file in place.
pub trait NotebookExecutor {
    /// Executes the notebook at `notebook`, overwriting it with the result.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionError`] if the executor cannot be started or fails.
    fn execute(&self, notebook: &Path) -> Result<()>;
}

/// Runs notebooks through `jupyter nbconvert`.
#[derive(Debug, Clone)]
pub struct Jupyter {
    program: PathBuf,
}

impl Default for Jupyter {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_JUPYTER)
    }
}

impl Jupyter {
    /// Creates an executor invoking `program`.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The program invoked.
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Command-line arguments for executing `notebook`.
    #[must_use]
    pub fn args(notebook: &Path) -> Vec<OsString> {
        let absolute = std::path::absolute(notebook).unwrap_or_else(|_| notebook.to_path_buf());
        let output = notebook
            .file_name()
            .map_or_else(|| absolute.clone().into_os_string(), ToOwned::to_owned);

        vec![
            "nbconvert".into(),
            "--ExecutePreprocessor.timeout=-1".into(),
            "--to".into(),
            "notebook".into(),
            "--execute".into(),
            "--inplace".into(),
            absolute.into_os_string(),
            "--output".into(),
            output,
        ]
    }
}

impl NotebookExecutor for Jupyter {
    fn execute(&self, notebook: &Path) -> Result<()> {
        let program = self.program.to_string_lossy().to_string();
        let args = Self::args(notebook);
        debug!(program = %program, ?args, "spawning notebook executor");

        let status = Command::new(&self.program)
            .args(&args)
            .status()
            .map_err(|e| ExecutionError::Spawn {
                program: program.clone(),
                reason: e.to_string(),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(ExecutionError::Failed {
                program,
                status: status.to_string(),
            }
            .into())
        }
    }
}

/// Executes `notebook` and removes the checkpoint directory next to it.
///
/// Failures are logged and returned unchanged. Checkpoint cleanup runs
/// whether or not execution succeeded and never fails.
///
/// # Errors
///
/// Propagates the executor's error.
pub fn execute_notebook(executor: &dyn NotebookExecutor, notebook: &Path) -> Result<()> {
    let name = notebook
        .file_name()
        .map_or_else(|| notebook.display().to_string(), |n| n.to_string_lossy().to_string());
    info!("executing notebook {name}");

    let result = executor.execute(notebook);
    if let Err(ref e) = result {
        error!("error when executing notebook {name}: {e}");
    }

    if let Some(dir) = notebook.parent() {
        remove_dir_quietly(dir.join(CHECKPOINT_DIR));
    }

    result
}
