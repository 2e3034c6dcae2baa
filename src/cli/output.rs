//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::core::{Chunk, Target};
use crate::error::Error;
use crate::generate::Generated;
use serde::Serialize;
use std::fmt::Write;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Formats the result of a conversion.
#[must_use]
pub fn format_generated(generated: &Generated, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            let _ = write!(
                output,
                "Wrote {} {} ({} prose, {} code chunks)",
                generated.target,
                generated.output.display(),
                generated.prose_chunks,
                generated.code_chunks,
            );
            if generated.executed {
                output.push_str(", executed");
            }
            output.push('\n');
            output
        }
        OutputFormat::Json => format_json(generated),
    }
}

/// Formats a parsed chunk sequence.
#[must_use]
pub fn format_chunks(chunks: &[Chunk], target: Target, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_chunks_text(chunks, target),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ChunksOutput<'a> {
                target: Target,
                count: usize,
                chunks: &'a [Chunk],
            }
            format_json(&ChunksOutput {
                target,
                count: chunks.len(),
                chunks,
            })
        }
    }
}

fn format_chunks_text(chunks: &[Chunk], target: Target) -> String {
    if chunks.is_empty() {
        return format!("No chunks found for target: {target}\n");
    }

    let mut output = String::new();
    let _ = writeln!(output, "{} chunks ({target}):", chunks.len());
    let _ = writeln!(
        output,
        "{:<6} {:<6} {:<6} {:<10} Preview",
        "Index", "Kind", "Lines", "Continued"
    );
    output.push_str(&"-".repeat(70));
    output.push('\n');

    for (i, chunk) in chunks.iter().enumerate() {
        let kind = if chunk.is_code() { "code" } else { "prose" };
        let continued = if chunk.is_continued() { "yes" } else { "-" };
        let preview = truncate(&chunk.lines().join("\\n"), 40);
        let _ = writeln!(
            output,
            "{:<6} {:<6} {:<6} {:<10} {}",
            i,
            kind,
            chunk.len(),
            continued,
            preview
        );
    }

    output
}

/// Formats an error for display.
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => error.to_string(),
        OutputFormat::Json => format_json(&serde_json::json!({ "error": error.to_string() })),
    }
}

/// Formats a value as JSON.
fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// Truncates a string to `max_len` characters with ellipsis.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{head}...")
    }
}
