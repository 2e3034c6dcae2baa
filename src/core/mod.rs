//! Core domain models for literate-rs.
//!
//! This module contains the fundamental data structures used throughout the
//! converter: chunks and output targets. These are pure domain models with
//! no I/O dependencies.

pub mod chunk;
pub mod target;

pub use chunk::{Chunk, ChunkKind};
pub use target::Target;
