//! File I/O for literate-rs.
//!
//! Thin wrappers over `std::fs` that map failures onto [`crate::error::IoError`].

pub mod reader;

pub use reader::{ensure_dir, read_file, remove_dir_quietly, write_file};
