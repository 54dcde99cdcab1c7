//! The `png-metadata` crate provides a command-line interface for embedding,
//! extracting and inspecting PNG text metadata.
//!
//! This crate is the binary entry point for the `pngmeta` tool, and it
//! handles argument parsing, command execution, and user interaction.
pub mod cli;
pub mod command;
mod payload;
