//! CAF naming CLI library.
//!
//! Exposes the command handlers, output formatters and CLI types behind the
//! `caf-naming` binary so they can be tested without spawning a process.

#![allow(clippy::missing_errors_doc)]

pub mod cli;
pub mod commands;
pub mod formatters;

pub use cli::{ExitCode, OutputFormat};
