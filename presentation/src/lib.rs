//! Presentation layer for consulta
//!
//! This crate contains CLI definitions, console output formatting,
//! and the HTTP API surface.

pub mod cli;
pub mod http;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use http::AppState;
pub use output::console::ConsoleFormatter;
