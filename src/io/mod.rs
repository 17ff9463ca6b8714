//! Input/output: configuration, errors, logging, progress, and the CLI

/// Command-line arguments and batch runner
pub mod cli;
/// Rule constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Injected logging collaborator
pub mod logger;
/// Batch progress display
pub mod progress;
