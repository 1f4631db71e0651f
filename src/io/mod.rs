//! Input/output: puzzle loading, command-line front end and error handling

/// Command-line interface for solving puzzle files
pub mod cli;
/// Solver constants and runtime configuration defaults
pub mod configuration;
/// Error types for all packing operations
pub mod error;
/// Progress display across the problems of a puzzle
pub mod progress;
/// Plain-text puzzle format parsing
pub mod puzzle;
