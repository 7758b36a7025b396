//! Error handling, configuration and progress reporting

/// Generation constants and runtime configuration defaults
pub mod configuration;
/// Error types and context management
pub mod error;
/// Staged progress notifications
pub mod progress;
