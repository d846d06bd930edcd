//! Testforge Utilities
//!
//! This crate provides the helpers shared by the testforge workspace:
//! string processing, file writing, and logging configuration.

#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

pub mod file;
pub mod logging;
pub mod string;

/// Re-export commonly used utilities
pub use file::write_text;
pub use string::{capitalize_first, trim_tokens};

/// Result type used throughout testforge utilities
pub type Result<T> = std::result::Result<T, UtilError>;

/// Error types for utility operations
#[derive(Debug, thiserror::Error)]
pub enum UtilError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
