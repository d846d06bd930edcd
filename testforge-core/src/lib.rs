//! Testforge Core - Signature Parsing and Test Suite Rendering
//!
//! This crate turns a PHP function prototype into a boilerplate PHPUnit test
//! file with six fixed boundary-value cases:
//! - Signature parsing (function name plus ordered parameter declarations)
//! - Template rendering driven by the boundary-case table
//! - Suite generation into a caller-supplied directory

#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod generator;
pub mod signature;
pub mod template;

// Re-export commonly used types for convenience
pub use generator::generate_test_suite;
pub use signature::{parse_prototype, Signature};
pub use template::{render_test_class, RenderedSuite, BoundaryCase, BOUNDARY_CASES};

/// Result type used throughout testforge core
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for testforge core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Utility error
    #[error("Utility error: {0}")]
    Util(#[from] testforge_utils::UtilError),
}
