//! File writing utilities
//!
//! One scoped write: the handle is opened in truncating mode, written once,
//! and closed when it goes out of scope.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Write text to a file, truncating any existing content
///
/// The parent directory is not created; a missing or unwritable directory
/// surfaces as the underlying `io::Error`.
pub fn write_text(path: &Path, contents: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())?;
    Ok(())
}
