//! Suite generation
//!
//! Ties the parser and the renderer together: parse the prototype, render
//! the class, write it into the target directory. The target directory is
//! never created; writing into a missing or unwritable directory fails.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::signature::parse_prototype;
use crate::template::render_test_class;
use crate::Result;

/// Generate a boundary-case test suite for one function prototype
///
/// Writes `<test_dir>/<CapitalizedFunctionName>Test.php`, overwriting any
/// existing file. Returns `Ok(None)` without touching the filesystem when
/// the function takes no parameters; that case is intentionally
/// unsupported, not an error.
pub fn generate_test_suite(prototype: &str, test_dir: &Path) -> Result<Option<PathBuf>> {
    let signature = parse_prototype(prototype);

    let Some(suite) = render_test_class(&signature) else {
        debug!(function = %signature.name, "function takes no parameters, skipping");
        return Ok(None);
    };

    let path = test_dir.join(suite.file_name());
    testforge_utils::file::write_text(&path, &suite.contents)?;
    info!(path = %path.display(), "test suite written");

    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_writes_suite_named_after_function() {
        let temp_dir = tempdir().unwrap();

        let path = generate_test_suite("doExample($argc, $argv)", temp_dir.path())
            .unwrap()
            .unwrap();

        assert_eq!(path, temp_dir.path().join("DoExampleTest.php"));
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("<?php"));
        assert!(contents.contains("class DoExampleTest"));
    }

    #[test]
    fn test_zero_argument_function_writes_nothing() {
        let temp_dir = tempdir().unwrap();

        let result = generate_test_suite("noop()", temp_dir.path()).unwrap();

        assert!(result.is_none());
        assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_missing_directory_is_an_io_error() {
        let missing = Path::new("/nonexistent-testforge-dir");
        let result = generate_test_suite("doExample($argc, $argv)", missing);
        assert!(matches!(result, Err(crate::Error::Io(_))));
    }

    #[test]
    fn test_regeneration_overwrites_with_identical_content() {
        let temp_dir = tempdir().unwrap();

        let path = generate_test_suite("single($x)", temp_dir.path())
            .unwrap()
            .unwrap();
        let first = std::fs::read_to_string(&path).unwrap();

        generate_test_suite("single($x)", temp_dir.path()).unwrap();
        let second = std::fs::read_to_string(&path).unwrap();

        assert_eq!(first, second);
    }
}
