//! Filesystem staging primitives with consistent error handling.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Copy a single file, mapping failures to `internal.io_error`.
pub fn copy_file(from: &Path, to: &Path, operation: &str) -> Result<()> {
    fs::copy(from, to)
        .map(|_| ())
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

/// Create a directory and any missing parents.
pub fn ensure_dir(path: &Path, operation: &str) -> Result<()> {
    fs::create_dir_all(path)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

/// Delete a directory tree. Missing trees are not an error.
pub fn remove_tree(path: &Path, operation: &str) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    fs::remove_dir_all(path)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

/// Recursively copy a directory tree into `to`, creating destination
/// directories as needed and overwriting existing files.
pub fn copy_tree(from: &Path, to: &Path, operation: &str) -> Result<()> {
    ensure_dir(to, operation)?;

    let entries = fs::read_dir(from)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))?;

    for entry in entries {
        let entry =
            entry.map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))?;
        let source = entry.path();
        let dest = to.join(entry.file_name());

        let file_type = entry
            .file_type()
            .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))?;

        if file_type.is_dir() {
            copy_tree(&source, &dest, operation)?;
        } else {
            copy_file(&source, &dest, operation)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn copy_file_copies_contents() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("a.txt");
        let dst = dir.path().join("b.txt");
        fs::write(&src, "hello").unwrap();

        copy_file(&src, &dst, "test copy").unwrap();
        assert_eq!(fs::read_to_string(&dst).unwrap(), "hello");
    }

    #[test]
    fn copy_file_missing_source_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = copy_file(
            &dir.path().join("missing"),
            &dir.path().join("out"),
            "test copy",
        )
        .unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::InternalIoError);
    }

    #[test]
    fn copy_tree_copies_nested_structure() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src");
        fs::create_dir_all(src.join("nested")).unwrap();
        fs::write(src.join("top.txt"), "top").unwrap();
        fs::write(src.join("nested/inner.txt"), "inner").unwrap();

        let dst = dir.path().join("dst");
        copy_tree(&src, &dst, "test stage").unwrap();

        assert_eq!(fs::read_to_string(dst.join("top.txt")).unwrap(), "top");
        assert_eq!(
            fs::read_to_string(dst.join("nested/inner.txt")).unwrap(),
            "inner"
        );
    }

    #[test]
    fn copy_tree_overwrites_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src");
        let dst = dir.path().join("dst");
        fs::create_dir_all(&src).unwrap();
        fs::create_dir_all(&dst).unwrap();
        fs::write(src.join("f.txt"), "new").unwrap();
        fs::write(dst.join("f.txt"), "old").unwrap();

        copy_tree(&src, &dst, "test stage").unwrap();
        assert_eq!(fs::read_to_string(dst.join("f.txt")).unwrap(), "new");
    }

    #[test]
    fn remove_tree_ignores_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        remove_tree(&dir.path().join("not-there"), "test remove").unwrap();
    }

    #[test]
    fn remove_tree_deletes_contents() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("t");
        fs::create_dir_all(target.join("deep")).unwrap();
        fs::write(target.join("deep/f"), "x").unwrap();

        remove_tree(&target, "test remove").unwrap();
        assert!(!target.exists());
    }
}
