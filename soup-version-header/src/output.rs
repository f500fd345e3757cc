//! Atomic replacement of the generated header.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{Error, Result};

/// Write `contents` to `path` via a temporary file in the same directory.
///
/// `path` is either left untouched or fully replaced; readers never observe
/// a partially written header.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let write_err = |source: std::io::Error| Error::WriteOutput {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(contents.as_bytes()).map_err(write_err)?;
    // Temp files are created 0600; give the header regular file permissions.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))
            .map_err(write_err)?;
    }
    tmp.as_file().sync_all().map_err(write_err)?;
    debug!(tmp = %tmp.path().display(), "wrote temporary header");

    // The temp file is removed on drop if the rename fails.
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_and_replaces() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.h");

        write_atomic(&path, "first version, longer text\n").unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "first version, longer text\n"
        );

        write_atomic(&path, "second\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second\n");

        // Only the header remains; no stray temp files.
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn header_is_world_readable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.h");
        write_atomic(&path, "x").unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[test]
    fn missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.h");
        let err = write_atomic(&path, "x").unwrap_err();
        assert!(matches!(err, Error::WriteOutput { .. }));
        assert!(!path.exists());
    }
}
