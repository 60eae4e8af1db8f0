//! Non-normalizing delete of a single file.

use std::io;
use std::path::Path;

use crate::error::DeleteFailure;
use crate::path::raw_path;

/// Delete one matched file by its raw path.
///
/// Only the directory entry is removed. Alternate data streams go with the
/// primary stream; other hard links keep the data alive.
pub fn delete_reserved_file(path: &Path) -> Result<(), DeleteFailure> {
    let raw = match raw_path(path) {
        Ok(raw) => raw,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "cannot build raw path");
            return Err(DeleteFailure::Other);
        }
    };

    match delete_raw(&raw) {
        Ok(()) => {
            tracing::debug!(path = %raw.display(), "deleted reserved file");
            Ok(())
        }
        Err(err) => {
            let failure = DeleteFailure::classify(&err);
            tracing::warn!(path = %raw.display(), error = %err, kind = %failure, "delete failed");
            Err(failure)
        }
    }
}

/// `DeleteFileW` on a verbatim path; the `std::fs` wrapper would go through
/// extra attribute handling we do not want here.
#[cfg(windows)]
fn delete_raw(raw: &Path) -> io::Result<()> {
    use widestring::U16CString;
    use windows_sys::Win32::Storage::FileSystem::DeleteFileW;

    let wide = U16CString::from_os_str(raw.as_os_str())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    // SAFETY: `wide` is NUL-terminated and outlives the call.
    let ok = unsafe { DeleteFileW(wide.as_ptr()) };
    if ok != 0 {
        Ok(())
    } else {
        Err(io::Error::last_os_error())
    }
}

/// `unlink(2)` takes names literally, so `std::fs::remove_file` is already
/// the raw primitive here.
#[cfg(not(windows))]
fn delete_raw(raw: &Path) -> io::Result<()> {
    std::fs::remove_file(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_delete_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("readme.txt");
        fs::write(&path, "x").unwrap();

        assert_eq!(delete_reserved_file(&path), Ok(()));
        assert!(!path.exists());
    }

    #[test]
    fn test_delete_missing_is_not_found() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("gone.txt");

        assert_eq!(delete_reserved_file(&path), Err(DeleteFailure::NotFound));
    }

    #[test]
    fn test_delete_relative_is_other() {
        assert_eq!(
            delete_reserved_file(Path::new("relative/nul")),
            Err(DeleteFailure::Other)
        );
    }

    #[test]
    fn test_delete_directory_fails() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("nul");
        let raw = raw_path(&dir).unwrap();
        fs::create_dir(&raw).unwrap();

        assert!(delete_reserved_file(&dir).is_err());
        assert!(raw.is_dir());
    }
}
