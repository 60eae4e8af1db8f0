//! Raw (`\\?\`) path form.
//!
//! A path with the verbatim prefix skips Win32 name parsing, so a trailing
//! `nul` is an ordinary file name instead of the null device, and the
//! `MAX_PATH` ceiling no longer applies. The flip side is that nothing is
//! cleaned up: `.`/`..` stay literal and `/` is not converted.

use std::path::{Path, PathBuf};

use crate::error::{NukerError, Result};

/// Prefix for local verbatim paths.
pub const VERBATIM_PREFIX: &str = r"\\?\";

/// Prefix for verbatim UNC paths; replaces the leading `\\` of `\\server\share`.
pub const VERBATIM_UNC_PREFIX: &str = r"\\?\UNC\";

/// Convert an absolute Windows path to its verbatim form.
///
/// - `C:\dir\nul` becomes `\\?\C:\dir\nul`
/// - `\\server\share\nul` becomes `\\?\UNC\server\share\nul`
/// - an already verbatim path is returned unchanged
///
/// Relative paths are rejected.
pub fn escape_path(path: &str) -> Result<String> {
    if path.starts_with(VERBATIM_PREFIX) {
        return Ok(path.to_owned());
    }

    if let Some(rest) = path.strip_prefix(r"\\") {
        return Ok(format!("{VERBATIM_UNC_PREFIX}{rest}"));
    }

    if has_drive_root(path) {
        return Ok(format!("{VERBATIM_PREFIX}{path}"));
    }

    Err(NukerError::RelativePath(path.to_owned()))
}

/// `X:\` or `X:/`. A bare `X:` or `X:foo` is drive-relative.
fn has_drive_root(path: &str) -> bool {
    matches!(
        path.as_bytes(),
        [drive, b':', b'\\' | b'/', ..] if drive.is_ascii_alphabetic()
    )
}

/// Path handed to the delete primitive for `path`.
///
/// On Windows this is the verbatim form. Elsewhere `unlink` never interprets
/// names, so the path only has to be absolute.
#[cfg(windows)]
pub fn raw_path(path: &Path) -> Result<PathBuf> {
    let s = path
        .to_str()
        .ok_or_else(|| NukerError::NonUnicodePath(path.to_path_buf()))?;
    escape_path(s).map(PathBuf::from)
}

#[cfg(not(windows))]
pub fn raw_path(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Err(NukerError::RelativePath(path.to_string_lossy().into_owned()))
    }
}
