//! C ABI.
//!
//! ```c
//! typedef struct { uint32_t files_scanned, files_deleted, errors; } ScanStats;
//!
//! ScanStats nuke_reserved_files(const char *root_path_utf8);
//! const char *nuker_core_version(void);
//! uint32_t nuker_core_test(void);
//! ```
//!
//! No panic unwinds out of these functions: the host process could not
//! recover from it.

use std::ffi::{CStr, c_char};
use std::panic;
use std::path::Path;

use crate::error::{NukerError, Result};
use crate::stats::ScanStats;
use crate::sweeper::{SweepConfig, Sweeper};

/// Value returned by [`nuker_core_test`].
pub const LOAD_PROBE_MAGIC: u32 = 0xDEAD_BEEF;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "\0");

/// Sweep `root_path_utf8` and delete every reserved-name file below it.
///
/// Returns `{0, 0, 1}` when the path is null, not UTF-8, empty, relative,
/// missing or not a directory. Otherwise returns the sweep counters.
///
/// # Safety
/// `root_path_utf8` must be null or point to a NUL-terminated string that
/// stays valid and unmodified for the duration of the call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn nuke_reserved_files(root_path_utf8: *const c_char) -> ScanStats {
    let outcome = panic::catch_unwind(|| {
        // SAFETY: forwarded from this function's contract.
        let root = unsafe { root_from_ptr(root_path_utf8) }?;
        Sweeper::new(SweepConfig::default()).run(Path::new(root))
    });

    match outcome {
        Ok(Ok(report)) => report.stats,
        Ok(Err(err)) => {
            tracing::warn!(error = %err, "rejected root path");
            ScanStats::invalid_input()
        }
        Err(_) => {
            tracing::error!("sweep panicked");
            ScanStats::invalid_input()
        }
    }
}

/// Crate version as a static NUL-terminated string. Never free it.
#[unsafe(no_mangle)]
pub extern "C" fn nuker_core_version() -> *const c_char {
    VERSION.as_ptr().cast()
}

/// Load probe: always returns [`LOAD_PROBE_MAGIC`].
#[unsafe(no_mangle)]
pub extern "C" fn nuker_core_test() -> u32 {
    LOAD_PROBE_MAGIC
}

/// # Safety
/// Same contract as [`nuke_reserved_files`].
unsafe fn root_from_ptr<'a>(ptr: *const c_char) -> Result<&'a str> {
    if ptr.is_null() {
        return Err(NukerError::NullPath);
    }

    // SAFETY: non-null and NUL-terminated per the caller's contract.
    let root = unsafe { CStr::from_ptr(ptr) }.to_str()?;
    if root.is_empty() {
        return Err(NukerError::EmptyPath);
    }
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn test_probe() {
        assert_eq!(nuker_core_test(), 0xDEADBEEF);
    }

    #[test]
    fn test_version_matches_package() {
        let version = unsafe { CStr::from_ptr(nuker_core_version()) };
        assert_eq!(version.to_str().unwrap(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_root_from_ptr() {
        assert!(matches!(
            unsafe { root_from_ptr(ptr::null()) },
            Err(NukerError::NullPath)
        ));
        assert!(matches!(
            unsafe { root_from_ptr(c"".as_ptr()) },
            Err(NukerError::EmptyPath)
        ));

        let invalid = [0xffu8, 0xfe, 0];
        assert!(matches!(
            unsafe { root_from_ptr(invalid.as_ptr().cast()) },
            Err(NukerError::InvalidUtf8(_))
        ));

        assert_eq!(unsafe { root_from_ptr(c"/tmp".as_ptr()) }.unwrap(), "/tmp");
    }
}
