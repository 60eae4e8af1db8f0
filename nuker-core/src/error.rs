use std::io;
use std::path::PathBuf;
use std::str::Utf8Error;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NukerError {
    #[error("Null pointer passed as root path")]
    NullPath,

    #[error("Root path is empty")]
    EmptyPath,

    #[error("Invalid UTF-8 in path: {0}")]
    InvalidUtf8(#[from] Utf8Error),

    #[error("Path is not absolute: {0}")]
    RelativePath(String),

    #[error("Path is not valid Unicode: {0}")]
    NonUnicodePath(PathBuf),

    #[error("Path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, NukerError>;

/// Why a single delete call failed.
///
/// Mapped once from the OS error at the point of failure. The sweep keeps
/// going whatever the variant is.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeleteFailure {
    #[error("file not found")]
    NotFound,

    #[error("access denied")]
    AccessDenied,

    #[error("file is in use")]
    InUse,

    #[error("media is write-protected")]
    WriteProtected,

    #[error("other error")]
    Other,
}

impl DeleteFailure {
    pub const ALL: [DeleteFailure; 5] = [
        DeleteFailure::NotFound,
        DeleteFailure::AccessDenied,
        DeleteFailure::InUse,
        DeleteFailure::WriteProtected,
        DeleteFailure::Other,
    ];

    /// Classify an OS error returned by the delete primitive.
    pub fn classify(err: &io::Error) -> Self {
        if let Some(code) = err.raw_os_error()
            && let Some(failure) = Self::from_raw_os_error(code)
        {
            return failure;
        }

        match err.kind() {
            io::ErrorKind::NotFound => DeleteFailure::NotFound,
            io::ErrorKind::PermissionDenied => DeleteFailure::AccessDenied,
            io::ErrorKind::ResourceBusy | io::ErrorKind::ExecutableFileBusy => {
                DeleteFailure::InUse
            }
            io::ErrorKind::ReadOnlyFilesystem => DeleteFailure::WriteProtected,
            _ => DeleteFailure::Other,
        }
    }

    /// Win32 codes that `ErrorKind` folds together or does not know about.
    #[cfg(windows)]
    fn from_raw_os_error(code: i32) -> Option<Self> {
        use windows_sys::Win32::Foundation::{
            ERROR_ACCESS_DENIED, ERROR_FILE_NOT_FOUND, ERROR_LOCK_VIOLATION, ERROR_PATH_NOT_FOUND,
            ERROR_SHARING_VIOLATION, ERROR_WRITE_PROTECT,
        };

        match code as u32 {
            ERROR_FILE_NOT_FOUND | ERROR_PATH_NOT_FOUND => Some(DeleteFailure::NotFound),
            ERROR_ACCESS_DENIED => Some(DeleteFailure::AccessDenied),
            ERROR_SHARING_VIOLATION | ERROR_LOCK_VIOLATION => Some(DeleteFailure::InUse),
            ERROR_WRITE_PROTECT => Some(DeleteFailure::WriteProtected),
            _ => None,
        }
    }

    #[cfg(not(windows))]
    fn from_raw_os_error(_code: i32) -> Option<Self> {
        None
    }

    pub(crate) fn index(self) -> usize {
        match self {
            DeleteFailure::NotFound => 0,
            DeleteFailure::AccessDenied => 1,
            DeleteFailure::InUse => 2,
            DeleteFailure::WriteProtected => 3,
            DeleteFailure::Other => 4,
        }
    }
}
