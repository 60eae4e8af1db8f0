//! Finds files named after Windows reserved devices (`nul`, `con`, `com1`,
//! ...) in a directory tree and deletes them through raw paths.
//!
//! Rust callers use [`Sweeper`]; other languages load the `cdylib` and call
//! [`nuke_reserved_files`].

pub mod delete;
pub mod error;
pub mod ffi;
pub mod format;
pub mod path;
pub mod reserved;
pub mod stats;
pub mod sweeper;

pub use delete::delete_reserved_file;
pub use error::{DeleteFailure, NukerError, Result};
pub use ffi::{LOAD_PROBE_MAGIC, nuke_reserved_files, nuker_core_test, nuker_core_version};
pub use format::{format_count, format_elapsed};
pub use path::{escape_path, raw_path};
pub use reserved::{RESERVED_NAMES, is_reserved_name};
pub use stats::{FailureBreakdown, ScanCounters, ScanStats, SweepReport};
pub use sweeper::{SweepConfig, Sweeper, VCS_DIR, validate_root};
