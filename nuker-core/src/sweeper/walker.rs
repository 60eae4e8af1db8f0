use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

use jwalk::{DirEntry, Parallelism, WalkDir};

use crate::delete::delete_reserved_file;
use crate::error::{DeleteFailure, NukerError, Result};
use crate::path::raw_path;
use crate::reserved::is_reserved_name;
use crate::stats::{ScanCounters, SweepReport};

/// Directory never descended into, matched exactly.
pub const VCS_DIR: &str = ".git";

/// Sweep configuration
#[derive(Debug, Clone, Default)]
pub struct SweepConfig {
    /// Number of worker threads (0 = one per logical CPU)
    pub num_threads: usize,
}

impl SweepConfig {
    fn threads(&self) -> usize {
        if self.num_threads > 0 {
            self.num_threads
        } else {
            thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        }
    }
}

/// Deletes one matched file.
type DeleteFn = fn(&Path) -> std::result::Result<(), DeleteFailure>;

/// Reserved-name sweeper
///
/// Every [`Sweeper::run`] builds its own thread pool and counters, so
/// concurrent runs on different trees do not share anything.
#[derive(Debug, Clone)]
pub struct Sweeper {
    config: SweepConfig,
    delete: DeleteFn,
}

impl Default for Sweeper {
    fn default() -> Self {
        Self::new(SweepConfig::default())
    }
}

impl Sweeper {
    pub fn new(config: SweepConfig) -> Self {
        Self {
            config,
            delete: delete_reserved_file,
        }
    }

    #[cfg(test)]
    fn with_deleter(mut self, delete: DeleteFn) -> Self {
        self.delete = delete;
        self
    }

    /// Walk `root` and delete every reserved-name file under it.
    ///
    /// Blocks until the whole tree has been visited. Only an unusable root is
    /// an `Err`; problems below it are counted in the report.
    pub fn run(&self, root: &Path) -> Result<SweepReport> {
        let root = validate_root(root)?;
        let start = Instant::now();
        let counters = Arc::new(ScanCounters::new());

        tracing::debug!(root = %root.display(), threads = self.config.threads(), "starting sweep");
        self.walk(&root, &counters);

        let report = SweepReport {
            stats: counters.snapshot(),
            failures: counters.failures(),
            elapsed: start.elapsed(),
        };
        tracing::debug!(
            scanned = report.stats.files_scanned,
            deleted = report.stats.files_deleted,
            errors = report.stats.errors,
            "sweep finished"
        );
        Ok(report)
    }

    fn walk(&self, root: &Path, counters: &Arc<ScanCounters>) {
        let worker_counters = Arc::clone(counters);
        let delete = self.delete;

        // process_read_dir runs on the pool threads, so matching and deleting
        // happen in parallel; this thread only drains results.
        let walker = WalkDir::new(root)
            .skip_hidden(false)
            .follow_links(true)
            .sort(false)
            .parallelism(Parallelism::RayonNewPool(self.config.threads()))
            .process_read_dir(move |depth, _path, _read_dir_state, children| {
                // depth is None for the synthetic read that yields the root itself
                if depth.is_none() {
                    return;
                }

                children.retain(|entry| !matches!(entry, Ok(e) if is_vcs_dir(e)));

                for entry in children.iter().flatten() {
                    if !entry.file_type().is_dir() {
                        sweep_file(entry, &worker_counters, delete);
                    }
                }
            });

        // Every read_dir result passes through here after its
        // process_read_dir call, so once this loop ends the counters are final.
        for entry in walker {
            if let Err(err) = entry {
                tracing::warn!(error = %err, "cannot read entry");
                counters.record_error();
            }
        }
    }
}

fn is_vcs_dir(entry: &DirEntry<((), ())>) -> bool {
    entry.file_type().is_dir() && entry.file_name() == VCS_DIR
}

fn sweep_file(entry: &DirEntry<((), ())>, counters: &ScanCounters, delete: DeleteFn) {
    counters.record_scanned();

    if !is_reserved_name(entry.file_name()) {
        return;
    }

    match delete(&entry.path()) {
        Ok(()) => counters.record_deleted(),
        Err(failure) => counters.record_failure(failure),
    }
}

/// Check that `root` is an existing absolute directory and return the path
/// the walk starts from.
///
/// On Windows that is the verbatim form, so children come out already
/// escaped and directories with reserved names can still be listed.
pub fn validate_root(root: &Path) -> Result<PathBuf> {
    if root.as_os_str().is_empty() {
        return Err(NukerError::EmptyPath);
    }

    let raw = raw_path(root)?;
    match fs::metadata(&raw) {
        Ok(meta) if meta.is_dir() => Ok(raw),
        Ok(_) => Err(NukerError::NotADirectory(root.to_path_buf())),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            Err(NukerError::PathNotFound(root.to_path_buf()))
        }
        Err(err) => Err(NukerError::Io(err)),
    }
}
