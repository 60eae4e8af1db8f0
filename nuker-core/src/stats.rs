use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use crate::error::DeleteFailure;

/// Result of one sweep, as returned across the C ABI.
///
/// Field order and `repr(C)` are part of the ABI; hosts declare the same
/// three `uint32_t` fields.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Non-directory entries visited
    pub files_scanned: u32,
    /// Reserved-name files removed
    pub files_deleted: u32,
    /// Listing failures plus failed deletes
    pub errors: u32,
}

impl ScanStats {
    pub const fn new() -> Self {
        Self {
            files_scanned: 0,
            files_deleted: 0,
            errors: 0,
        }
    }

    /// Sentinel for rejected input: `{0, 0, 1}`.
    pub const fn invalid_input() -> Self {
        Self {
            files_scanned: 0,
            files_deleted: 0,
            errors: 1,
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        *self == Self::invalid_input()
    }
}

/// Delete failures by kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FailureBreakdown {
    counts: [u32; DeleteFailure::ALL.len()],
}

impl FailureBreakdown {
    pub fn get(&self, failure: DeleteFailure) -> u32 {
        self.counts[failure.index()]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Non-zero kinds, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (DeleteFailure, u32)> + '_ {
        DeleteFailure::ALL
            .into_iter()
            .map(|f| (f, self.get(f)))
            .filter(|&(_, n)| n > 0)
    }
}

/// Everything a Rust caller gets back from a sweep.
#[derive(Debug, Clone, Copy)]
pub struct SweepReport {
    pub stats: ScanStats,
    pub failures: FailureBreakdown,
    pub elapsed: Duration,
}

/// Counters shared by all walker threads.
///
/// Each counter is independent, so `Relaxed` is enough; the pool join before
/// [`ScanCounters::snapshot`] is what makes the totals visible.
#[derive(Debug, Default)]
pub struct ScanCounters {
    scanned: AtomicU32,
    deleted: AtomicU32,
    errors: AtomicU32,
    failures: [AtomicU32; DeleteFailure::ALL.len()],
}

impl ScanCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_scanned(&self) {
        self.scanned.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_deleted(&self) {
        self.deleted.fetch_add(1, Ordering::Relaxed);
    }

    /// Listing or traversal error; not tied to a delete.
    pub fn record_error(&self) {
        self.errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failure(&self, failure: DeleteFailure) {
        self.errors.fetch_add(1, Ordering::Relaxed);
        self.failures[failure.index()].fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> ScanStats {
        ScanStats {
            files_scanned: self.scanned.load(Ordering::Relaxed),
            files_deleted: self.deleted.load(Ordering::Relaxed),
            errors: self.errors.load(Ordering::Relaxed),
        }
    }

    pub fn failures(&self) -> FailureBreakdown {
        let mut counts = [0; DeleteFailure::ALL.len()];
        for (count, atomic) in counts.iter_mut().zip(&self.failures) {
            *count = atomic.load(Ordering::Relaxed);
        }
        FailureBreakdown { counts }
    }
}
