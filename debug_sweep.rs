// Run with: cargo run --example debug_sweep -- [file_count]
// Builds a throwaway tree, plants reserved names, and times sweeps at several thread counts.

use std::fs;
use std::path::Path;
use std::time::Instant;

use nuker_core::{RESERVED_NAMES, SweepConfig, Sweeper, format_count, format_elapsed, raw_path};

fn plant(root: &Path, file_count: usize) {
    for i in 0..file_count {
        let dir = root.join(format!("d{}", i % 64)).join(format!("e{}", i % 7));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(format!("file{i}.txt")), b"x").unwrap();
    }
    for (i, name) in RESERVED_NAMES.iter().enumerate() {
        let dir = root.join(format!("d{i}"));
        fs::create_dir_all(&dir).unwrap();
        let file = dir.join(name);
        fs::write(raw_path(&file).unwrap(), b"x").unwrap();
    }
}

fn main() {
    let file_count = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(50_000);

    let cpus = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    let mut thread_counts = vec![1, 2, 4, cpus];
    thread_counts.sort_unstable();
    thread_counts.dedup();

    for threads in thread_counts {
        let temp = tempfile::TempDir::new().unwrap();

        let start = Instant::now();
        plant(temp.path(), file_count);
        let planted = start.elapsed();

        let report = Sweeper::new(SweepConfig { num_threads: threads })
            .run(temp.path())
            .unwrap();

        println!(
            "threads={:<3} scanned={:<10} deleted={:<3} errors={:<3} sweep={:<10} (setup {})",
            threads,
            format_count(report.stats.files_scanned.into()),
            report.stats.files_deleted,
            report.stats.errors,
            format_elapsed(report.elapsed),
            format_elapsed(planted),
        );
    }
}
