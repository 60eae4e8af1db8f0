mod ui;

use std::io::{self, stdout};
use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::eyre;
use nuker_core::{SweepConfig, Sweeper};
use tracing_subscriber::EnvFilter;

use ui::{Spinner, Theme, confirm_sweep, render_summary};

/// NUKER - delete Windows reserved-name files (nul, con, prn, aux, com1-9, lpt1-9)
#[derive(Parser, Debug)]
#[command(name = "nuker")]
#[command(about = "Delete files named after Windows reserved devices from a directory tree")]
#[command(version)]
struct Args {
    /// Directory to sweep (defaults to current directory)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Number of worker threads (0 = one per logical CPU)
    #[arg(short = 'j', long, default_value_t = 0)]
    threads: usize,

    /// Do not ask for confirmation
    #[arg(short, long)]
    yes: bool,

    /// Log every deletion and failure (-v), or everything (-vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_tracing(args.verbose);

    // Resolve path; the engine wants an absolute directory
    let path = std::path::absolute(&args.path)?;

    if !path.exists() {
        eprintln!("Error: Path does not exist: {}", path.display());
        std::process::exit(1);
    }
    if !path.is_dir() {
        eprintln!("Error: Path is not a directory: {}", path.display());
        std::process::exit(1);
    }

    let theme = Theme::default();

    if !args.yes && !confirm_sweep(&mut io::stdin().lock(), &mut stdout(), &path, &theme)? {
        return Ok(());
    }

    let sweeper = Sweeper::new(SweepConfig {
        num_threads: args.threads,
    });

    let spinner = Spinner::start(&path);
    let result = sweeper.run(&path);
    spinner.stop();

    let report = result?;
    render_summary(&mut stdout(), &path, &report, &theme)?;

    if report.stats.errors > 0 {
        return Err(eyre!(
            "{} entries could not be read or deleted",
            report.stats.errors
        ));
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "nuker_core=debug",
        _ => "trace",
    };

    // RUST_LOG wins over -v
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
