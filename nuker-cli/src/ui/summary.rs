use std::io::{self, Write};
use std::path::Path;

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use nuker_core::{SweepReport, format_count, format_elapsed};

use super::theme::Theme;

/// Print the sweep result: counters, failure kinds, elapsed time.
pub fn render_summary<W: Write>(
    out: &mut W,
    root: &Path,
    report: &SweepReport,
    theme: &Theme,
) -> io::Result<()> {
    let stats = &report.stats;

    queue!(
        out,
        SetForegroundColor(theme.fg),
        Print(format!("Swept {} ", root.display())),
        SetForegroundColor(theme.fg_dim),
        Print(format!("in {}\n", format_elapsed(report.elapsed))),
    )?;

    let deleted_color = if stats.files_deleted > 0 {
        theme.green
    } else {
        theme.fg_dim
    };
    let errors_color = if stats.errors > 0 { theme.red } else { theme.fg_dim };

    line(out, theme, "Scanned", stats.files_scanned, theme.blue)?;
    line(out, theme, "Deleted", stats.files_deleted, deleted_color)?;
    line(out, theme, "Errors", stats.errors, errors_color)?;

    for (failure, count) in report.failures.iter() {
        queue!(
            out,
            SetForegroundColor(theme.fg_dim),
            Print(format!("    {:>9}  {failure}\n", format_count(count.into()))),
        )?;
    }

    queue!(out, ResetColor)?;
    out.flush()
}

fn line<W: Write>(out: &mut W, theme: &Theme, label: &str, value: u32, color: Color) -> io::Result<()> {
    queue!(
        out,
        SetForegroundColor(theme.fg),
        Print(format!("  {label:<8}")),
        SetForegroundColor(color),
        Print(format!("{:>9}\n", format_count(value.into()))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use nuker_core::{DeleteFailure, ScanCounters};
    use std::time::Duration;

    fn rendered(counters: &ScanCounters) -> String {
        let report = SweepReport {
            stats: counters.snapshot(),
            failures: counters.failures(),
            elapsed: Duration::from_millis(42),
        };
        let mut out = Vec::new();
        render_summary(&mut out, Path::new("/data"), &report, &Theme::default()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_summary_counts() {
        let counters = ScanCounters::new();
        for _ in 0..12_345 {
            counters.record_scanned();
        }
        counters.record_deleted();

        let text = rendered(&counters);
        assert!(text.contains("Swept /data"));
        assert!(text.contains("42 ms"));
        assert!(text.contains("12,345"));
        assert!(text.contains("Deleted"));
        assert!(!text.contains("in use"));
    }

    #[test]
    fn test_summary_lists_failures() {
        let counters = ScanCounters::new();
        counters.record_scanned();
        counters.record_failure(DeleteFailure::InUse);

        let text = rendered(&counters);
        assert!(text.contains("file is in use"));
        assert!(!text.contains("access denied"));
    }
}
