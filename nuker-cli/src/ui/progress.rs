use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossterm::{
    cursor, queue,
    style::{Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
    tty::IsTty,
};

use super::theme::Theme;

/// Braille spinner characters
const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

const TICK: Duration = Duration::from_millis(80);

/// Spinner on stderr while a sweep blocks the main thread.
///
/// The engine reports nothing until it is done, so this only shows that
/// work is happening and for how long.
pub struct Spinner {
    done: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    /// Start spinning, or do nothing when stderr is not a terminal.
    pub fn start(root: &Path) -> Self {
        let done = Arc::new(AtomicBool::new(false));
        if !io::stderr().is_tty() {
            return Self { done, handle: None };
        }

        let done_for_thread = Arc::clone(&done);
        let label = root.display().to_string();
        let handle = thread::spawn(move || {
            let theme = Theme::default();
            let start = Instant::now();
            let mut frame = 0;
            while !done_for_thread.load(Ordering::Relaxed) {
                let _ = draw(&theme, frame, &label, start.elapsed());
                frame = (frame + 1) % SPINNER.len();
                thread::sleep(TICK);
            }
            let mut stderr = io::stderr();
            let _ = queue!(stderr, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine));
            let _ = stderr.flush();
        });

        Self {
            done,
            handle: Some(handle),
        }
    }

    pub fn stop(mut self) {
        self.finish();
    }

    fn finish(&mut self) {
        self.done.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.finish();
    }
}

fn draw(theme: &Theme, frame: usize, label: &str, elapsed: Duration) -> io::Result<()> {
    let mut stderr = io::stderr();
    queue!(
        stderr,
        cursor::MoveToColumn(0),
        Clear(ClearType::CurrentLine),
        SetForegroundColor(theme.blue),
        Print(SPINNER[frame]),
        SetForegroundColor(theme.fg),
        Print(format!(" Sweeping {label} ")),
        SetForegroundColor(theme.fg_dim),
        Print(format!("{:.1}s", elapsed.as_secs_f64())),
        ResetColor,
    )?;
    stderr.flush()
}
