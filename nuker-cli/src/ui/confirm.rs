use std::io::{self, BufRead, Write};
use std::path::Path;

use crossterm::{
    queue,
    style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor},
};

use super::theme::Theme;

/// Ask before deleting anything. Only `y` / `yes` (any case) confirms.
pub fn confirm_sweep<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    root: &Path,
    theme: &Theme,
) -> io::Result<bool> {
    queue!(
        out,
        SetForegroundColor(theme.yellow),
        SetAttribute(Attribute::Bold),
        Print("Delete reserved-name files"),
        SetAttribute(Attribute::Reset),
        SetForegroundColor(theme.fg),
        Print(format!(" under {}? ", root.display())),
        SetForegroundColor(theme.fg_dim),
        Print("[y/N] "),
        ResetColor,
    )?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim();
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}
