use std::{fs, io::Write, path::Path};

use anyhow::{Context as _, Result};
use derive_more::Display;
use log::debug;

use crate::glyph::{contains_forbidden, first_forbidden};

/// The first thing in a file that broke the lipogram. Its `Display` form is
/// the diagnostic line that `--log` prints.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum Violation {
    /// The filename itself contains a forbidden glyph.
    #[display("Invalid naming: {_0}")]
    Naming(String),
    /// A line of the file contains a forbidden glyph. This is the line's
    /// text exactly as read.
    #[display("Invalid string: {_0}")]
    Content(String),
}

/// Characters that end a line, on top of `\r\n` which counts as one break.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\x0b'
            | '\x0c'
            | '\x1c'
            | '\x1d'
            | '\x1e'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Split text into lines. Empty lines are kept but a trailing line break
/// does not produce an empty final line.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        let current = rest;
        if current.is_empty() {
            return None;
        }
        match current.char_indices().find(|&(_, c)| is_line_break(c)) {
            Some((at, c)) => {
                let mut end = at + c.len_utf8();
                if c == '\r' && current[end..].starts_with('\n') {
                    end += 1;
                }
                rest = &current[end..];
                Some(&current[..at])
            }
            None => {
                rest = "";
                Some(current)
            }
        }
    })
}

/// Find the first violation for `path`. The whole filename string is
/// checked first (directories included), and if it fails the file is never
/// opened. Otherwise lines are checked in order until one fails.
///
/// Names that aren't UTF-8 are checked in their lossy form.
pub fn find_violation(path: &Path) -> Result<Option<Violation>> {
    let filename = path.to_string_lossy();
    if let Some(glyph) = first_forbidden(&filename) {
        debug!("{filename}: name contains {glyph:?}");
        return Ok(Some(Violation::Naming(filename.into_owned())));
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read '{}'", path.display()))?;

    let violation = split_lines(&content)
        .enumerate()
        .find(|(_, line)| contains_forbidden(line))
        .map(|(index, line)| {
            debug!("{filename}:{}: line contains a forbidden glyph", index + 1);
            Violation::Content(line.to_owned())
        });

    Ok(violation)
}

/// Returns true if `filename` is invalid, writing the diagnostic to `out`
/// when `log` is set.
pub fn check_to(filename: impl AsRef<Path>, log: bool, out: &mut impl Write) -> Result<bool> {
    match find_violation(filename.as_ref())? {
        Some(violation) => {
            if log {
                writeln!(out, "{violation}")?;
            }
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Like `check_to` but diagnostics go to stdout.
pub fn check(filename: impl AsRef<Path>, log: bool) -> Result<bool> {
    check_to(filename, log, &mut std::io::stdout().lock())
}
