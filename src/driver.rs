use std::{io::Write, path::Path};

use anyhow::Result;
use log::info;

use crate::check::check_to;

/// Check every file and return the exit code: 1 if any was invalid, else 0.
///
/// Every file is checked even after one fails so that `log` reports all of
/// them. The first read error aborts the whole run.
pub fn run_to(filenames: &[impl AsRef<Path>], log: bool, out: &mut impl Write) -> Result<u8> {
    let mut invalid = 0usize;
    for filename in filenames {
        if check_to(filename, log, out)? {
            invalid += 1;
        }
    }

    info!("{invalid} of {} files invalid", filenames.len());

    Ok(if invalid > 0 { 1 } else { 0 })
}

/// Like `run_to` but diagnostics go to stdout.
pub fn run(filenames: &[impl AsRef<Path>], log: bool) -> Result<u8> {
    run_to(filenames, log, &mut std::io::stdout().lock())
}
