//! Lipogram gate for pre-commit: fails when a filename or any line of a file
//! contains a form of the fifth glyph.

pub mod check;
pub mod driver;
pub mod glyph;
#[cfg(test)]
mod test_util;

pub use check::{Violation, check, check_to, find_violation};
pub use driver::{run, run_to};
pub use glyph::{FORBIDDEN_GLYPHS, contains_forbidden, first_forbidden};
