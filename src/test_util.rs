use std::{fs, path::Path};

use tempfile::TempDir;

use crate::glyph::contains_forbidden;

/// A temp dir whose path has no forbidden glyphs, so fixtures inside it
/// pass the filename check. The random part of the name is retried until
/// it's clean.
pub fn clean_dir() -> TempDir {
    for _ in 0..100 {
        let dir = tempfile::Builder::new()
            .prefix("pr-commit-")
            .tempdir()
            .expect("create temp dir");
        if !contains_forbidden(&dir.path().to_string_lossy()) {
            return dir;
        }
    }
    panic!(
        "could not make a temp dir without forbidden glyphs in {}",
        std::env::temp_dir().display()
    );
}

/// Write `content` to `name` in `dir` and return the full path as a string.
pub fn write_file(dir: &Path, name: &str, content: impl AsRef<[u8]>) -> String {
    let path = dir.join(name);
    fs::write(&path, content).expect("write fixture");
    path.to_str().expect("utf-8 path").to_owned()
}
