use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use pr_commit::contains_forbidden;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub fn pr_commit_cmd() -> Command {
    cargo_bin_cmd!("pr-commit")
}

/// A temp dir whose path has no forbidden glyphs, so fixtures inside it
/// pass the filename check.
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
        "no temp dir without forbidden glyphs in {}",
        std::env::temp_dir().display()
    );
}

pub fn write_file(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, content).expect("write fixture");
    path.to_str().expect("utf-8 path").to_owned()
}
