//! Shared helpers for unit tests.

use std::path::PathBuf;

/// Write `contents` to a fresh CSV file in the OS temp dir and return its path.
pub fn write_csv(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("chartify_candles_{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join(format!("{name}.csv"));
    std::fs::write(&path, contents).expect("write csv fixture");
    path
}
