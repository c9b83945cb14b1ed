//! Shared helpers for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Creates an empty scratch directory unique to this test process
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("pgmbatch-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Writes a P5 file with the given header and sample bytes
pub fn write_p5(path: &Path, width: usize, height: usize, samples: &[u8]) {
    let mut buffer = format!("P5\n{} {}\n255\n", width, height).into_bytes();
    buffer.extend_from_slice(samples);
    fs::write(path, buffer).unwrap();
}

/// Sorted file names of a directory
pub fn list_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
