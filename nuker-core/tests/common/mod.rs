#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use nuker_core::raw_path;

/// Create a file, going through the raw path so reserved names work on Windows.
pub fn create_file(path: &Path) {
    fs::write(raw_path(path).unwrap(), b"x").unwrap();
}

pub fn create_dir(path: &Path) {
    fs::create_dir_all(raw_path(path).unwrap()).unwrap();
}

pub fn exists(path: &Path) -> bool {
    fs::symlink_metadata(raw_path(path).unwrap()).is_ok()
}

/// `count` ordinary files spread over a few subdirectories.
pub fn populate(root: &Path, count: usize) -> Vec<PathBuf> {
    let mut files = Vec::with_capacity(count);
    for i in 0..count {
        let dir = root.join(format!("d{}", i % 16));
        if i < 16 {
            create_dir(&dir);
        }
        let file = dir.join(format!("file{i}.txt"));
        create_file(&file);
        files.push(file);
    }
    files
}

/// Every ASCII letter-case variant of `name`.
pub fn case_permutations(name: &str) -> Vec<String> {
    let letters: Vec<usize> = name
        .char_indices()
        .filter(|(_, c)| c.is_ascii_alphabetic())
        .map(|(i, _)| i)
        .collect();

    (0..1u32 << letters.len())
        .map(|mask| {
            let mut bytes = name.as_bytes().to_vec();
            for (bit, &idx) in letters.iter().enumerate() {
                if mask & (1 << bit) != 0 {
                    bytes[idx] = bytes[idx].to_ascii_uppercase();
                } else {
                    bytes[idx] = bytes[idx].to_ascii_lowercase();
                }
            }
            String::from_utf8(bytes).unwrap()
        })
        .collect()
}
