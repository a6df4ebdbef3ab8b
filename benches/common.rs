// Shared benchmark helpers
// Functions here are used across different benchmark files
#![allow(dead_code)]

use std::fs;

use tempfile::TempDir;

/// Generate a directory tree with `num_files` small files spread over
/// nested folders, for walker and scheduler benchmarks.
pub fn generate_tree(num_files: usize) -> TempDir {
    let dir = TempDir::new().unwrap();
    let exts = ["rs", "png", "txt", "bin", "md"];

    for i in 0..num_files {
        let sub = dir
            .path()
            .join(format!("dir_{}", i / 100))
            .join(format!("sub_{}", i / 20));
        fs::create_dir_all(&sub).unwrap();
        let file = sub.join(format!("file_{}.{}", i, exts[i % exts.len()]));
        fs::write(&file, vec![b'x'; (i % 512) + 1]).unwrap();
    }

    dir
}
