// Shared test fixtures for integration tests
// Functions here are used across different test files
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use dirscope::config::ScanConfig;
use dirscope::scanner::{IncrementalScheduler, StepOutcome};

/// Create a temp directory populated with (relative path, byte count)
/// files; parent directories are created as needed.
pub fn create_tree(files: &[(&str, usize)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    populate(dir.path(), files);
    dir
}

/// Write files into an existing directory.
pub fn populate(root: &Path, files: &[(&str, usize)]) {
    for (rel, size) in files {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, vec![b'x'; *size]).unwrap();
    }
}

/// A started scheduler already observing `root`.
pub fn scheduler_at(root: &Path, config: ScanConfig) -> IncrementalScheduler {
    let mut scheduler = IncrementalScheduler::new(config);
    scheduler.start();
    scheduler.set_root(root).unwrap();
    scheduler
}

/// Step until every pass settles.
pub fn drain(scheduler: &mut IncrementalScheduler) {
    while scheduler.step() == StepOutcome::More {}
    scheduler.step();
}
