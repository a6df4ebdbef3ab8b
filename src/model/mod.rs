mod entry;
mod stats;

pub use entry::{FolderEntry, ScanStatus, Sorting};
pub use stats::{LargeFileInfo, TypeStats};
