use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Per-item failures surfaced while walking and sizing.
///
/// None of these abort a pass: the offending item is logged, contributes
/// zero, and its siblings keep aggregating. Cancellation is a
/// [`crate::model::ScanStatus`], not an error.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The walker or accumulator could not read an entry.
    #[error("unreadable entry {}: {source}", .path.display())]
    UnreadableEntry {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The item is not a regular file and has no meaningful byte length.
    #[error("unsupported item type {tag} at {}", .path.display())]
    UnsupportedItemType { path: PathBuf, tag: String },
}
