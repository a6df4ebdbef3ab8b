use std::cmp::Ordering;
use std::path::PathBuf;

/// Computation state of one observed entry.
///
/// Transitions are `Pending -> Running -> Done` for a pass that runs to
/// completion; a pass that is superseded or torn down ends `Cancelled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanStatus {
    Pending,
    Running,
    Done,
    Cancelled,
}

impl ScanStatus {
    /// True once no pass will mutate the entry anymore.
    pub fn is_settled(self) -> bool {
        matches!(self, ScanStatus::Done | ScanStatus::Cancelled)
    }
}

/// One child of the subject root with its aggregated footprint.
///
/// Sizes grow monotonically while a pass is running and are only
/// eventually consistent when read mid-pass.
#[derive(Debug, Clone)]
pub struct FolderEntry {
    /// Canonical path string. Unique for the lifetime of one root
    /// observation and the tie-break key when sorting by size.
    pub id: String,
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    pub size: u64,
    /// Leaf items counted so far in the current pass.
    pub items: u64,
    pub status: ScanStatus,
}

impl FolderEntry {
    pub fn new(id: String, name: String, path: PathBuf, is_dir: bool) -> Self {
        Self {
            id,
            name,
            path,
            is_dir,
            size: 0,
            items: 0,
            status: ScanStatus::Pending,
        }
    }
}

/// Display ordering for entry lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sorting {
    #[default]
    Alphabetical,
    Size,
}

impl Sorting {
    /// Compare two entries under this ordering. Size sorts ascending with
    /// the entry id breaking ties, so equal sizes keep a stable order.
    pub fn compare(self, a: &FolderEntry, b: &FolderEntry) -> Ordering {
        match self {
            Sorting::Alphabetical => a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)),
            Sorting::Size => a.size.cmp(&b.size).then_with(|| a.id.cmp(&b.id)),
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Sorting::Alphabetical => Sorting::Size,
            Sorting::Size => Sorting::Alphabetical,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Sorting::Alphabetical => "name",
            Sorting::Size => "size",
        }
    }
}
