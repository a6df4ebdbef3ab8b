use std::path::PathBuf;

use crate::model::{FolderEntry, Sorting};

use super::selection;

/// Header-level summary of the current root observation.
#[derive(Debug, Clone, Default)]
pub struct ScanOverview {
    pub root: String,
    pub total_size: u64,
    pub scanned_at: Option<i64>,
    /// Entries whose pass has settled (Done or Cancelled).
    pub settled: usize,
    pub entries: usize,
}

/// ViewModel for the main folders list.
///
/// Holds a display snapshot refreshed from the scheduler each tick;
/// sizes of entries still running are eventually consistent.
pub struct FoldersViewModel {
    rows: Vec<FolderEntry>,
    overview: ScanOverview,
    selected_index: usize,
    sorting: Sorting,
}

impl FoldersViewModel {
    pub fn new(sorting: Sorting) -> Self {
        Self {
            rows: Vec::new(),
            overview: ScanOverview::default(),
            selected_index: 0,
            sorting,
        }
    }

    /// Replace the display snapshot. The selection follows the entry it
    /// was on if that entry still exists, so live re-sorting does not
    /// yank the cursor around.
    pub fn update(&mut self, rows: Vec<FolderEntry>, overview: ScanOverview) {
        let selected_id = self
            .rows
            .get(self.selected_index)
            .map(|e| e.id.clone());
        self.rows = rows;
        self.overview = overview;
        if let Some(id) = selected_id
            && let Some(index) = self.rows.iter().position(|e| e.id == id)
        {
            self.selected_index = index;
        }
        selection::clamp(&mut self.selected_index, self.rows.len());
    }

    pub fn rows(&self) -> &[FolderEntry] {
        &self.rows
    }

    pub fn overview(&self) -> &ScanOverview {
        &self.overview
    }

    pub fn sorting(&self) -> Sorting {
        self.sorting
    }

    pub fn toggle_sorting(&mut self) {
        self.sorting = self.sorting.toggled();
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected_entry(&self) -> Option<&FolderEntry> {
        self.rows.get(self.selected_index)
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_entry().map(|e| e.id.as_str())
    }

    /// Path of the selected entry when it can become the new subject
    /// root (directories only).
    pub fn selected_dir(&self) -> Option<PathBuf> {
        self.selected_entry()
            .filter(|e| e.is_dir)
            .map(|e| e.path.clone())
    }

    pub fn move_up(&mut self) {
        selection::move_up(&mut self.selected_index, self.rows.len());
    }

    pub fn move_down(&mut self) {
        selection::move_down(&mut self.selected_index, self.rows.len());
    }
}
