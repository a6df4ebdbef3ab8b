use crate::model::TypeStats;

use super::selection;

/// One row of the per-type breakdown.
#[derive(Debug, Clone)]
pub struct TypeRow {
    pub tag: String,
    pub size: u64,
    pub file_count: u64,
}

/// ViewModel for the type breakdown view. Rows come from completed
/// passes only, so the breakdown never shows half-scanned numbers.
pub struct TypesViewModel {
    rows: Vec<TypeRow>,
    selected_index: usize,
    total_size: u64,
    total_files: u64,
}

impl TypesViewModel {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            selected_index: 0,
            total_size: 0,
            total_files: 0,
        }
    }

    /// Replace the rows; input is expected largest-first.
    pub fn update(&mut self, stats: Vec<(String, TypeStats)>) {
        self.rows = stats
            .into_iter()
            .map(|(tag, s)| TypeRow {
                tag,
                size: s.size,
                file_count: s.file_count,
            })
            .collect();
        self.total_size = self.rows.iter().map(|r| r.size).sum();
        self.total_files = self.rows.iter().map(|r| r.file_count).sum();
        selection::clamp(&mut self.selected_index, self.rows.len());
    }

    pub fn rows(&self) -> &[TypeRow] {
        &self.rows
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn total_size(&self) -> u64 {
        self.total_size
    }

    pub fn total_files(&self) -> u64 {
        self.total_files
    }

    pub fn move_up(&mut self) {
        selection::move_up(&mut self.selected_index, self.rows.len());
    }

    pub fn move_down(&mut self) {
        selection::move_down(&mut self.selected_index, self.rows.len());
    }
}

impl Default for TypesViewModel {
    fn default() -> Self {
        Self::new()
    }
}
