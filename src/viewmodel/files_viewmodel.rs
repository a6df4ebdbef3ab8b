use crate::model::LargeFileInfo;

use super::selection;

/// ViewModel for the largest-files view.
pub struct FilesViewModel {
    files: Vec<LargeFileInfo>,
    selected_index: usize,
}

impl FilesViewModel {
    pub fn new() -> Self {
        Self {
            files: Vec::new(),
            selected_index: 0,
        }
    }

    /// Replace the rows; input is expected largest-first.
    pub fn update(&mut self, files: Vec<LargeFileInfo>) {
        self.files = files;
        selection::clamp(&mut self.selected_index, self.files.len());
    }

    pub fn files(&self) -> &[LargeFileInfo] {
        &self.files
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected_path(&self) -> Option<&str> {
        self.files.get(self.selected_index).map(|f| f.path.as_str())
    }

    pub fn move_up(&mut self) {
        selection::move_up(&mut self.selected_index, self.files.len());
    }

    pub fn move_down(&mut self) {
        selection::move_down(&mut self.selected_index, self.files.len());
    }
}

impl Default for FilesViewModel {
    fn default() -> Self {
        Self::new()
    }
}
