use std::time::{Duration, Instant};

use tracing::warn;

use crate::input::Intent;
use crate::model::Sorting;
use crate::scanner::{IncrementalScheduler, StepOutcome};

use super::folders_viewmodel::ScanOverview;
use super::{FilesViewModel, FoldersViewModel, TypesViewModel};

/// Current view mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Folders,
    ByType,
    LargestFiles,
}

/// Action to take after handling an intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Redraw,
    Quit,
}

/// Main application ViewModel: owns the scheduler and coordinates the
/// view-specific ViewModels from its snapshots.
pub struct AppViewModel {
    scheduler: IncrementalScheduler,
    view_mode: ViewMode,
    pub folders_vm: FoldersViewModel,
    pub types_vm: TypesViewModel,
    pub files_vm: FilesViewModel,
}

impl AppViewModel {
    pub fn new(scheduler: IncrementalScheduler, sorting: Sorting) -> Self {
        let mut vm = Self {
            scheduler,
            view_mode: ViewMode::Folders,
            folders_vm: FoldersViewModel::new(sorting),
            types_vm: TypesViewModel::new(),
            files_vm: FilesViewModel::new(),
        };
        vm.sync();
        vm
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn is_scanning(&self) -> bool {
        !self.scheduler.is_idle()
    }

    /// True when the subject root has a parent to navigate back to.
    pub fn can_go_back(&self) -> bool {
        self.scheduler
            .root()
            .and_then(|r| r.parent())
            .is_some()
    }

    /// Drive in-flight passes for at most `budget`, then refresh the
    /// view snapshots. Returns early once every pass has settled.
    pub fn tick(&mut self, budget: Duration) {
        let started = Instant::now();
        loop {
            if self.scheduler.step() == StepOutcome::Idle {
                break;
            }
            if started.elapsed() >= budget {
                break;
            }
        }
        self.sync();
    }

    /// Cancel in-flight passes and release the scheduler.
    pub fn shutdown(&mut self) {
        self.scheduler.stop();
        self.sync();
    }

    fn sync(&mut self) {
        let (settled, entries) = self.scheduler.progress();
        let overview = ScanOverview {
            root: self
                .scheduler
                .root()
                .map(|r| r.display().to_string())
                .unwrap_or_default(),
            total_size: self.scheduler.total_size(),
            scanned_at: self.scheduler.scanned_at(),
            settled,
            entries,
        };
        self.folders_vm
            .update(self.scheduler.entries(self.folders_vm.sorting()), overview);
        self.types_vm.update(self.scheduler.type_stats());
        self.files_vm.update(self.scheduler.largest_files());
    }

    fn move_up_current(&mut self) {
        match self.view_mode {
            ViewMode::Folders => self.folders_vm.move_up(),
            ViewMode::ByType => self.types_vm.move_up(),
            ViewMode::LargestFiles => self.files_vm.move_up(),
        }
    }

    fn move_down_current(&mut self) {
        match self.view_mode {
            ViewMode::Folders => self.folders_vm.move_down(),
            ViewMode::ByType => self.types_vm.move_down(),
            ViewMode::LargestFiles => self.files_vm.move_down(),
        }
    }

    fn enter_selected(&mut self) {
        if self.view_mode != ViewMode::Folders {
            return;
        }
        if let Some(dir) = self.folders_vm.selected_dir()
            && let Err(err) = self.scheduler.set_root(&dir)
        {
            warn!("could not enter {}: {err:#}", dir.display());
        }
        self.sync();
    }

    fn go_back(&mut self) {
        if self.view_mode != ViewMode::Folders {
            return;
        }
        let parent = self
            .scheduler
            .root()
            .and_then(|r| r.parent())
            .map(|p| p.to_path_buf());
        if let Some(parent) = parent {
            if let Err(err) = self.scheduler.set_root(&parent) {
                warn!("could not go back to {}: {err:#}", parent.display());
            }
            self.sync();
        }
    }

    /// Handle a user intent and return the action to take
    pub fn handle_intent(&mut self, intent: Intent) -> Action {
        match intent {
            Intent::Quit => return Action::Quit,

            Intent::ShowFolders => self.view_mode = ViewMode::Folders,
            Intent::ShowTypes => self.view_mode = ViewMode::ByType,
            Intent::ShowLargestFiles => self.view_mode = ViewMode::LargestFiles,

            Intent::MoveUp => self.move_up_current(),
            Intent::MoveDown => self.move_down_current(),
            Intent::Enter => self.enter_selected(),
            Intent::Back => self.go_back(),

            Intent::ToggleSorting => {
                self.folders_vm.toggle_sorting();
                self.sync();
            }

            Intent::Refresh => {
                if let Some(id) = self.folders_vm.selected_id().map(str::to_string) {
                    self.scheduler.refresh(&id);
                    self.sync();
                }
            }

            Intent::RefreshAll => {
                self.scheduler.refresh_all();
                self.sync();
            }
        }
        Action::Redraw
    }

    /// Get the ViewMode as input::ViewMode for key mapping
    pub fn input_view_mode(&self) -> crate::input::ViewMode {
        match self.view_mode {
            ViewMode::Folders => crate::input::ViewMode::Folders,
            ViewMode::ByType => crate::input::ViewMode::ByType,
            ViewMode::LargestFiles => crate::input::ViewMode::LargestFiles,
        }
    }

}
