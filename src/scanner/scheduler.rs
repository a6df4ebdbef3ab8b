use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::config::ScanConfig;
use crate::model::{FolderEntry, LargeFileInfo, ScanStatus, Sorting, TypeStats};
use crate::util::display_rel;

use super::accumulator::SizeAccumulator;
use super::error::ScanError;
use super::store::{ScanSnapshot, SnapshotEntry, SnapshotStore};
use super::walker::{PathWalker, Walk};

/// Largest leaves retained per completed pass.
const TOP_FILES: usize = 50;

/// Outcome of one scheduler step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// At least one pass still has work; call `step` again.
    More,
    /// Every pass has settled.
    Idle,
}

/// Per-pass tallies, merged into the scheduler's stats only when the pass
/// runs to completion so partial passes never pollute the breakdown views.
#[derive(Debug, Clone, Default)]
struct PassStats {
    by_tag: FxHashMap<String, TypeStats>,
    top_files: Vec<LargeFileInfo>,
}

impl PassStats {
    fn record(&mut self, tag: &str, size: u64, path: String, modified: i64) {
        if let Some(stats) = self.by_tag.get_mut(tag) {
            stats.add(size);
        } else {
            let mut stats = TypeStats::default();
            stats.add(size);
            self.by_tag.insert(tag.to_string(), stats);
        }

        self.top_files.push(LargeFileInfo {
            path,
            size,
            modified,
        });
        if self.top_files.len() >= TOP_FILES * 2 {
            self.prune();
        }
    }

    fn prune(&mut self) {
        self.top_files
            .sort_unstable_by(|a, b| b.size.cmp(&a.size).then_with(|| a.path.cmp(&b.path)));
        self.top_files.truncate(TOP_FILES);
    }

    fn finish(mut self) -> Self {
        self.prune();
        self
    }
}

/// One in-flight size-computation pass over a single entry's subtree.
struct ScanTask {
    id: String,
    walk: Walk,
    started: bool,
    stats: PassStats,
}

impl ScanTask {
    fn new(id: String, walk: Walk) -> Self {
        Self {
            id,
            walk,
            started: false,
            stats: PassStats::default(),
        }
    }
}

/// Cooperative scheduler computing per-entry aggregate sizes.
///
/// The embedding loop drives it by calling [`step`](Self::step) whenever
/// it has spare time; each step processes one bounded batch of leaves
/// from the front pass and rotates unfinished passes round-robin, so no
/// single folder can starve the loop. All entry mutation happens here, on
/// the calling thread; readers get eventually-consistent clones.
pub struct IncrementalScheduler {
    config: ScanConfig,
    accumulator: SizeAccumulator,
    store: Option<Box<dyn SnapshotStore>>,
    root: Option<PathBuf>,
    entries: FxHashMap<String, FolderEntry>,
    tasks: VecDeque<ScanTask>,
    stats_by_entry: FxHashMap<String, PassStats>,
    scanned_at: Option<i64>,
    running: bool,
    snapshot_dirty: bool,
}

impl IncrementalScheduler {
    pub fn new(config: ScanConfig) -> Self {
        let accumulator =
            SizeAccumulator::new(config.excluded.clone(), config.follow_links);
        Self {
            config,
            accumulator,
            store: None,
            root: None,
            entries: FxHashMap::default(),
            tasks: VecDeque::new(),
            stats_by_entry: FxHashMap::default(),
            scanned_at: None,
            running: false,
            snapshot_dirty: false,
        }
    }

    /// Attach a snapshot store; completed pass sets are persisted to it
    /// and observed roots are seeded from it.
    pub fn with_store(mut self, store: Box<dyn SnapshotStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Begin serving passes. Until `start` is called, `step` is a no-op.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Cancel every pass still in flight and stop serving requests.
    pub fn stop(&mut self) {
        let ids: Vec<String> = self.tasks.iter().map(|t| t.id.clone()).collect();
        for id in ids {
            if let Some(entry) = self.entries.get_mut(&id) {
                entry.status = ScanStatus::Cancelled;
            }
        }
        self.tasks.clear();
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Point the scheduler at a new subject root.
    ///
    /// Replaces the entry map wholesale: passes for the old root are
    /// dropped, the new root's immediate children are observed, and a
    /// matching snapshot (if a store is attached) seeds entries as `Done`
    /// so they are not recomputed until explicitly refreshed. Observing
    /// the root it already has is a no-op.
    pub fn set_root(&mut self, root: &Path) -> Result<()> {
        let root = fs::canonicalize(root)
            .with_context(|| format!("could not resolve root {}", root.display()))?;
        if self.root.as_deref() == Some(&root) {
            return Ok(());
        }
        let children = self.observe_children(&root)?;

        self.tasks.clear();
        self.entries.clear();
        self.stats_by_entry.clear();
        self.scanned_at = None;
        self.snapshot_dirty = false;

        for entry in children {
            self.entries.insert(entry.id.clone(), entry);
        }

        if let Some(snapshot) = self.store.as_ref().and_then(|s| s.load(&root)) {
            self.seed_from_snapshot(snapshot);
        }

        let mut pending: Vec<&FolderEntry> = self
            .entries
            .values()
            .filter(|e| e.status == ScanStatus::Pending)
            .collect();
        pending.sort_by(|a, b| a.name.cmp(&b.name));
        let queue: Vec<(String, PathBuf)> = pending
            .into_iter()
            .map(|e| (e.id.clone(), e.path.clone()))
            .collect();
        for (id, path) in queue {
            self.enqueue_pass(id, &path);
        }

        self.root = Some(root);
        Ok(())
    }

    fn observe_children(&self, root: &Path) -> Result<Vec<FolderEntry>> {
        let mut children = Vec::new();
        let read_dir = fs::read_dir(root)
            .with_context(|| format!("could not read root {}", root.display()))?;
        for result in read_dir {
            let dir_entry = match result {
                Ok(e) => e,
                Err(source) => {
                    warn!(
                        "skipping: {}",
                        ScanError::UnreadableEntry {
                            path: root.to_path_buf(),
                            source,
                        }
                    );
                    continue;
                }
            };
            let path = dir_entry.path();
            let is_dir = dir_entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            let name = dir_entry.file_name().to_string_lossy().into_owned();
            let id = path.to_string_lossy().into_owned();
            children.push(FolderEntry::new(id, name, path, is_dir));
        }
        Ok(children)
    }

    fn seed_from_snapshot(&mut self, snapshot: ScanSnapshot) {
        let mut seeded = 0usize;
        for row in snapshot.entries {
            let Some(entry) = self.entries.get_mut(&row.id) else {
                continue;
            };
            entry.size = row.size;
            entry.items = row.items;
            entry.status = ScanStatus::Done;
            self.stats_by_entry.insert(
                row.id,
                PassStats {
                    by_tag: row.types.into_iter().collect(),
                    top_files: row.top_files,
                },
            );
            seeded += 1;
        }
        if seeded > 0 {
            self.scanned_at = Some(snapshot.scanned_at);
            debug!("seeded {seeded} entries from snapshot");
        }
    }

    fn enqueue_pass(&mut self, id: String, path: &Path) {
        let walk = PathWalker::new(path)
            .follow_links(self.config.follow_links)
            .walk();
        if let Some(entry) = self.entries.get_mut(&id) {
            entry.status = ScanStatus::Pending;
        }
        self.tasks.push_back(ScanTask::new(id, walk));
    }

    /// Request computation for one entry. A no-op while a pass is already
    /// queued or running, and for `Done` entries (recomputation is
    /// explicit via [`refresh`](Self::refresh)); a `Cancelled` entry gets
    /// a fresh pass.
    pub fn request(&mut self, id: &str) {
        let Some(entry) = self.entries.get(id) else {
            return;
        };
        if entry.status != ScanStatus::Cancelled {
            return;
        }
        let path = entry.path.clone();
        self.enqueue_pass(id.to_string(), &path);
    }

    /// Explicitly recompute one entry. Any in-flight pass for it is
    /// superseded; the entry's size resets to zero when the new pass
    /// takes its first step, so previous totals are never double-counted.
    pub fn refresh(&mut self, id: &str) {
        let Some(entry) = self.entries.get(id) else {
            return;
        };
        let path = entry.path.clone();
        self.tasks.retain(|t| t.id != id);
        self.enqueue_pass(id.to_string(), &path);
    }

    /// Recompute every observed entry.
    pub fn refresh_all(&mut self) {
        let ids: Vec<String> = self.entries.keys().cloned().collect();
        for id in ids {
            self.refresh(&id);
        }
    }

    /// Cancel the pass for one entry. Its size stays at the last
    /// consistent value; no further mutation happens until a new pass is
    /// requested.
    pub fn cancel(&mut self, id: &str) {
        self.tasks.retain(|t| t.id != id);
        if let Some(entry) = self.entries.get_mut(id)
            && !entry.status.is_settled()
        {
            entry.status = ScanStatus::Cancelled;
        }
    }

    /// Drive in-flight passes: processes up to `batch_size` leaves from
    /// the front pass, rotating unfinished passes to the back.
    pub fn step(&mut self) -> StepOutcome {
        if !self.running {
            return StepOutcome::Idle;
        }
        let Some(mut task) = self.tasks.pop_front() else {
            return StepOutcome::Idle;
        };

        // Entry may have been superseded between queueing and stepping
        let Some(entry) = self.entries.get_mut(&task.id) else {
            return self.outcome();
        };

        if !task.started {
            entry.size = 0;
            entry.items = 0;
            entry.status = ScanStatus::Running;
            task.started = true;
        }

        let root = self.root.clone().unwrap_or_default();
        let mut finished = false;
        for _ in 0..self.config.batch_size.max(1) {
            match task.walk.next() {
                Some(item) => {
                    if let Some(measured) = self.accumulator.measure(&item) {
                        entry.size += measured.size;
                        entry.items += 1;
                        task.stats.record(
                            &measured.tag,
                            measured.size,
                            display_rel(&root, &item.path),
                            measured.modified,
                        );
                    }
                }
                None => {
                    finished = true;
                    break;
                }
            }
        }

        if finished {
            entry.status = ScanStatus::Done;
            self.stats_by_entry
                .insert(task.id.clone(), task.stats.finish());
            self.snapshot_dirty = true;
        } else {
            self.tasks.push_back(task);
        }

        self.outcome()
    }

    fn outcome(&mut self) -> StepOutcome {
        if self.tasks.is_empty() {
            if self.snapshot_dirty {
                self.scanned_at = Some(time::OffsetDateTime::now_utc().unix_timestamp());
                self.persist_snapshot();
                self.snapshot_dirty = false;
            }
            StepOutcome::Idle
        } else {
            StepOutcome::More
        }
    }

    fn persist_snapshot(&self) {
        let (Some(store), Some(root), Some(scanned_at)) =
            (self.store.as_ref(), self.root.as_ref(), self.scanned_at)
        else {
            return;
        };

        let mut rows: Vec<SnapshotEntry> = self
            .entries
            .values()
            .filter(|e| e.status == ScanStatus::Done)
            .map(|e| {
                let stats = self.stats_by_entry.get(&e.id);
                let mut types: Vec<(String, TypeStats)> = stats
                    .map(|s| s.by_tag.iter().map(|(k, v)| (k.clone(), *v)).collect())
                    .unwrap_or_default();
                types.sort_by(|a, b| a.0.cmp(&b.0));
                SnapshotEntry {
                    id: e.id.clone(),
                    name: e.name.clone(),
                    size: e.size,
                    items: e.items,
                    types,
                    top_files: stats.map(|s| s.top_files.clone()).unwrap_or_default(),
                }
            })
            .collect();
        rows.sort_by(|a, b| a.id.cmp(&b.id));

        let snapshot = ScanSnapshot {
            root: root.clone(),
            scanned_at,
            entries: rows,
        };
        if let Err(err) = store.save(&snapshot) {
            warn!("could not persist snapshot: {err:#}");
        }
    }

    /// Snapshot of the observed entries, sorted for display.
    pub fn entries(&self, sorting: Sorting) -> Vec<FolderEntry> {
        let mut entries: Vec<FolderEntry> = self.entries.values().cloned().collect();
        entries.sort_by(|a, b| sorting.compare(a, b));
        entries
    }

    pub fn entry(&self, id: &str) -> Option<&FolderEntry> {
        self.entries.get(id)
    }

    /// Aggregate per-tag stats over completed passes, largest first.
    pub fn type_stats(&self) -> Vec<(String, TypeStats)> {
        let mut merged: FxHashMap<&str, TypeStats> = FxHashMap::default();
        for stats in self.stats_by_entry.values() {
            for (tag, s) in &stats.by_tag {
                merged.entry(tag.as_str()).or_default().merge(*s);
            }
        }
        let mut result: Vec<(String, TypeStats)> = merged
            .into_iter()
            .map(|(tag, s)| (tag.to_string(), s))
            .collect();
        result.sort_by(|a, b| b.1.size.cmp(&a.1.size).then_with(|| a.0.cmp(&b.0)));
        result
    }

    /// Largest leaves over completed passes, largest first.
    pub fn largest_files(&self) -> Vec<LargeFileInfo> {
        let mut files: Vec<LargeFileInfo> = self
            .stats_by_entry
            .values()
            .flat_map(|s| s.top_files.iter().cloned())
            .collect();
        files.sort_by(|a, b| b.size.cmp(&a.size).then_with(|| a.path.cmp(&b.path)));
        files.truncate(TOP_FILES);
        files
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Unix timestamp of the last completed pass set, possibly loaded
    /// from a snapshot.
    pub fn scanned_at(&self) -> Option<i64> {
        self.scanned_at
    }

    pub fn total_size(&self) -> u64 {
        self.entries.values().map(|e| e.size).sum()
    }

    pub fn is_idle(&self) -> bool {
        self.tasks.is_empty()
    }

    /// (settled, total) entry counts for progress display.
    pub fn progress(&self) -> (usize, usize) {
        let settled = self
            .entries
            .values()
            .filter(|e| e.status.is_settled())
            .count();
        (settled, self.entries.len())
    }
}
