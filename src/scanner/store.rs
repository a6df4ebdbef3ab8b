//! Snapshot persistence for completed scans.
//!
//! Decouples the scheduler from storage details so it can be tested
//! against a directory-local store or none at all.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::model::{LargeFileInfo, TypeStats};

/// Snapshot row for one entry whose pass ran to completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotEntry {
    pub id: String,
    pub name: String,
    pub size: u64,
    pub items: u64,
    #[serde(default)]
    pub types: Vec<(String, TypeStats)>,
    #[serde(default)]
    pub top_files: Vec<LargeFileInfo>,
}

/// A completed pass set over one subject root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSnapshot {
    pub root: PathBuf,
    /// Unix timestamp of pass completion.
    pub scanned_at: i64,
    pub entries: Vec<SnapshotEntry>,
}

/// Persistence for completed scans, keyed by subject root.
pub trait SnapshotStore {
    /// Load the snapshot for `root`, if one exists and is readable.
    fn load(&self, root: &Path) -> Option<ScanSnapshot>;

    /// Persist a snapshot, replacing any previous one for the same root.
    fn save(&self, snapshot: &ScanSnapshot) -> Result<()>;
}
