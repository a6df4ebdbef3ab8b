use std::fs;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use super::store::{ScanSnapshot, SnapshotStore};

/// Stores one JSON snapshot file per subject root.
///
/// File names combine the root's directory name with a hash of its full
/// path, so distinct roots sharing a name do not collide.
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    /// Store rooted at the user cache directory.
    pub fn in_user_cache() -> Result<Self> {
        let dir = dirs::cache_dir()
            .context("could not determine cache directory")?
            .join("dirscope");
        Self::at(dir)
    }

    pub fn at(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("could not create snapshot directory {}", dir.display()))?;
        Ok(Self { dir })
    }

    fn snapshot_path(&self, root: &Path) -> PathBuf {
        let name = root
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("root");
        let mut hasher = DefaultHasher::new();
        root.hash(&mut hasher);
        self.dir
            .join(format!("{}_{:016x}.json", name, hasher.finish()))
    }
}

impl SnapshotStore for JsonStore {
    fn load(&self, root: &Path) -> Option<ScanSnapshot> {
        let path = self.snapshot_path(root);
        let data = fs::read(&path).ok()?;
        match serde_json::from_slice::<ScanSnapshot>(&data) {
            Ok(snapshot) if snapshot.root == root => Some(snapshot),
            Ok(_) => {
                debug!("snapshot {} belongs to a different root", path.display());
                None
            }
            Err(err) => {
                warn!("discarding unreadable snapshot {}: {err}", path.display());
                None
            }
        }
    }

    fn save(&self, snapshot: &ScanSnapshot) -> Result<()> {
        let path = self.snapshot_path(&snapshot.root);
        let data = serde_json::to_vec(snapshot).context("could not serialize snapshot")?;
        fs::write(&path, data)
            .with_context(|| format!("could not write snapshot {}", path.display()))?;
        debug!("saved snapshot {}", path.display());
        Ok(())
    }
}
