use std::borrow::Cow;
use std::fs;
use std::time::UNIX_EPOCH;

use tracing::{debug, warn};

use crate::config::ExclusionSet;
use crate::util::type_tag;

use super::error::ScanError;
use super::walker::LeafItem;

/// Size and classification of one measured leaf.
#[derive(Debug, Clone)]
pub struct Measured {
    pub size: u64,
    pub tag: Cow<'static, str>,
    /// Unix timestamp of the last modification, 0 when unknown.
    pub modified: i64,
}

/// Resolves the effective size of leaf items, honoring the exclusion set.
///
/// Effective size is the on-disk byte length reported by filesystem
/// metadata; compressed formats report stored bytes, not decoded bytes.
#[derive(Debug, Clone, Default)]
pub struct SizeAccumulator {
    excluded: ExclusionSet,
    follow_links: bool,
}

impl SizeAccumulator {
    pub fn new(excluded: ExclusionSet, follow_links: bool) -> Self {
        Self {
            excluded,
            follow_links,
        }
    }

    /// Measure one leaf. Returns `None` when the item is excluded or
    /// cannot be sized; failures are logged and contribute nothing, so a
    /// bad item never disturbs its siblings.
    pub fn measure(&self, item: &LeafItem) -> Option<Measured> {
        let tag = type_tag(&item.path);
        if self.excluded.contains(&tag) {
            debug!("excluded {} ({tag})", item.path.display());
            return None;
        }

        let metadata = if self.follow_links && item.is_symlink {
            fs::metadata(&item.path)
        } else {
            fs::symlink_metadata(&item.path)
        };
        let metadata = match metadata {
            Ok(md) => md,
            Err(source) => {
                warn!(
                    "skipping: {}",
                    ScanError::UnreadableEntry {
                        path: item.path.clone(),
                        source,
                    }
                );
                return None;
            }
        };

        let file_type = metadata.file_type();
        if !file_type.is_file() {
            let kind = if file_type.is_symlink() {
                "(symlink)"
            } else {
                "(special)"
            };
            warn!(
                "skipping: {}",
                ScanError::UnsupportedItemType {
                    path: item.path.clone(),
                    tag: kind.to_string(),
                }
            );
            return None;
        }

        let modified = metadata
            .modified()
            .ok()
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0);

        Some(Measured {
            size: metadata.len(),
            tag,
            modified,
        })
    }
}
