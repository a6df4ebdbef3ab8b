use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{ExclusionSet, ScanConfig};
use crate::model::Sorting;

#[derive(Parser, Debug)]
#[command(name = "dirscope", about = "Incremental directory footprint analyzer")]
pub struct Cli {
    /// Directory to observe
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Print a one-shot report instead of starting the TUI
    #[arg(long)]
    pub report: bool,

    /// Initial sort order
    #[arg(long, value_enum, default_value_t = SortOrder::Alphabetical)]
    pub sort: SortOrder,

    /// Type tags excluded from aggregation (e.g. "png" or ".meta")
    #[arg(long = "exclude", value_name = "TAG")]
    pub excluded: Vec<String>,

    /// Leaf items processed per scheduler step
    #[arg(long, default_value_t = 64)]
    pub batch: usize,

    /// Follow symbolic links when walking
    #[arg(long)]
    pub follow_links: bool,

    /// Neither read nor write snapshot caches
    #[arg(long)]
    pub no_cache: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Alphabetical,
    Size,
}

impl From<SortOrder> for Sorting {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Alphabetical => Sorting::Alphabetical,
            SortOrder::Size => Sorting::Size,
        }
    }
}

impl Cli {
    pub fn scan_config(&self) -> ScanConfig {
        ScanConfig {
            excluded: ExclusionSet::new(self.excluded.iter()),
            batch_size: self.batch.max(1),
            follow_links: self.follow_links,
        }
    }
}
