//! Incremental directory scanning
//!
//! Computes per-entry aggregate sizes without ever blocking the caller.
//!
//! # Architecture
//!
//! The scanner is organized into layers:
//!
//! - **walker**: lazy, restartable enumeration of leaf items
//! - **accumulator**: per-leaf classification and effective size
//! - **scheduler**: cooperative, cancellable pass per observed entry
//! - **error**: per-item failure taxonomy (logged, never fatal)
//! - **store**: snapshot persistence trait
//! - **json_store**: JSON file implementation of SnapshotStore
//! - **progress**: progress reporting abstraction

mod accumulator;
mod error;
mod json_store;
mod progress;
mod scheduler;
mod store;
mod walker;

pub use accumulator::{Measured, SizeAccumulator};
pub use error::ScanError;
pub use json_store::JsonStore;
pub use progress::{IndicatifProgress, NoopProgress, ProgressHandle, ProgressReporter};
pub use scheduler::{IncrementalScheduler, StepOutcome};
pub use store::{ScanSnapshot, SnapshotEntry, SnapshotStore};
pub use walker::{LeafItem, PathWalker, Walk};
