//! One-shot report mode: drain every pass, print a sorted table.

use std::io::Write;

use anyhow::Result;

use crate::model::Sorting;
use crate::scanner::{IncrementalScheduler, ProgressReporter, StepOutcome};
use crate::util::format_size;

/// Drive the scheduler until every pass settles, reporting progress per
/// completed entry, then render the table to `out`.
pub fn run(
    scheduler: &mut IncrementalScheduler,
    sorting: Sorting,
    progress: &dyn ProgressReporter,
    out: &mut dyn Write,
) -> Result<()> {
    let (settled, total) = scheduler.progress();
    let pb = progress.start("scanning", total as u64);
    pb.set(settled as u64);
    loop {
        let outcome = scheduler.step();
        let (settled, _) = scheduler.progress();
        pb.set(settled as u64);
        if outcome == StepOutcome::Idle {
            break;
        }
    }
    pb.finish();

    if let Some(root) = scheduler.root() {
        writeln!(out, "{}", root.display())?;
    }
    for entry in scheduler.entries(sorting) {
        let suffix = if entry.is_dir { "/" } else { "" };
        writeln!(
            out,
            "{:>12}  {:>7} items  {}{}",
            format_size(entry.size),
            entry.items,
            entry.name,
            suffix
        )?;
    }
    writeln!(out, "{:>12}  total", format_size(scheduler.total_size()))?;

    Ok(())
}
