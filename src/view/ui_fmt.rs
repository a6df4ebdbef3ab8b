use ratatui::style::Color;

use crate::model::ScanStatus;

/// Create a progress bar string with filled and empty blocks
pub fn bar(percent: f64, width: usize) -> String {
    let p = percent.clamp(0.0, 100.0);
    let filled = ((p / 100.0) * width as f64).round() as usize;
    "█".repeat(filled) + &"░".repeat(width.saturating_sub(filled))
}

/// Calculate percentage of a value relative to a total
pub fn percent(value: u64, total: u64) -> f64 {
    if total > 0 {
        value as f64 / total as f64 * 100.0
    } else {
        0.0
    }
}

/// Marker glyph shown next to an entry's size
pub fn status_glyph(status: ScanStatus) -> &'static str {
    match status {
        ScanStatus::Pending => "·",
        ScanStatus::Running => "»",
        ScanStatus::Done => " ",
        ScanStatus::Cancelled => "✗",
    }
}

pub fn status_color(status: ScanStatus) -> Color {
    match status {
        ScanStatus::Pending => Color::DarkGray,
        ScanStatus::Running => Color::Yellow,
        ScanStatus::Done => Color::Cyan,
        ScanStatus::Cancelled => Color::Red,
    }
}
