use anyhow::{Result, ensure};

/// One row of the size unit table: the smallest value at which the unit
/// applies, the divisor used to scale into it, and its display label.
#[derive(Debug, Clone, Copy)]
pub struct SizeUnit {
    pub threshold: u64,
    pub divisor: f64,
    pub label: &'static str,
}

/// Binary progression used by the default formatter.
pub const DEFAULT_UNITS: [SizeUnit; 4] = [
    SizeUnit { threshold: 1, divisor: 1.0, label: "byte" },
    SizeUnit { threshold: 1 << 10, divisor: 1024.0, label: "kb" },
    SizeUnit { threshold: 1 << 20, divisor: 1048576.0, label: "Mb" },
    SizeUnit { threshold: 1 << 30, divisor: 1073741824.0, label: "Gb" },
];

/// Formats byte counts against a configurable unit table.
///
/// The unit chosen is the largest whose threshold does not exceed the
/// value; values past the top of the table clamp to the last unit.
#[derive(Debug, Clone)]
pub struct SizeFormatter {
    units: Vec<SizeUnit>,
}

impl SizeFormatter {
    /// Build a formatter from a unit table. Thresholds must be strictly
    /// increasing and the table non-empty.
    pub fn new(units: Vec<SizeUnit>) -> Result<Self> {
        ensure!(!units.is_empty(), "size unit table is empty");
        ensure!(
            units.windows(2).all(|w| w[0].threshold < w[1].threshold),
            "size unit thresholds must be strictly increasing"
        );
        Ok(Self { units })
    }

    pub fn format(&self, bytes: u64) -> String {
        format_with(&self.units, bytes)
    }
}

impl Default for SizeFormatter {
    fn default() -> Self {
        Self { units: DEFAULT_UNITS.to_vec() }
    }
}

fn format_with(units: &[SizeUnit], bytes: u64) -> String {
    if bytes == 0 {
        return "0 byte".to_string();
    }
    let unit = units
        .iter()
        .rev()
        .find(|u| u.threshold <= bytes)
        .unwrap_or(&units[0]);
    format!("{:.2} {}", bytes as f64 / unit.divisor, unit.label)
}

/// Format a byte count with the default binary unit table.
pub fn format_size(bytes: u64) -> String {
    format_with(&DEFAULT_UNITS, bytes)
}

/// Format a Unix timestamp as a YYYY-MM-DD string
pub fn format_timestamp(timestamp: i64) -> String {
    use time::OffsetDateTime;
    use time::macros::format_description;

    if timestamp == 0 {
        return "unknown".to_string();
    }

    OffsetDateTime::from_unix_timestamp(timestamp)
        .ok()
        .and_then(|dt| {
            let format = format_description!("[year]-[month]-[day]");
            dt.format(&format).ok()
        })
        .unwrap_or_else(|| "unknown".to_string())
}
