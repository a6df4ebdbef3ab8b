mod format;
mod path;

pub use format::{DEFAULT_UNITS, SizeFormatter, SizeUnit, format_size, format_timestamp};
pub use path::{display_rel, type_tag};
