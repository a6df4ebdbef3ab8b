mod keyboard;

pub use keyboard::{Intent, ViewMode, map_key_to_intent};
