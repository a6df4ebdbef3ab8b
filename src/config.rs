use rustc_hash::FxHashSet;

/// Type tags skipped entirely when aggregating size.
///
/// Tags use the same form `util::type_tag` produces: a lowercase
/// extension with a leading dot, or a parenthesized special tag such as
/// "(no ext)". Bare extensions given by the user are normalized.
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    tags: FxHashSet<String>,
}

impl ExclusionSet {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        for tag in tags {
            set.insert(tag.as_ref());
        }
        set
    }

    pub fn insert(&mut self, tag: &str) {
        self.tags.insert(normalize(tag));
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

fn normalize(tag: &str) -> String {
    let tag = tag.trim();
    if tag.starts_with('(') || tag.starts_with('.') {
        tag.to_ascii_lowercase()
    } else {
        format!(".{}", tag.to_ascii_lowercase())
    }
}

/// Injected scanning configuration. There are no process-wide knobs;
/// everything the walker, accumulator and scheduler consult lives here.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub excluded: ExclusionSet,
    /// Leaves processed per scheduler step before control returns to the
    /// embedding loop.
    pub batch_size: usize,
    pub follow_links: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            excluded: ExclusionSet::default(),
            batch_size: 64,
            follow_links: false,
        }
    }
}
