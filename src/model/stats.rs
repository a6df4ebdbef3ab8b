use serde::{Deserialize, Serialize};

/// Statistics aggregated per type tag over completed passes.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TypeStats {
    pub size: u64,
    pub file_count: u64,
}

impl TypeStats {
    pub fn add(&mut self, size: u64) {
        self.size += size;
        self.file_count += 1;
    }

    pub fn merge(&mut self, other: TypeStats) {
        self.size += other.size;
        self.file_count += other.file_count;
    }
}

/// One of the largest leaves seen under the subject root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LargeFileInfo {
    /// Path relative to the subject root.
    pub path: String,
    pub size: u64,
    /// Unix timestamp of the last modification, 0 when unknown.
    pub modified: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_stats_accumulate() {
        let mut stats = TypeStats::default();
        stats.add(100);
        stats.add(50);
        assert_eq!(stats.size, 150);
        assert_eq!(stats.file_count, 2);

        let mut other = TypeStats::default();
        other.add(25);
        stats.merge(other);
        assert_eq!(stats.size, 175);
        assert_eq!(stats.file_count, 3);
    }
}
