/// Counters for a single traversal call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    nodes_visited: usize,
    duplicates_skipped: usize,
    subtrees_pruned: usize,
}

impl Stats {
    pub fn new() -> Self {
        Stats {
            nodes_visited: 0,
            duplicates_skipped: 0,
            subtrees_pruned: 0,
        }
    }

    /// Record that the visitor was invoked on a node
    pub fn bump_visited(&mut self) {
        self.nodes_visited += 1
    }

    /// Record that a reference to an already visited entity was skipped
    pub fn bump_duplicates(&mut self) {
        self.duplicates_skipped += 1
    }

    /// Record that the visitor declined to descend into a node's children
    pub fn bump_pruned(&mut self) {
        self.subtrees_pruned += 1
    }

    pub fn get_nodes_visited(&self) -> usize {
        self.nodes_visited
    }

    pub fn get_duplicates_skipped(&self) -> usize {
        self.duplicates_skipped
    }

    pub fn get_subtrees_pruned(&self) -> usize {
        self.subtrees_pruned
    }

    pub fn merge(&self, other: &Stats) -> Stats {
        Stats {
            nodes_visited: self.nodes_visited + other.nodes_visited,
            duplicates_skipped: self.duplicates_skipped + other.duplicates_skipped,
            subtrees_pruned: self.subtrees_pruned + other.subtrees_pruned,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stats_initialized_to_zero() {
        let stats = Stats::new();
        assert_eq!(stats.get_nodes_visited(), 0);
        assert_eq!(stats.get_duplicates_skipped(), 0);
        assert_eq!(stats.get_subtrees_pruned(), 0);
        assert_eq!(stats, Stats::default());
    }

    #[test]
    fn test_bumps_are_independent() {
        let mut stats = Stats::new();
        stats.bump_visited();
        stats.bump_visited();
        stats.bump_duplicates();
        assert_eq!(stats.get_nodes_visited(), 2);
        assert_eq!(stats.get_duplicates_skipped(), 1);
        assert_eq!(stats.get_subtrees_pruned(), 0);

        stats.bump_pruned();
        assert_eq!(stats.get_subtrees_pruned(), 1);
    }

    #[test]
    fn test_merge_adds_fieldwise() {
        let mut a = Stats::new();
        a.bump_visited();
        a.bump_pruned();
        let mut b = Stats::new();
        b.bump_visited();
        b.bump_duplicates();
        b.bump_duplicates();

        let merged = a.merge(&b);
        assert_eq!(merged.get_nodes_visited(), 2);
        assert_eq!(merged.get_duplicates_skipped(), 2);
        assert_eq!(merged.get_subtrees_pruned(), 1);
    }

    #[test]
    fn test_large_values() {
        let mut stats = Stats::new();
        for _ in 0..1000 {
            stats.bump_visited();
        }
        assert_eq!(stats.get_nodes_visited(), 1000);
    }
}
