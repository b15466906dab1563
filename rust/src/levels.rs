//! Partition a working set into dependency levels for batch scheduling views.
//!
//! Level 0 holds items with no in-set dependencies; level `n` holds items whose
//! longest in-set dependency chain has `n` edges. Every dependency of a level-`n`
//! item sits in an earlier bucket unless the two share a cycle.

use crate::depth::DepthWalker;
use crate::index::GraphIndex;
use crate::log_summary;

/// Ordered level buckets; index 0 is the dependency-free level.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Levels {
    pub buckets: Vec<Vec<String>>,
}

impl Levels {
    /// Number of levels.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Ids at `level`, empty if the level does not exist.
    pub fn level(&self, level: usize) -> &[String] {
        self.buckets.get(level).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Level of `id`, if present.
    pub fn level_of(&self, id: &str) -> Option<usize> {
        self.buckets
            .iter()
            .position(|bucket| bucket.iter().any(|b| b == id))
    }
}

/// Group items by level, keeping input order inside each bucket.
///
/// Uses its own memo table; nothing is shared with a depth map computed for
/// the same working set.
pub fn partition_levels(index: &GraphIndex<'_>, verbosity: u8) -> Levels {
    let mut walker = DepthWalker::new(index, verbosity);
    let mut buckets: Vec<Vec<String>> = Vec::new();

    for idx in 0..index.len() {
        let level = walker.resolve(idx);
        if buckets.len() <= level {
            buckets.resize_with(level + 1, Vec::new);
        }
        buckets[level].push(index.id(idx).to_string());
    }

    // Any item at level n > 0 has a dependency at level n - 1, so no bucket is empty
    log_summary!(
        verbosity,
        "partitioned {} items into {} levels",
        index.len(),
        buckets.len()
    );
    Levels { buckets }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Priority, Status, WorkItem};

    fn make_item(id: &str, deps: &[&str]) -> WorkItem {
        WorkItem::new(id, Status::NotStarted, Priority::Medium)
            .with_dependencies(deps.iter().copied())
    }

    fn levels(items: &[WorkItem]) -> Levels {
        partition_levels(&GraphIndex::new(items), 0)
    }

    #[test]
    fn test_chain_levels() {
        let items = vec![
            make_item("C", &["B"]),
            make_item("A", &[]),
            make_item("B", &["A"]),
        ];
        let result = levels(&items);
        assert_eq!(
            result.buckets,
            vec![vec!["A".to_string()], vec!["B".to_string()], vec!["C".to_string()]]
        );
    }

    #[test]
    fn test_bucket_preserves_input_order() {
        let items = vec![
            make_item("z", &[]),
            make_item("y", &["z"]),
            make_item("a", &[]),
            make_item("b", &["a"]),
        ];
        let result = levels(&items);
        assert_eq!(result.level(0), &["z".to_string(), "a".to_string()]);
        assert_eq!(result.level(1), &["y".to_string(), "b".to_string()]);
        assert_eq!(result.level_of("b"), Some(1));
        assert!(result.level(5).is_empty());
    }

    #[test]
    fn test_dangling_dependency_is_level_zero() {
        let items = vec![make_item("a", &["elsewhere"])];
        let result = levels(&items);
        assert_eq!(result.buckets, vec![vec!["a".to_string()]]);
    }

    #[test]
    fn test_cycle_items_land_at_level_zero() {
        let items = vec![make_item("X", &["Y"]), make_item("Y", &["X"])];
        let result = levels(&items);
        assert_eq!(result.buckets, vec![vec!["X".to_string(), "Y".to_string()]]);
    }

    #[test]
    fn test_chain_through_cycle_member() {
        let items = vec![
            make_item("A", &["B"]),
            make_item("B", &["C", "D"]),
            make_item("C", &["B"]),
            make_item("D", &[]),
        ];
        let result = levels(&items);
        assert_eq!(result.level(0), &["C".to_string(), "D".to_string()]);
        assert_eq!(result.level_of("B"), Some(1));
        assert_eq!(result.level_of("A"), Some(2));
    }

    #[test]
    fn test_empty_input() {
        assert!(levels(&[]).is_empty());
    }
}
