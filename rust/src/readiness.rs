//! Ready/blocked classification of not-yet-started work items.
//!
//! Works on the full, unfiltered collection. Classification is read-only: status
//! changes belong to whoever owns the work item lifecycle.

use crate::index::GraphIndex;
use crate::models::{Status, WorkItem};
use crate::{log_detail, log_summary};

/// A not-started item with at least one unmet dependency.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlockedItem<'a> {
    pub item: &'a WorkItem,
    /// Dependencies present in the collection and not completed, in declaration order.
    pub unmet: Vec<&'a str>,
}

impl<'a> BlockedItem<'a> {
    pub fn id(&self) -> &'a str {
        &self.item.id
    }
}

/// Result of [`classify_readiness`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReadinessReport<'a> {
    /// Ready items by priority rank, ties in input order.
    pub ready: Vec<&'a WorkItem>,
    /// Blocked items in input order.
    pub blocked: Vec<BlockedItem<'a>>,
}

impl<'a> ReadinessReport<'a> {
    /// The item to pick up next, if any is ready.
    pub fn next(&self) -> Option<&'a WorkItem> {
        self.ready.first().copied()
    }

    /// Unmet dependencies of a blocked item, or `None` if `id` is not blocked.
    pub fn blocked_by(&self, id: &str) -> Option<&[&'a str]> {
        self.blocked
            .iter()
            .find(|b| b.item.id == id)
            .map(|b| b.unmet.as_slice())
    }

    pub fn ready_ids(&self) -> Vec<&'a str> {
        self.ready.iter().map(|item| item.id.as_str()).collect()
    }

    pub fn blocked_ids(&self) -> Vec<&'a str> {
        self.blocked.iter().map(BlockedItem::id).collect()
    }
}

/// Split `not_started` items into ready and blocked.
///
/// A dependency blocks only if it names an item in `items` whose status is not
/// `completed`; ids missing from `items` are treated as satisfied.
pub fn classify_readiness<'a>(items: &'a [WorkItem], verbosity: u8) -> ReadinessReport<'a> {
    let index = GraphIndex::new(items);
    let mut ready: Vec<&'a WorkItem> = Vec::new();
    let mut blocked: Vec<BlockedItem<'a>> = Vec::new();

    for item in items.iter().filter(|item| item.status == Status::NotStarted) {
        let mut unmet: Vec<&'a str> = Vec::new();
        for dep in &item.dependencies {
            let Some(dep_item) = index.get(dep) else {
                continue;
            };
            if !dep_item.is_completed() && !unmet.contains(&dep.as_str()) {
                unmet.push(dep.as_str());
            }
        }

        if unmet.is_empty() {
            ready.push(item);
        } else {
            log_detail!(verbosity, "{} blocked by {:?}", item.id, unmet);
            blocked.push(BlockedItem { item, unmet });
        }
    }

    // Stable: equal priorities keep input order
    ready.sort_by_key(|item| item.priority.rank());

    log_summary!(
        verbosity,
        "readiness: {} ready, {} blocked",
        ready.len(),
        blocked.len()
    );
    ReadinessReport { ready, blocked }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;

    fn make_item(id: &str, status: Status, priority: Priority, deps: &[&str]) -> WorkItem {
        WorkItem::new(id, status, priority).with_dependencies(deps.iter().copied())
    }

    #[test]
    fn test_ready_sorted_by_priority() {
        let items = vec![
            make_item("P", Status::NotStarted, Priority::High, &[]),
            make_item("Q", Status::NotStarted, Priority::Critical, &["R"]),
            make_item("R", Status::Completed, Priority::Low, &[]),
        ];
        let report = classify_readiness(&items, 0);

        assert_eq!(report.ready_ids(), vec!["Q", "P"]);
        assert!(report.blocked.is_empty());
        assert_eq!(report.next().map(|i| i.id.as_str()), Some("Q"));
    }

    #[test]
    fn test_blocked_lists_unmet_dependencies() {
        let items = vec![
            make_item("A", Status::InProgress, Priority::Medium, &[]),
            make_item("B", Status::Completed, Priority::Medium, &[]),
            make_item("C", Status::NotStarted, Priority::Medium, &["A", "B", "ghost", "A"]),
        ];
        let report = classify_readiness(&items, 0);

        assert!(report.ready.is_empty());
        assert_eq!(report.blocked_ids(), vec!["C"]);
        assert_eq!(report.blocked_by("C"), Some(&["A"][..]));
        assert_eq!(report.blocked_by("A"), None);
        assert_eq!(report.next(), None);
    }

    #[test]
    fn test_only_not_started_items_classified() {
        let items = vec![
            make_item("a", Status::InProgress, Priority::Critical, &[]),
            make_item("b", Status::Completed, Priority::Critical, &[]),
            make_item("c", Status::Blocked, Priority::Critical, &[]),
            make_item("d", Status::NotStarted, Priority::Low, &[]),
        ];
        let report = classify_readiness(&items, 0);
        assert_eq!(report.ready_ids(), vec!["d"]);
        assert!(report.blocked.is_empty());
    }

    #[test]
    fn test_dependency_on_blocked_status_blocks() {
        let items = vec![
            make_item("a", Status::Blocked, Priority::Medium, &[]),
            make_item("b", Status::NotStarted, Priority::Medium, &["a"]),
        ];
        let report = classify_readiness(&items, 0);
        assert_eq!(report.blocked_ids(), vec!["b"]);
    }

    #[test]
    fn test_equal_priority_keeps_input_order() {
        let items = vec![
            make_item("x", Status::NotStarted, Priority::Low, &[]),
            make_item("y", Status::NotStarted, Priority::Medium, &[]),
            make_item("z", Status::NotStarted, Priority::Medium, &[]),
            make_item("w", Status::NotStarted, Priority::Medium, &[]),
        ];
        let report = classify_readiness(&items, 0);
        assert_eq!(report.ready_ids(), vec!["y", "z", "w", "x"]);
    }

    #[test]
    fn test_empty_input() {
        let report = classify_readiness(&[], 0);
        assert!(report.ready.is_empty());
        assert!(report.blocked.is_empty());
        assert_eq!(report.next(), None);
    }
}
