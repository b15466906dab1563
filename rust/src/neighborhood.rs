//! Focused neighborhood of a single work item.
//!
//! The default expansion is asymmetric: every transitive dependency of the focus
//! is included, but only the *direct* dependents of that upstream set.
//! [`NeighborhoodScope::TransitiveDependents`] is a separate opt-in variant that
//! closes over dependents as well.

use std::collections::VecDeque;

use crate::index::{GraphIndex, ItemIdx};
use crate::log_summary;

/// How far downstream an expansion reaches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NeighborhoodScope {
    /// One pass over the working set adding direct dependents of the upstream set.
    #[default]
    DirectDependents,
    /// Repeat the dependent pass until nothing new is added.
    TransitiveDependents,
}

/// Ids around a focus item, in input order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Neighborhood {
    pub ids: Vec<String>,
}

impl Neighborhood {
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|n| n == id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }
}

/// Focus + transitive dependencies + direct dependents.
///
/// An unknown focus id yields an empty neighborhood, which callers cannot tell
/// apart from a focus with no relationships unless they check membership first.
pub fn expand_neighborhood(
    index: &GraphIndex<'_>,
    focus_id: &str,
    verbosity: u8,
) -> Neighborhood {
    expand_neighborhood_with(
        index,
        focus_id,
        NeighborhoodScope::DirectDependents,
        verbosity,
    )
}

pub fn expand_neighborhood_with(
    index: &GraphIndex<'_>,
    focus_id: &str,
    scope: NeighborhoodScope,
    verbosity: u8,
) -> Neighborhood {
    let Some(focus) = index.position(focus_id) else {
        log_summary!(verbosity, "neighborhood focus {} not in working set", focus_id);
        return Neighborhood::default();
    };

    let mut included = vec![false; index.len()];
    included[focus] = true;

    // Upstream: full transitive closure over dependency edges
    let mut queue: VecDeque<ItemIdx> = VecDeque::from([focus]);
    while let Some(node) = queue.pop_front() {
        for &dep in index.deps(node) {
            if !included[dep] {
                included[dep] = true;
                queue.push_back(dep);
            }
        }
    }

    // Downstream: dependents of the upstream set, judged against a snapshot so a
    // single pass never chains dependents-of-dependents
    loop {
        let snapshot = included.clone();
        let mut added = false;
        for node in 0..index.len() {
            if !snapshot[node] && index.deps(node).iter().any(|&dep| snapshot[dep]) {
                included[node] = true;
                added = true;
            }
        }
        if !added || scope == NeighborhoodScope::DirectDependents {
            break;
        }
    }

    let ids: Vec<String> = included
        .iter()
        .enumerate()
        .filter(|(_, &inside)| inside)
        .map(|(idx, _)| index.id(idx).to_string())
        .collect();

    log_summary!(verbosity, "neighborhood of {}: {} items", focus_id, ids.len());
    Neighborhood { ids }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Priority, Status, WorkItem};

    fn make_item(id: &str, deps: &[&str]) -> WorkItem {
        WorkItem::new(id, Status::NotStarted, Priority::Medium)
            .with_dependencies(deps.iter().copied())
    }

    #[test]
    fn test_focus_with_dependency_and_dependent() {
        let items = vec![
            make_item("F", &["G"]),
            make_item("G", &[]),
            make_item("H", &["F"]),
        ];
        let index = GraphIndex::new(&items);
        let result = expand_neighborhood(&index, "F", 0);
        assert_eq!(result.ids, vec!["F", "G", "H"]);
    }

    #[test]
    fn test_unknown_focus_is_empty() {
        let items = vec![make_item("F", &[])];
        let index = GraphIndex::new(&items);
        assert!(expand_neighborhood(&index, "unknown", 0).is_empty());
    }

    #[test]
    fn test_dependents_are_one_hop_only() {
        // H depends on F, J depends on H: J is two hops downstream
        let items = vec![
            make_item("G", &[]),
            make_item("F", &["G"]),
            make_item("H", &["F"]),
            make_item("J", &["H"]),
        ];
        let index = GraphIndex::new(&items);
        let result = expand_neighborhood(&index, "F", 0);
        assert_eq!(result.ids, vec!["G", "F", "H"]);
        assert!(!result.contains("J"));
    }

    #[test]
    fn test_dependents_of_upstream_items_included() {
        // S depends on G, which is upstream of the focus
        let items = vec![
            make_item("G", &[]),
            make_item("F", &["G"]),
            make_item("S", &["G"]),
        ];
        let index = GraphIndex::new(&items);
        let result = expand_neighborhood(&index, "F", 0);
        assert_eq!(result.ids, vec!["G", "F", "S"]);
    }

    #[test]
    fn test_transitive_upstream() {
        let items = vec![
            make_item("A", &[]),
            make_item("B", &["A"]),
            make_item("C", &["B"]),
            make_item("D", &["C"]),
            make_item("other", &[]),
        ];
        let index = GraphIndex::new(&items);
        let result = expand_neighborhood(&index, "D", 0);
        assert_eq!(result.ids, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_transitive_dependents_variant() {
        let items = vec![
            make_item("F", &[]),
            make_item("H", &["F"]),
            make_item("J", &["H"]),
        ];
        let index = GraphIndex::new(&items);
        let result =
            expand_neighborhood_with(&index, "F", NeighborhoodScope::TransitiveDependents, 0);
        assert_eq!(result.ids, vec!["F", "H", "J"]);
    }

    #[test]
    fn test_cycle_in_upstream_terminates() {
        let items = vec![make_item("X", &["Y"]), make_item("Y", &["X"])];
        let index = GraphIndex::new(&items);
        let result = expand_neighborhood(&index, "X", 0);
        assert_eq!(result.ids, vec!["X", "Y"]);
    }
}
