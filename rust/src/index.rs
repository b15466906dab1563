//! Id lookup over a working set of work items.
//!
//! Ids are interned to their input position so every algorithm can work on
//! plain `usize` indices and emit results in input order. Dependency ids that
//! do not resolve inside the working set are dropped from the resolved edge
//! lists: they never constrain anything downstream.

use rustc_hash::FxHashMap;

use crate::models::WorkItem;

/// Position of an item in the caller-supplied sequence.
pub type ItemIdx = usize;

/// String interner mapping work item ids to input positions.
#[derive(Debug, Clone)]
pub struct ItemIdInterner<'a> {
    to_idx: FxHashMap<&'a str, ItemIdx>,
}

impl<'a> ItemIdInterner<'a> {
    /// Create a new interner with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            to_idx: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Record `id` at position `idx`. A repeated id is rebound to the later position.
    pub fn intern(&mut self, id: &'a str, idx: ItemIdx) {
        self.to_idx.insert(id, idx);
    }

    /// Get the position for an id, if it is part of the working set.
    #[inline]
    pub fn get(&self, id: &str) -> Option<ItemIdx> {
        self.to_idx.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.to_idx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_idx.is_empty()
    }
}

/// Read-only id index over one working set, rebuilt for every call.
#[derive(Debug, Clone)]
pub struct GraphIndex<'a> {
    items: &'a [WorkItem],
    ids: ItemIdInterner<'a>,
    /// Resolved in-set dependencies per item, in declaration order.
    deps: Vec<Vec<ItemIdx>>,
}

impl<'a> GraphIndex<'a> {
    pub fn new(items: &'a [WorkItem]) -> Self {
        let mut ids = ItemIdInterner::with_capacity(items.len());
        for (idx, item) in items.iter().enumerate() {
            ids.intern(&item.id, idx);
        }

        let deps = items
            .iter()
            .map(|item| {
                item.dependencies
                    .iter()
                    .filter_map(|dep| ids.get(dep))
                    .collect()
            })
            .collect();

        Self { items, ids, deps }
    }

    /// The working set in input order.
    pub fn items(&self) -> &'a [WorkItem] {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn position(&self, id: &str) -> Option<ItemIdx> {
        self.ids.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.get(id).is_some()
    }

    pub fn get(&self, id: &str) -> Option<&'a WorkItem> {
        self.ids.get(id).map(|idx| &self.items[idx])
    }

    #[inline]
    pub(crate) fn id(&self, idx: ItemIdx) -> &'a str {
        &self.items[idx].id
    }

    /// Dependencies of `idx` that exist in the working set.
    #[inline]
    pub(crate) fn deps(&self, idx: ItemIdx) -> &[ItemIdx] {
        &self.deps[idx]
    }

    /// Items that list `id` as a dependency, in input order.
    pub fn dependents(&self, id: &str) -> Vec<&'a WorkItem> {
        let Some(target) = self.ids.get(id) else {
            return Vec::new();
        };
        self.deps
            .iter()
            .enumerate()
            .filter(|(_, deps)| deps.contains(&target))
            .map(|(idx, _)| &self.items[idx])
            .collect()
    }

    /// `(item_id, missing_dependency_id)` for every dependency outside the working set.
    pub fn dangling_references(&self) -> Vec<(&'a str, &'a str)> {
        self.items
            .iter()
            .flat_map(|item| {
                item.dependencies
                    .iter()
                    .filter(move |dep| !self.contains(dep))
                    .map(move |dep| (item.id.as_str(), dep.as_str()))
            })
            .collect()
    }

    /// Total number of resolved in-set dependency edges.
    pub fn edge_count(&self) -> usize {
        self.deps.iter().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Priority, Status};

    fn make_item(id: &str, deps: &[&str]) -> WorkItem {
        WorkItem::new(id, Status::NotStarted, Priority::Medium)
            .with_dependencies(deps.iter().copied())
    }

    #[test]
    fn test_interner_rebinds_duplicates() {
        let mut interner = ItemIdInterner::with_capacity(4);
        interner.intern("a", 0);
        interner.intern("b", 1);
        interner.intern("a", 2);

        assert_eq!(interner.get("a"), Some(2));
        assert_eq!(interner.get("b"), Some(1));
        assert_eq!(interner.get("nonexistent"), None);
        assert_eq!(interner.len(), 2);
    }

    #[test]
    fn test_dangling_dependencies_are_dropped() {
        let items = vec![make_item("a", &[]), make_item("b", &["a", "ghost"])];
        let index = GraphIndex::new(&items);

        assert_eq!(index.deps(1), &[0]);
        assert_eq!(index.dangling_references(), vec![("b", "ghost")]);
        assert_eq!(index.edge_count(), 1);
    }

    #[test]
    fn test_lookup() {
        let items = vec![make_item("a", &[]), make_item("b", &["a"])];
        let index = GraphIndex::new(&items);

        assert_eq!(index.position("b"), Some(1));
        assert_eq!(index.get("a").map(|i| i.id.as_str()), Some("a"));
        assert!(!index.contains("c"));
        assert_eq!(index.id(1), "b");
    }

    #[test]
    fn test_dependents_in_input_order() {
        let items = vec![
            make_item("c", &["a"]),
            make_item("a", &[]),
            make_item("b", &["a"]),
        ];
        let index = GraphIndex::new(&items);

        let ids: Vec<&str> = index.dependents("a").iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b"]);
        assert!(index.dependents("missing").is_empty());
    }

    #[test]
    fn test_unknown_ids_never_panic() {
        let items = vec![make_item("a", &[])];
        let index = GraphIndex::new(&items);

        assert_eq!(index.position("zz"), None);
        assert!(index.get("zz").is_none());
        assert!(index.dependents("zz").is_empty());
    }

    #[test]
    fn test_empty_index() {
        let index = GraphIndex::new(&[]);
        assert!(index.is_empty());
        assert!(index.dangling_references().is_empty());
    }
}
