//! Strongly connected components of the in-set dependency graph.
//!
//! Tarjan's algorithm driven by an explicit call stack, so chain length is
//! bounded by heap rather than by the native stack.

use crate::index::{GraphIndex, ItemIdx};

const UNVISITED: usize = usize::MAX;

/// Component id per item, plus whether each item sits on a cycle.
#[derive(Clone, Debug, Default)]
pub(crate) struct Components {
    of: Vec<usize>,
    on_cycle: Vec<bool>,
    count: usize,
}

impl Components {
    pub(crate) fn new(index: &GraphIndex<'_>) -> Self {
        let n = index.len();
        let mut order = vec![UNVISITED; n];
        let mut low = vec![0; n];
        let mut on_stack = vec![false; n];
        let mut pending: Vec<ItemIdx> = Vec::new();
        // (node, next dependency to visit)
        let mut calls: Vec<(ItemIdx, usize)> = Vec::new();
        let mut of = vec![0; n];
        let mut sizes: Vec<usize> = Vec::new();
        let mut counter = 0;

        for root in 0..n {
            if order[root] != UNVISITED {
                continue;
            }
            order[root] = counter;
            low[root] = counter;
            counter += 1;
            pending.push(root);
            on_stack[root] = true;
            calls.push((root, 0));

            while let Some(top) = calls.last_mut() {
                let node = top.0;
                if let Some(&dep) = index.deps(node).get(top.1) {
                    top.1 += 1;
                    if order[dep] == UNVISITED {
                        order[dep] = counter;
                        low[dep] = counter;
                        counter += 1;
                        pending.push(dep);
                        on_stack[dep] = true;
                        calls.push((dep, 0));
                    } else if on_stack[dep] {
                        low[node] = low[node].min(order[dep]);
                    }
                    continue;
                }

                calls.pop();
                if let Some(&(parent, _)) = calls.last() {
                    low[parent] = low[parent].min(low[node]);
                }
                if low[node] != order[node] {
                    continue;
                }

                let component = sizes.len();
                let mut size = 0;
                while let Some(member) = pending.pop() {
                    on_stack[member] = false;
                    of[member] = component;
                    size += 1;
                    if member == node {
                        break;
                    }
                }
                sizes.push(size);
            }
        }

        let on_cycle = (0..n)
            .map(|idx| sizes[of[idx]] > 1 || index.deps(idx).contains(&idx))
            .collect();
        Self {
            of,
            on_cycle,
            count: sizes.len(),
        }
    }

    /// Whether `a` and `b` can each reach the other.
    #[inline]
    pub(crate) fn same(&self, a: ItemIdx, b: ItemIdx) -> bool {
        self.of[a] == self.of[b]
    }

    /// Whether `idx` belongs to a cycle, including a self-dependency.
    #[inline]
    pub(crate) fn on_cycle(&self, idx: ItemIdx) -> bool {
        self.on_cycle[idx]
    }

    pub(crate) fn count(&self) -> usize {
        self.count
    }
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
    fn test_chain_has_singleton_components() {
        let items = vec![make_item("a", &[]), make_item("b", &["a"])];
        let index = GraphIndex::new(&items);
        let comps = Components::new(&index);

        assert_eq!(comps.count(), 2);
        assert!(!comps.same(0, 1));
        assert!(!comps.on_cycle(0));
        assert!(!comps.on_cycle(1));
    }

    #[test]
    fn test_cycle_members_share_component() {
        // a -> b -> c -> b, d -> c
        let items = vec![
            make_item("a", &["b"]),
            make_item("b", &["c"]),
            make_item("c", &["b"]),
            make_item("d", &["c"]),
        ];
        let index = GraphIndex::new(&items);
        let comps = Components::new(&index);

        assert_eq!(comps.count(), 3);
        assert!(comps.same(1, 2));
        assert!(!comps.same(0, 1));
        assert!(!comps.same(3, 2));
        let cyclic: Vec<bool> = (0..4).map(|i| comps.on_cycle(i)).collect();
        assert_eq!(cyclic, vec![false, true, true, false]);
    }

    #[test]
    fn test_self_dependency_is_on_cycle() {
        let items = vec![make_item("a", &["a"]), make_item("b", &["a"])];
        let index = GraphIndex::new(&items);
        let comps = Components::new(&index);

        assert!(comps.on_cycle(0));
        assert!(!comps.on_cycle(1));
    }

    #[test]
    fn test_complete_digraph_is_one_component() {
        let ids: Vec<String> = (0..30).map(|i| format!("n{i}")).collect();
        let items: Vec<WorkItem> = ids
            .iter()
            .map(|id| {
                let others: Vec<&str> = ids
                    .iter()
                    .filter(|o| *o != id)
                    .map(String::as_str)
                    .collect();
                make_item(id, &others)
            })
            .collect();
        let index = GraphIndex::new(&items);
        let comps = Components::new(&index);

        assert_eq!(comps.count(), 1);
        assert!((0..30).all(|i| comps.on_cycle(i)));
    }

    #[test]
    fn test_deep_chain_does_not_overflow_stack() {
        let n = 50_000;
        let items: Vec<WorkItem> = (0..n)
            .map(|i| {
                let id = format!("t{i}");
                let dep = format!("t{}", i + 1);
                if i + 1 == n {
                    make_item(&id, &[])
                } else {
                    make_item(&id, &[dep.as_str()])
                }
            })
            .collect();
        let index = GraphIndex::new(&items);
        assert_eq!(Components::new(&index).count(), n);
    }
}
