//! Longest-dependency-chain depth for every item, tolerant of cycles.
//!
//! Evaluation walks dependencies with an explicit work stack instead of native
//! recursion. Items are first grouped into strongly connected components; an
//! edge between two items of the same component closes a cycle and contributes
//! depth 0. Every other edge contributes `1 + depth(dep)` as usual.
//!
//! Edges between components form a DAG, so every result is path-independent
//! and memoized once per call. For acyclic input this is exactly
//! `depth = 1 + max(depth(dep))`, with 0 for items without in-set dependencies.

use rustc_hash::FxHashMap;

use crate::components::Components;
use crate::index::{GraphIndex, ItemIdx};
use crate::{log_detail, log_summary, log_trace};

/// One node being evaluated on the work stack.
struct Frame {
    node: ItemIdx,
    next_dep: usize,
    best: usize,
}

impl Frame {
    fn new(node: ItemIdx) -> Self {
        Self {
            node,
            next_dep: 0,
            best: 0,
        }
    }

    fn absorb(&mut self, dep_depth: usize) {
        self.best = self.best.max(dep_depth + 1);
    }
}

/// Depth evaluator owning the per-call memo table.
///
/// Create one per analysis call; it is dropped with the call.
pub(crate) struct DepthWalker<'i, 'a> {
    index: &'i GraphIndex<'a>,
    components: Components,
    memo: Vec<Option<usize>>,
    stack: Vec<Frame>,
    verbosity: u8,
}

impl<'i, 'a> DepthWalker<'i, 'a> {
    pub(crate) fn new(index: &'i GraphIndex<'a>, verbosity: u8) -> Self {
        let components = Components::new(index);
        log_detail!(
            verbosity,
            "{} items in {} components",
            index.len(),
            components.count()
        );
        Self {
            index,
            components,
            memo: vec![None; index.len()],
            stack: Vec::new(),
            verbosity,
        }
    }

    /// Whether `idx` sits on a dependency cycle.
    pub(crate) fn on_cycle(&self, idx: ItemIdx) -> bool {
        self.components.on_cycle(idx)
    }

    /// Depth of `root`.
    pub(crate) fn resolve(&mut self, root: ItemIdx) -> usize {
        if let Some(depth) = self.memo[root] {
            return depth;
        }

        self.stack.push(Frame::new(root));
        let mut child: Option<usize> = None;

        while let Some(frame) = self.stack.last_mut() {
            if let Some(depth) = child.take() {
                frame.absorb(depth);
            }

            let deps = self.index.deps(frame.node);
            if let Some(&dep) = deps.get(frame.next_dep) {
                frame.next_dep += 1;

                if self.components.same(frame.node, dep) {
                    log_detail!(
                        self.verbosity,
                        "cycle edge: {} -> {}",
                        self.index.id(frame.node),
                        self.index.id(dep)
                    );
                } else if let Some(depth) = self.memo[dep] {
                    log_trace!(
                        self.verbosity,
                        "memo hit {} = {}",
                        self.index.id(dep),
                        depth
                    );
                    child = Some(depth);
                } else {
                    // Cross-component edges are acyclic, so `dep` is never already on the stack
                    log_trace!(self.verbosity, "push {}", self.index.id(dep));
                    self.stack.push(Frame::new(dep));
                }
                continue;
            }

            // All dependencies absorbed; this frame is finished
            let node = frame.node;
            let depth = frame.best;
            self.stack.pop();
            self.memo[node] = Some(depth);
            log_trace!(self.verbosity, "pop {} depth={}", self.index.id(node), depth);

            if self.stack.is_empty() {
                return depth;
            }
            child = Some(depth);
        }

        // Unreachable: the loop only exits through the return above
        0
    }
}

/// Depth per item of one working set, in input order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DepthMap {
    entries: Vec<(String, usize)>,
    lookup: FxHashMap<String, usize>,
    cyclic: Vec<String>,
}

impl DepthMap {
    pub(crate) fn from_entries(entries: Vec<(String, usize)>, cyclic: Vec<String>) -> Self {
        let lookup = entries.iter().cloned().collect();
        Self {
            entries,
            lookup,
            cyclic,
        }
    }

    /// Depth of `id`, or `None` if it is not in the working set.
    pub fn get(&self, id: &str) -> Option<usize> {
        self.lookup.get(id).copied()
    }

    /// Depth at input position `idx`.
    pub(crate) fn at(&self, idx: ItemIdx) -> usize {
        self.entries[idx].1
    }

    /// `(id, depth)` pairs in input order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(id, depth)| (id.as_str(), *depth))
    }

    /// Largest depth, or `None` for an empty working set.
    pub fn max_depth(&self) -> Option<usize> {
        self.entries.iter().map(|(_, depth)| *depth).max()
    }

    /// Ids that sit on a dependency cycle, in input order.
    pub fn cyclic_ids(&self) -> &[String] {
        &self.cyclic
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Compute the depth of every item in the working set.
pub fn compute_depths(index: &GraphIndex<'_>, verbosity: u8) -> DepthMap {
    let mut walker = DepthWalker::new(index, verbosity);
    let mut entries = Vec::with_capacity(index.len());
    let mut cyclic = Vec::new();

    for idx in 0..index.len() {
        let depth = walker.resolve(idx);
        let id = index.id(idx).to_string();
        if walker.on_cycle(idx) {
            cyclic.push(id.clone());
        }
        entries.push((id, depth));
    }

    log_summary!(
        verbosity,
        "depths computed for {} items ({} on a cycle)",
        entries.len(),
        cyclic.len()
    );
    DepthMap::from_entries(entries, cyclic)
}
