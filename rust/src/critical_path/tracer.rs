//! Critical path tracing over a computed depth map.

use crate::depth::DepthMap;
use crate::index::{GraphIndex, ItemIdx};
use crate::{log_summary, log_trace};

/// Union of every maximum-length dependency chain in a working set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CriticalPath {
    /// Ids on any maximum-length chain, in input order.
    pub ids: Vec<String>,
    /// Number of edges on the longest chain.
    pub length: usize,
}

impl CriticalPath {
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|c| c == id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }
}

/// Trace the critical path.
///
/// Every item at the maximum depth seeds the trace. From each marked item the
/// trace continues into *every* in-set dependency whose depth is exactly one
/// less, so parallel chains of equal length are all included. Depth strictly
/// decreases along the trace, which bounds it even when the graph has cycles.
pub fn trace_critical_path(
    index: &GraphIndex<'_>,
    depths: &DepthMap,
    verbosity: u8,
) -> CriticalPath {
    let Some(max_depth) = depths.max_depth() else {
        return CriticalPath::default();
    };

    let mut marked = vec![false; index.len()];
    let mut pending: Vec<ItemIdx> = (0..index.len())
        .filter(|&idx| depths.at(idx) == max_depth)
        .collect();

    while let Some(node) = pending.pop() {
        if marked[node] {
            continue;
        }
        marked[node] = true;

        let current = depths.at(node);
        if current == 0 {
            continue;
        }
        for &dep in index.deps(node) {
            if depths.at(dep) == current - 1 && !marked[dep] {
                log_trace!(
                    verbosity,
                    "critical edge {} -> {}",
                    index.id(node),
                    index.id(dep)
                );
                pending.push(dep);
            }
        }
    }

    let ids: Vec<String> = marked
        .iter()
        .enumerate()
        .filter(|(_, &on_path)| on_path)
        .map(|(idx, _)| index.id(idx).to_string())
        .collect();

    log_summary!(
        verbosity,
        "critical path: {} items, length {}",
        ids.len(),
        max_depth
    );
    CriticalPath {
        ids,
        length: max_depth,
    }
}
