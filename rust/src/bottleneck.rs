//! Structural bottleneck detection.

use crate::index::GraphIndex;
use crate::{log_detail, log_summary};

/// An item that other items directly depend on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bottleneck {
    pub id: String,
    /// Number of other in-set items listing this one as a dependency.
    pub blocks_count: usize,
}

/// Count direct dependents for every item and report those at or above `threshold`.
///
/// Each dependent counts once no matter how often it lists the item, and an
/// item never counts itself. The ranking is descending by `blocks_count`; the
/// sort is stable so equal counts keep input order.
pub fn detect_bottlenecks(
    index: &GraphIndex<'_>,
    threshold: usize,
    verbosity: u8,
) -> Vec<Bottleneck> {
    let mut counts = vec![0usize; index.len()];
    let mut seen = vec![usize::MAX; index.len()];

    for dependent in 0..index.len() {
        for &dep in index.deps(dependent) {
            // `seen[dep] == dependent` marks a repeat within one dependency list
            if dep == dependent || seen[dep] == dependent {
                continue;
            }
            seen[dep] = dependent;
            counts[dep] += 1;
        }
    }

    let mut ranking: Vec<Bottleneck> = counts
        .iter()
        .enumerate()
        .filter(|(_, &count)| count >= threshold)
        .map(|(idx, &count)| Bottleneck {
            id: index.id(idx).to_string(),
            blocks_count: count,
        })
        .collect();
    ranking.sort_by(|a, b| b.blocks_count.cmp(&a.blocks_count));

    for bottleneck in &ranking {
        log_detail!(
            verbosity,
            "bottleneck {} blocks {} items",
            bottleneck.id,
            bottleneck.blocks_count
        );
    }
    log_summary!(verbosity, "{} bottlenecks found", ranking.len());
    ranking
}
