//! One-call graph analysis and summary statistics.

use crate::bottleneck::{detect_bottlenecks, Bottleneck};
use crate::config::{AnalysisConfig, ConfigError};
use crate::critical_path::{trace_critical_path, CriticalPath};
use crate::depth::{compute_depths, DepthMap};
use crate::index::GraphIndex;
use crate::levels::{partition_levels, Levels};
use crate::models::{Priority, Status, WorkItem};
use crate::{log_detail, log_summary};

/// Structural analysis of one working set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GraphAnalysis {
    pub depths: DepthMap,
    pub critical_path: CriticalPath,
    pub levels: Levels,
    pub bottlenecks: Vec<Bottleneck>,
}

/// Run depth, critical path, level and bottleneck analysis over `items`.
///
/// `items` is the working set: dependencies outside it are treated as satisfied.
/// Everything is computed fresh; nothing is cached between calls.
pub fn analyze(
    items: &[WorkItem],
    config: &AnalysisConfig,
) -> Result<GraphAnalysis, ConfigError> {
    config.validate()?;
    let verbosity = config.verbosity;
    let index = GraphIndex::new(items);

    for (item_id, missing) in index.dangling_references() {
        log_detail!(
            verbosity,
            "{} depends on {} outside the working set",
            item_id,
            missing
        );
    }

    let depths = compute_depths(&index, verbosity);
    let critical_path = trace_critical_path(&index, &depths, verbosity);
    let levels = partition_levels(&index, verbosity);
    let bottlenecks = detect_bottlenecks(&index, config.bottleneck_threshold, verbosity);

    log_summary!(
        verbosity,
        "analyzed {} items: max depth {:?}, {} critical, {} bottlenecks",
        index.len(),
        depths.max_depth(),
        critical_path.len(),
        bottlenecks.len()
    );
    Ok(GraphAnalysis {
        depths,
        critical_path,
        levels,
        bottlenecks,
    })
}

/// Renderer-agnostic counts describing a working set and its analysis.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GraphStats {
    pub total_items: usize,
    /// Count per status, in [`Status::ALL`] order.
    pub by_status: Vec<(Status, usize)>,
    /// Count per priority, in [`Priority::ALL`] order.
    pub by_priority: Vec<(Priority, usize)>,
    /// Dependency edges whose target is in the working set.
    pub dependency_edges: usize,
    pub dangling_references: usize,
    /// `None` for an empty working set.
    pub max_depth: Option<usize>,
    pub critical_path_items: usize,
    pub level_count: usize,
    pub bottleneck_count: usize,
    pub cyclic_items: usize,
}

impl GraphStats {
    /// Summarize `items` together with an analysis computed over the same items.
    pub fn collect(items: &[WorkItem], analysis: &GraphAnalysis) -> Self {
        let index = GraphIndex::new(items);
        let by_status = Status::ALL
            .iter()
            .map(|&status| (status, items.iter().filter(|i| i.status == status).count()))
            .collect();
        let by_priority = Priority::ALL
            .iter()
            .map(|&priority| {
                let count = items.iter().filter(|i| i.priority == priority).count();
                (priority, count)
            })
            .collect();

        Self {
            total_items: items.len(),
            by_status,
            by_priority,
            dependency_edges: index.edge_count(),
            dangling_references: index.dangling_references().len(),
            max_depth: analysis.depths.max_depth(),
            critical_path_items: analysis.critical_path.len(),
            level_count: analysis.levels.len(),
            bottleneck_count: analysis.bottlenecks.len(),
            cyclic_items: analysis.depths.cyclic_ids().len(),
        }
    }

    pub fn status_count(&self, status: Status) -> usize {
        self.by_status
            .iter()
            .find(|(s, _)| *s == status)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    /// Flat `(name, count)` pairs for renderers that want a keyed map.
    ///
    /// `max_depth` is left out for an empty working set rather than reported as 0.
    pub fn entries(&self) -> Vec<(String, usize)> {
        let mut out = vec![("total_items".to_string(), self.total_items)];
        for (status, count) in &self.by_status {
            out.push((format!("status_{}", status), *count));
        }
        for (priority, count) in &self.by_priority {
            out.push((format!("priority_{}", priority), *count));
        }
        out.push(("dependency_edges".to_string(), self.dependency_edges));
        out.push(("dangling_references".to_string(), self.dangling_references));
        if let Some(max_depth) = self.max_depth {
            out.push(("max_depth".to_string(), max_depth));
        }
        out.push(("critical_path_items".to_string(), self.critical_path_items));
        out.push(("level_count".to_string(), self.level_count));
        out.push(("bottleneck_count".to_string(), self.bottleneck_count));
        out.push(("cyclic_items".to_string(), self.cyclic_items));
        out
    }

    pub fn priority_count(&self, priority: Priority) -> usize {
        self.by_priority
            .iter()
            .find(|(p, _)| *p == priority)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }
}
