//! PyO3 bindings.
//!
//! Only type conversion lives here; every result comes from the Rust API.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use std::collections::HashMap;

use crate::analysis::{analyze, GraphStats};
use crate::config::AnalysisConfig;
use crate::index::GraphIndex;
use crate::models::{ModelError, Priority, Status, WorkItem};
use crate::neighborhood::{expand_neighborhood_with, NeighborhoodScope};
use crate::readiness::classify_readiness;

/// A work item as seen from Python. Status and priority are plain strings.
#[pyclass(name = "WorkItem")]
#[derive(Clone, Debug)]
pub struct PyWorkItem {
    #[pyo3(get, set)]
    pub id: String,
    #[pyo3(get, set)]
    pub title: String,
    #[pyo3(get, set)]
    pub item_type: String,
    #[pyo3(get, set)]
    pub status: String,
    #[pyo3(get, set)]
    pub priority: String,
    #[pyo3(get, set)]
    pub dependencies: Vec<String>,
    #[pyo3(get, set)]
    pub milestone: Option<String>,
}

#[pymethods]
impl PyWorkItem {
    #[new]
    #[pyo3(signature = (
        id,
        status="not_started".to_string(),
        priority="medium".to_string(),
        dependencies=Vec::new(),
        title=String::new(),
        item_type=String::new(),
        milestone=None
    ))]
    fn new(
        id: String,
        status: String,
        priority: String,
        dependencies: Vec<String>,
        title: String,
        item_type: String,
        milestone: Option<String>,
    ) -> PyResult<Self> {
        let item = Self {
            id,
            title,
            item_type,
            status,
            priority,
            dependencies,
            milestone,
        };
        // Reject bad enum strings at construction rather than at analysis time
        item.to_model()?;
        Ok(item)
    }

    fn __repr__(&self) -> String {
        format!(
            "WorkItem(id={:?}, status={}, priority={}, deps={})",
            self.id,
            self.status,
            self.priority,
            self.dependencies.len()
        )
    }
}

impl PyWorkItem {
    fn to_model(&self) -> PyResult<WorkItem> {
        let status: Status = self
            .status
            .parse()
            .map_err(|e: ModelError| PyValueError::new_err(e.to_string()))?;
        let priority: Priority = self
            .priority
            .parse()
            .map_err(|e: ModelError| PyValueError::new_err(e.to_string()))?;
        Ok(WorkItem {
            id: self.id.clone(),
            title: self.title.clone(),
            item_type: self.item_type.clone(),
            status,
            priority,
            dependencies: self.dependencies.clone(),
            milestone: self.milestone.clone(),
        })
    }
}

fn to_models(items: &[PyWorkItem]) -> PyResult<Vec<WorkItem>> {
    items.iter().map(PyWorkItem::to_model).collect()
}

/// Analysis configuration (PyO3 wrapper).
#[pyclass(name = "AnalysisConfig")]
#[derive(Clone, Debug)]
pub struct PyAnalysisConfig {
    #[pyo3(get, set)]
    pub verbosity: u8,
    #[pyo3(get, set)]
    pub bottleneck_threshold: usize,
}

#[pymethods]
impl PyAnalysisConfig {
    #[new]
    #[pyo3(signature = (verbosity=None, bottleneck_threshold=None))]
    fn new(verbosity: Option<u8>, bottleneck_threshold: Option<usize>) -> Self {
        let defaults = AnalysisConfig::default();
        Self {
            verbosity: verbosity.unwrap_or(defaults.verbosity),
            bottleneck_threshold: bottleneck_threshold.unwrap_or(defaults.bottleneck_threshold),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "AnalysisConfig(verbosity={}, bottleneck_threshold={})",
            self.verbosity, self.bottleneck_threshold
        )
    }
}

impl From<&PyAnalysisConfig> for AnalysisConfig {
    fn from(config: &PyAnalysisConfig) -> Self {
        Self {
            verbosity: config.verbosity,
            bottleneck_threshold: config.bottleneck_threshold,
        }
    }
}

fn resolve_config(config: Option<PyAnalysisConfig>) -> AnalysisConfig {
    config
        .as_ref()
        .map(AnalysisConfig::from)
        .unwrap_or_default()
}

/// Result of `analyze_graph`.
#[pyclass(name = "GraphAnalysis")]
#[derive(Clone, Debug, Default)]
pub struct PyGraphAnalysis {
    /// (id, depth) in input order
    #[pyo3(get)]
    pub depths: Vec<(String, usize)>,
    #[pyo3(get)]
    pub cyclic_ids: Vec<String>,
    #[pyo3(get)]
    pub critical_path: Vec<String>,
    #[pyo3(get)]
    pub critical_path_length: usize,
    #[pyo3(get)]
    pub levels: Vec<Vec<String>>,
    /// (id, blocks_count), descending
    #[pyo3(get)]
    pub bottlenecks: Vec<(String, usize)>,
}

#[pymethods]
impl PyGraphAnalysis {
    fn __repr__(&self) -> String {
        format!(
            "GraphAnalysis(items={}, critical_path={}, levels={}, bottlenecks={})",
            self.depths.len(),
            self.critical_path.len(),
            self.levels.len(),
            self.bottlenecks.len()
        )
    }
}

/// Result of `classify_readiness`.
#[pyclass(name = "ReadinessResult")]
#[derive(Clone, Debug, Default)]
pub struct PyReadinessResult {
    #[pyo3(get)]
    pub ready: Vec<String>,
    /// (id, unmet dependency ids)
    #[pyo3(get)]
    pub blocked: Vec<(String, Vec<String>)>,
}

#[pymethods]
impl PyReadinessResult {
    fn __repr__(&self) -> String {
        format!(
            "ReadinessResult(ready={}, blocked={})",
            self.ready.len(),
            self.blocked.len()
        )
    }
}

/// Compute depths, critical path, levels and bottlenecks for a working set.
///
/// # Raises
/// * ValueError on an unknown status/priority string or an invalid config
#[pyfunction]
#[pyo3(signature = (items, config=None))]
fn analyze_graph(
    items: Vec<PyWorkItem>,
    config: Option<PyAnalysisConfig>,
) -> PyResult<PyGraphAnalysis> {
    let items = to_models(&items)?;
    let config = resolve_config(config);
    let analysis = analyze(&items, &config).map_err(|e| PyValueError::new_err(e.to_string()))?;

    Ok(PyGraphAnalysis {
        depths: analysis
            .depths
            .iter()
            .map(|(id, depth)| (id.to_string(), depth))
            .collect(),
        cyclic_ids: analysis.depths.cyclic_ids().to_vec(),
        critical_path_length: analysis.critical_path.length,
        critical_path: analysis.critical_path.ids,
        levels: analysis.levels.buckets,
        bottlenecks: analysis
            .bottlenecks
            .into_iter()
            .map(|b| (b.id, b.blocks_count))
            .collect(),
    })
}

/// Split not-started items of the full collection into ready and blocked.
#[pyfunction]
#[pyo3(name = "classify_readiness", signature = (items, verbosity=0))]
fn py_classify_readiness(items: Vec<PyWorkItem>, verbosity: u8) -> PyResult<PyReadinessResult> {
    let items = to_models(&items)?;
    let report = classify_readiness(&items, verbosity);

    Ok(PyReadinessResult {
        ready: report.ready_ids().into_iter().map(String::from).collect(),
        blocked: report
            .blocked
            .iter()
            .map(|b| {
                (
                    b.item.id.clone(),
                    b.unmet.iter().map(|s| s.to_string()).collect(),
                )
            })
            .collect(),
    })
}

/// Id of the highest-priority ready item, or None.
#[pyfunction]
#[pyo3(signature = (items, verbosity=0))]
fn next_item(items: Vec<PyWorkItem>, verbosity: u8) -> PyResult<Option<String>> {
    let items = to_models(&items)?;
    let report = classify_readiness(&items, verbosity);
    Ok(report.next().map(|item| item.id.clone()))
}

/// Focus + transitive dependencies + direct dependents (or all dependents
/// when `transitive_dependents` is set). Empty for an unknown focus.
#[pyfunction]
#[pyo3(
    name = "expand_neighborhood",
    signature = (items, focus_id, transitive_dependents=false, verbosity=0)
)]
fn py_expand_neighborhood(
    items: Vec<PyWorkItem>,
    focus_id: &str,
    transitive_dependents: bool,
    verbosity: u8,
) -> PyResult<Vec<String>> {
    let items = to_models(&items)?;
    let index = GraphIndex::new(&items);
    let scope = if transitive_dependents {
        NeighborhoodScope::TransitiveDependents
    } else {
        NeighborhoodScope::DirectDependents
    };
    Ok(expand_neighborhood_with(&index, focus_id, scope, verbosity).ids)
}

/// Summary counts keyed by name. `max_depth` is absent for an empty working set.
#[pyfunction]
#[pyo3(signature = (items, config=None))]
fn graph_stats(
    items: Vec<PyWorkItem>,
    config: Option<PyAnalysisConfig>,
) -> PyResult<HashMap<String, usize>> {
    let items = to_models(&items)?;
    let config = resolve_config(config);
    let analysis = analyze(&items, &config).map_err(|e| PyValueError::new_err(e.to_string()))?;
    let stats = GraphStats::collect(&items, &analysis);

    Ok(stats.entries().into_iter().collect())
}

/// The backlog.rust Python module.
#[pymodule]
fn rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyWorkItem>()?;
    m.add_class::<PyAnalysisConfig>()?;
    m.add_class::<PyGraphAnalysis>()?;
    m.add_class::<PyReadinessResult>()?;

    m.add_function(wrap_pyfunction!(analyze_graph, m)?)?;
    m.add_function(wrap_pyfunction!(py_classify_readiness, m)?)?;
    m.add_function(wrap_pyfunction!(next_item, m)?)?;
    m.add_function(wrap_pyfunction!(py_expand_neighborhood, m)?)?;
    m.add_function(wrap_pyfunction!(graph_stats, m)?)?;

    Ok(())
}
