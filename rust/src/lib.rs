//! Dependency-graph analysis and readiness scheduling for work items.
//!
//! Every entry point is a pure function over an immutable snapshot of work
//! items. Memo tables and visited markers are allocated per call, and every
//! emitted sequence is ordered by input position or an explicit stable sort,
//! so identical input always produces identical output.
//!
//! Dependency ids that do not resolve in the supplied items are treated as
//! satisfied everywhere, and dependency cycles are tolerated rather than
//! rejected.

// Allow clippy warning triggered by PyO3 macro expansion
#![cfg_attr(feature = "python", allow(clippy::useless_conversion))]

pub mod analysis;
pub mod bottleneck;
mod components;
mod config;
pub mod critical_path;
pub mod depth;
pub mod filter;
pub mod index;
pub mod levels;
pub mod logging;
mod models;
pub mod neighborhood;
#[cfg(feature = "python")]
mod python;
pub mod readiness;

#[doc(hidden)]
pub use tracing as __tracing;

pub use analysis::{analyze, GraphAnalysis, GraphStats};
pub use bottleneck::{detect_bottlenecks, Bottleneck};
pub use config::{AnalysisConfig, ConfigError};
pub use critical_path::{trace_critical_path, CriticalPath};
pub use depth::{compute_depths, DepthMap};
pub use filter::ItemFilter;
pub use index::GraphIndex;
pub use levels::{partition_levels, Levels};
pub use models::{ModelError, Priority, Status, WorkItem};
pub use neighborhood::{
    expand_neighborhood, expand_neighborhood_with, Neighborhood, NeighborhoodScope,
};
pub use readiness::{classify_readiness, BlockedItem, ReadinessReport};
