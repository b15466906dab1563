//! Critical path over item depths.
//!
//! The critical path is the union of every dependency chain reaching the
//! maximum depth in the working set, not one representative chain.

mod tracer;

pub use tracer::{trace_critical_path, CriticalPath};
