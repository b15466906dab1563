//! Logging macros for graph analysis with verbosity level control.
//!
//! Nothing is formatted when the configured verbosity is below a macro's level.
//! Events go through `tracing`, so the embedding application picks the subscriber.
//! Verbosity levels:
//! - 0: SILENT
//! - 1: SUMMARY (one line per analysis call)
//! - 2: DETAIL (per-item decisions: blocked reasons, cycle re-entries, dangling refs)
//! - 3: TRACE (traversal internals)

/// Verbosity level constants.
pub const VERBOSITY_SILENT: u8 = 0;
pub const VERBOSITY_SUMMARY: u8 = 1;
pub const VERBOSITY_DETAIL: u8 = 2;
pub const VERBOSITY_TRACE: u8 = 3;

/// Log at SUMMARY level (verbosity >= 1).
///
/// Used for: item counts, max depth, bottleneck counts.
#[macro_export]
macro_rules! log_summary {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_SUMMARY {
            $crate::__tracing::info!($($arg)*);
        }
    };
}

/// Log at DETAIL level (verbosity >= 2).
///
/// Used for: blocked reasons, cycle re-entries, dangling references.
#[macro_export]
macro_rules! log_detail {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_DETAIL {
            $crate::__tracing::debug!($($arg)*);
        }
    };
}

/// Log at TRACE level (verbosity >= 3).
///
/// Used for: work stack pushes and pops, memo hits.
#[macro_export]
macro_rules! log_trace {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_TRACE {
            $crate::__tracing::trace!($($arg)*);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_constants() {
        assert_eq!(VERBOSITY_SILENT, 0);
        assert_eq!(VERBOSITY_SUMMARY, 1);
        assert_eq!(VERBOSITY_DETAIL, 2);
        assert_eq!(VERBOSITY_TRACE, 3);
    }

    #[test]
    fn test_log_macros_compile() {
        // No subscriber installed: every level must be a no-op
        for verbosity in [VERBOSITY_SILENT, VERBOSITY_TRACE] {
            log_summary!(verbosity, "summary {}", 1);
            log_detail!(verbosity, "detail {}", 2);
            log_trace!(verbosity, "trace {}", 3);
        }
    }
}
