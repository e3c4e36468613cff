//! Tracing/logging setup shared by every binary in the workspace.

/// Tracing configuration (filters, layers).
pub mod tracing;

/// Initialize process-wide observability with the given fallback filter.
///
/// `RUST_LOG` always wins over `default_filter`. Safe to call multiple times;
/// subsequent calls become no-ops.
pub fn init(default_filter: &str) {
    tracing::init(default_filter);
}
