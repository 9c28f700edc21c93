//! Tracing/logging setup shared by every binary.

/// Initialize process-wide tracing with JSON output.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(LogFormat::Json);
}

pub use tracing::LogFormat;

/// Tracing configuration (filters, layers).
pub mod tracing;
