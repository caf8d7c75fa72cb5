//! Tracing/logging setup shared by the binaries.

/// Initialize process-wide logging with JSON output.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(tracing::LogFormat::Json);
}

/// Subscriber configuration (filters, output format).
pub mod tracing;

pub use crate::tracing::LogFormat;
