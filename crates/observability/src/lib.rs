//! Tracing/logging setup shared by binaries.

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use self::tracing::{LogFormat, ParseLogFormatError};

/// Initialize process-wide logging with the given output format and filter.
///
/// `RUST_LOG`, when set, wins over `default_filter`. Safe to call multiple
/// times; subsequent calls become no-ops.
pub fn init(format: LogFormat, default_filter: &str) {
    self::tracing::init(format, default_filter);
}
