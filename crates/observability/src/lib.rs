//! Tracing and logging setup shared by whatever process hosts the yard
//! services. The domain crates only emit `tracing` events; this crate decides
//! where they go.

/// Initialize process-wide tracing from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init_with(&TracingConfig::from_env());
}

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use self::tracing::{LogFormat, TracingConfig, init_with};
