//! Tracing and logging setup shared by the stockroom binaries.

/// Initialize process-wide tracing with settings read from the environment.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() -> Result<(), tracing::LogConfigError> {
    let config = tracing::LogConfig::from_env()?;
    tracing::init(&config);
    Ok(())
}

/// Tracing configuration (filters, output format).
pub mod tracing;
