//! Tracing subscriber setup for the binary

use crate::core::error::{CoreError, CoreResult};
use tracing_subscriber::EnvFilter;

/// Install a formatted subscriber on stderr
///
/// `RUST_LOG` wins over `default_directive`. Installing twice is harmless;
/// the second call keeps the first subscriber.
pub fn init_logging(default_directive: &str) -> CoreResult<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_directive).map_err(|e| CoreError::LogFilter {
            directive: default_directive.to_string(),
            message: e.to_string(),
        })?,
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    Ok(())
}
