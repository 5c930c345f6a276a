//! Logging and tracing bootstrap for staylist.

use staylist_kernel::settings::{LogFormat, TelemetrySettings};
use tracing_subscriber::EnvFilter;

/// Initialize the tracing pipeline once at startup.
/// Honors `RUST_LOG` when set; defaults to `info` otherwise.
pub fn init(settings: &TelemetrySettings) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = match settings.log_format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    // A second init (e.g. in tests) is not an error worth dying over.
    if result.is_err() {
        tracing::debug!("tracing subscriber was already initialized");
    }
}
