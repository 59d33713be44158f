//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Filter directive used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LEVEL: &str = "info";

/// Pick the filter directive: `RUST_LOG` first, then the configured level.
pub fn filter_directive(env: Option<String>, configured: Option<&str>) -> String {
    env.filter(|v| !v.trim().is_empty())
        .or_else(|| configured.map(str::to_string))
        .unwrap_or_else(|| DEFAULT_LEVEL.to_string())
}

/// Install a stderr `fmt` subscriber. Later calls are no-ops.
pub fn init_tracing(configured: Option<&str>) {
    let directive = filter_directive(std::env::var("RUST_LOG").ok(), configured);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
