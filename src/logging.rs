use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global tracing subscriber for the API server.
/// - Respects `RUST_LOG` if set
/// - Falls back to `info,lucio_api=info,tower_http=info`
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,lucio_api=info,tower_http=info"));
    let _ = fmt().with_env_filter(env_filter).with_target(false).try_init();
}

/// Quieter subscriber for the CLI; logs go to stderr so `--json` output stays parseable.
pub fn init_cli() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}
