use tracing_subscriber::EnvFilter;
use crate::config::SystemConfig;

/// Configures tracing once for the whole process.
///
/// `RUST_LOG` wins when set; otherwise the configured filter is used.
pub fn setup_tracing(config: &SystemConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .init();
}
