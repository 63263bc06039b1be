use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs a stderr subscriber so stdout carries only lesson output.
///
/// The filter comes from `RUST_LOG`, defaulting to `warn`. A second call
/// leaves the first subscriber in place.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(env_filter)
        .try_init();
}
