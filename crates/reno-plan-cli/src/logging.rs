use tracing_subscriber::EnvFilter;

/// Initialise a stderr tracing subscriber so stdout stays machine-readable.
///
/// Filtering follows `RUST_LOG`; without it only warnings and errors are shown.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
