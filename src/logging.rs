use tracing_subscriber::EnvFilter;

/// Install a stderr `tracing` subscriber honouring `RUST_LOG`, defaulting to
/// INFO. Returns `false` when a global subscriber is already set.
pub fn init_stderr() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()
        .is_ok()
}
