use tracing_subscriber::EnvFilter;

pub fn init_logging(verbose: bool) {
    // Allow RUST_LOG overrides, fall back to flag-controlled level
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
