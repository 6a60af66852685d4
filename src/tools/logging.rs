use tracing_subscriber::EnvFilter;

/// Install the stderr tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbose` selects between debug
/// output for this crate and warnings only.
pub fn init(verbose: bool) {
    let default = if verbose { "rabbit=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .init();
}
