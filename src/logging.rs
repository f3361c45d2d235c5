use tracing::Level;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins when set, otherwise everything at `level` and above.
/// Events go to stderr, stdout is reserved for command output.
pub fn setup_tracing(level: Level) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string().to_lowercase()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
