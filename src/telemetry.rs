//! Diagnostic logging.
//!
//! Events are written to stderr so they never interleave with the prompts on
//! stdout. Verbosity comes from `RUST_LOG`; when it is unset only warnings and
//! errors are shown.
//!
//! ```bash
//! RUST_LOG=debug orderdesk --orders-file orders.txt
//! ```
use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
