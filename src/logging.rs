//! Log output for the command line client.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Setup logging of events reported by the client.
///
/// Events go to stderr so they don’t mix with the query results on stdout.
/// Only warnings are shown unless overridden via the RUST_LOG environment
/// variable.
///
/// E.g. To see retries and timeouts:
///   RUST_LOG=DEBUG
///
/// Or to see every received datagram:
///   RUST_LOG=dnsclient::net=TRACE
pub fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init()
        .ok();
}
