//! Logging setup for binaries and tests
//!
//! The library crates emit `tracing` events (tree construction at `DEBUG`,
//! individual merges at `TRACE`, skipped symbols at `WARN`) but never install
//! a subscriber. Programs that want to see them call [`init_subscriber`] once
//! at startup.

pub use tracing::Level;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::FmtSubscriber;

/// Install a global subscriber that writes to standard error
///
/// Fails if a global subscriber has already been set.
pub fn init_subscriber(max_level: Level) -> Result<(), SetGlobalDefaultError> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(max_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
}
