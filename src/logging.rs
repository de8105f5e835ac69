//! Diagnostic logging wired to the verbosity count.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::echo::Verbosity;

/// The default log level for a verbosity count.
pub fn level_for(verbosity: Verbosity) -> Level {
    match verbosity {
        Verbosity::None => Level::WARN,
        Verbosity::Low => Level::INFO,
        Verbosity::Medium => Level::DEBUG,
        Verbosity::High => Level::TRACE,
    }
}

/// Install a stderr `tracing` subscriber.
///
/// `RUST_LOG` directives are honored; the verbosity supplies the default
/// level. Does nothing if a global subscriber is already set.
pub fn init_tracing(verbosity: Verbosity) {
    let filter = EnvFilter::from_default_env().add_directive(level_for(verbosity).into());
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
