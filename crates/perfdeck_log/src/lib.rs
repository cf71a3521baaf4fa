//! `perfdeck_log` v1:
//! Logging bootstrap shared by perfdeck binaries.

use tracing::Level;

/// Map `-v` count and `-q` flag to a max log level.
///
/// `quiet` wins over any `verbose` count.
pub fn derive_log_level(verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::WARN;
    }
    match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install a stderr `fmt` subscriber capped at `level`.
pub fn init_logging(level: Level) -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| format!("Failed to install log subscriber: {err}"))
}
