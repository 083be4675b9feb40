//! Diagnostic output through a `tracing` subscriber on stderr

use tracing::level_filters::LevelFilter;

/// Map CLI verbosity flags onto a log level
///
/// `quiet` wins over any verbosity count.
pub const fn level_for(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global formatting subscriber
///
/// Later calls are ignored so tests and embedding applications may install
/// their own subscriber first.
pub fn init(level: LevelFilter) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
