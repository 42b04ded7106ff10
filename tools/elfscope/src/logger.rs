//! Stderr logging for elfscope diagnostics.
//!
//! Three output levels controlled by CLI flags:
//! - **Quiet** (`-q`): errors only
//! - **Default** (no flag): warnings and errors
//! - **Verbose** (`-v`, `-vv`): decoder progress, then per-table tracing

use std::io::Write;

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Writes every enabled record to stderr as `[LEVEL] target: message`.
struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut stderr = std::io::stderr().lock();
        // Diagnostics are best-effort; a closed stderr must not abort the run.
        let _ = writeln!(
            stderr,
            "[{}] {}: {}",
            level_name(record.level()),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Returns the fixed-width level name for aligned output.
fn level_name(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN ",
        Level::Info => "INFO ",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}

/// Maps the CLI flags to a level filter.
pub fn level_filter(quiet: bool, verbose: u8) -> LevelFilter {
    match (quiet, verbose) {
        (true, _) => LevelFilter::Error,
        (false, 0) => LevelFilter::Warn,
        (false, 1) => LevelFilter::Debug,
        (false, _) => LevelFilter::Trace,
    }
}

/// Install the logger for the current process.
///
/// Calling this more than once keeps the first logger and only updates the
/// level.
pub fn init(quiet: bool, verbose: u8) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level_filter(quiet, verbose));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_mapping() {
        assert_eq!(level_filter(true, 0), LevelFilter::Error);
        assert_eq!(level_filter(false, 0), LevelFilter::Warn);
        assert_eq!(level_filter(false, 1), LevelFilter::Debug);
        assert_eq!(level_filter(false, 5), LevelFilter::Trace);
    }

    #[test]
    fn level_names_are_fixed_width() {
        for level in Level::iter() {
            assert_eq!(level_name(level).len(), 5);
        }
    }
}
