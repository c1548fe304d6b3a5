use log::{Level, LevelFilter, Metadata, Record};
use std::io::Write;

struct StderrLogger {
    level: Level,
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let mut stderr = std::io::stderr().lock();
            let _ = writeln!(
                stderr,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Routes `log` records up to `level` to stderr.
///
/// Only the first call installs the logger; later calls are ignored.
pub fn init_logger(level: Level) {
    let logger = StderrLogger { level };
    if log::set_boxed_logger(Box::new(logger)).is_ok() {
        log::set_max_level(level.to_level_filter());
    }
}

/// Like [`init_logger`], reading the level from `CSS_HOOKS_LOG`
/// (`error`, `warn`, `info`, `debug` or `trace`). Nothing is installed when
/// the variable is unset or unreadable.
pub fn init_logger_from_env() {
    let level = std::env::var("CSS_HOOKS_LOG")
        .ok()
        .and_then(|value| value.parse::<LevelFilter>().ok())
        .and_then(|filter| filter.to_level());
    if let Some(level) = level {
        init_logger(level);
    }
}
