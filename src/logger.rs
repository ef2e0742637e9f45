use log::{Level, Log, Metadata, Record};

use std::io::{stderr, Write};

pub struct SimpleLogger;

pub static SIMPLE_LOGGER: SimpleLogger = SimpleLogger;

impl Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(&mut stderr(), "{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {
        let _ = stderr().flush();
    }
}

/// Initialize the logging system. Debug traces stay off unless
/// CHSMACK_DEBUG is set in the environment.
pub fn init() -> Result<(), log::SetLoggerError> {
    log::set_logger(&SIMPLE_LOGGER)?;
    let level = if std::env::var_os("CHSMACK_DEBUG").is_some() {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    log::set_max_level(level);
    Ok(())
}
