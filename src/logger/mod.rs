pub mod formats;

use std::io::Write;
use log::{LevelFilter, Log, Metadata, Record};
use anyhow::{anyhow, Result};
use crate::logger::formats::{JobFormatter, LineFormat};

/// A `log` backend that writes formatted lines to stderr.
pub struct LineLogger<F: LineFormat> {
    formatter: F,
    level: LevelFilter,
}

impl<F: LineFormat> LineLogger<F> {
    pub fn new(formatter: F, level: LevelFilter) -> Self {
        LineLogger { formatter, level }
    }
}

impl<F: LineFormat + Send + Sync> Log for LineLogger<F> {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.formatter.format(record.level(), &record.args().to_string());
        let _ = std::io::stderr().lock().write_all(line.as_bytes());
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Parses a level name such as `info` or `debug`.
pub fn parse_level(level: &str) -> Result<LevelFilter> {
    level
        .parse::<LevelFilter>()
        .map_err(|_| anyhow!("Invalid log level: {}", level))
}

/// Installs the job-aware logger as the global `log` backend.
pub fn init(job_id: Option<&str>, level: LevelFilter) -> Result<()> {
    let logger = LineLogger::new(JobFormatter::new(job_id), level);
    log::set_boxed_logger(Box::new(logger)).map_err(|e| anyhow!("{}", e))?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::formats::BasicFormatter;
    use log::Level;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug").unwrap(), LevelFilter::Debug);
        assert_eq!(parse_level("WARN").unwrap(), LevelFilter::Warn);
        assert!(parse_level("loud").is_err());
    }

    #[test]
    fn test_logger_filters_by_level() {
        let logger = LineLogger::new(BasicFormatter, LevelFilter::Info);
        let info = Metadata::builder().level(Level::Info).build();
        let debug = Metadata::builder().level(Level::Debug).build();
        assert!(logger.enabled(&info));
        assert!(!logger.enabled(&debug));
    }
}
