use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use chrono::Local;
use color_eyre::Result;
use color_eyre::eyre::WrapErr;

use super::TIMESTAMP_FORMAT;

/// Severity column of a log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

impl Level {
    fn as_str(self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Error => "ERROR",
        }
    }
}

/// Append-only log sink writing one `timestamp | LEVEL | message` line per
/// record. Opened once at startup and owned by the reporter for the whole
/// process lifetime; every failure here is fatal to the monitor.
pub struct LogSink {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl LogSink {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .wrap_err_with(|| format!("cannot open log file {}", path.display()))?;
        Ok(LogSink {
            writer: BufWriter::new(file),
            path,
        })
    }

    /// Appends one record and flushes so the file tails cleanly.
    pub fn record(&mut self, level: Level, message: &str) -> Result<()> {
        let stamp = Local::now().format(TIMESTAMP_FORMAT);
        writeln!(self.writer, "{stamp} | {} | {message}", level.as_str())
            .and_then(|_| self.writer.flush())
            .wrap_err_with(|| format!("cannot write to log file {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_use_pipe_delimited_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("monitor.log");

        let mut sink = LogSink::open(&path).unwrap();
        sink.record(Level::Info, "System Monitor Started").unwrap();
        sink.record(Level::Error, "disk query failed").unwrap();
        drop(sink);

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("| INFO | System Monitor Started"));
        assert!(lines[1].ends_with("| ERROR | disk query failed"));

        let stamp = lines[0].split(" | ").next().unwrap();
        chrono::NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).unwrap();
    }

    #[test]
    fn reopening_appends_instead_of_truncating() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("monitor.log");

        let mut sink = LogSink::open(&path).unwrap();
        sink.record(Level::Info, "first run").unwrap();
        drop(sink);

        let mut sink = LogSink::open(&path).unwrap();
        sink.record(Level::Info, "second run").unwrap();
        drop(sink);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn open_fails_for_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("monitor.log");
        assert!(LogSink::open(&path).is_err());
    }
}
