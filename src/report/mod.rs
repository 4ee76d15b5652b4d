pub mod console;
pub mod logfile;

use chrono::{DateTime, Local};
use color_eyre::Result;

use crate::system::snapshot::{SnapshotBundle, SystemInfo};
use console::Console;
use logfile::{Level, LogSink};

/// Timestamp layout shared by the console header and the log records.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Output side of the monitor. The loop only talks to this trait, so tests
/// can count calls with a recording implementation.
pub trait Reporter {
    fn display(&mut self, bundle: &SnapshotBundle, now: DateTime<Local>) -> Result<()>;
    fn log(&mut self, bundle: &SnapshotBundle) -> Result<()>;
    /// Records a fatal failure just before the monitor dies.
    fn fatal(&mut self, message: &str) -> Result<()>;
    /// Emits the stopped notice and the final log record. Called exactly once.
    fn shutdown(&mut self) -> Result<()>;
}

/// Production reporter: console screen plus append-only log file.
pub struct MonitorReporter {
    console: Console,
    sink: LogSink,
}

impl MonitorReporter {
    pub fn new(sink: LogSink) -> Self {
        MonitorReporter {
            console: Console::new(),
            sink,
        }
    }

    /// Startup records: the monitor banner and the static host identification.
    pub fn log_startup(&mut self, info: &SystemInfo) -> Result<()> {
        self.sink.record(Level::Info, "System Monitor Started")?;
        self.sink.record(
            Level::Info,
            &format!(
                "System Info: platform={} release={} architecture={} processor={}",
                info.platform, info.release, info.architecture, info.processor
            ),
        )
    }
}

impl Reporter for MonitorReporter {
    fn display(&mut self, bundle: &SnapshotBundle, now: DateTime<Local>) -> Result<()> {
        self.console.display(bundle, now)
    }

    fn log(&mut self, bundle: &SnapshotBundle) -> Result<()> {
        let cores = bundle
            .cpu
            .per_core_percent
            .iter()
            .map(|core| format!("{core:.2}"))
            .collect::<Vec<_>>()
            .join(", ");
        self.sink
            .record(Level::Info, &format!("CPU Usage: [{cores}]"))?;

        let memory = &bundle.memory;
        self.sink.record(
            Level::Info,
            &format!(
                "Memory Usage: total={} available={} used={} percent={:.1}",
                memory.total, memory.available, memory.used, memory.percent
            ),
        )?;

        let disk = &bundle.disk;
        self.sink.record(
            Level::Info,
            &format!(
                "Disk Usage: total={} used={} free={} percent={:.1}",
                disk.total, disk.used, disk.free, disk.percent
            ),
        )
    }

    fn fatal(&mut self, message: &str) -> Result<()> {
        self.sink.record(Level::Error, message)
    }

    fn shutdown(&mut self) -> Result<()> {
        self.console.shutdown_notice()?;
        self.sink.record(Level::Info, "System Monitor Stopped")
    }
}
