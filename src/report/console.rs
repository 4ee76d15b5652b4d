use std::io::{Stdout, Write, stdout};

use chrono::{DateTime, Local};
use color_eyre::Result;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

use super::TIMESTAMP_FORMAT;
use crate::format::format_bytes;
use crate::system::snapshot::SnapshotBundle;

const RULE: &str = "==================================================";

/// Full-screen console sink, cleared and redrawn every cycle.
pub struct Console {
    out: Stdout,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    pub fn new() -> Self {
        Console { out: stdout() }
    }

    pub fn display(&mut self, bundle: &SnapshotBundle, now: DateTime<Local>) -> Result<()> {
        execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        render(&mut self.out, bundle, now)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn shutdown_notice(&mut self) -> Result<()> {
        writeln!(self.out, "\nMonitoring stopped.")?;
        Ok(())
    }
}

/// Fixed-layout report body. Written without terminal control so tests can
/// render into a buffer.
pub fn render(
    out: &mut impl Write,
    bundle: &SnapshotBundle,
    now: DateTime<Local>,
) -> std::io::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(
        out,
        "SYSTEM RESOURCE MONITOR  —  {}",
        now.format(TIMESTAMP_FORMAT)
    )?;
    writeln!(out, "{RULE}")?;

    writeln!(out)?;
    writeln!(out, " CPU Usage per Core:")?;
    for (i, core) in bundle.cpu.per_core_percent.iter().enumerate() {
        writeln!(out, "  - Core {i}: {core:.2}%")?;
    }

    let memory = &bundle.memory;
    writeln!(out)?;
    writeln!(out, " Memory Usage:")?;
    writeln!(out, "  - Total     : {}", format_bytes(memory.total))?;
    writeln!(out, "  - Available : {}", format_bytes(memory.available))?;
    writeln!(out, "  - Used      : {}", format_bytes(memory.used))?;
    writeln!(out, "  - Usage     : {:.1}%", memory.percent)?;

    let disk = &bundle.disk;
    writeln!(out)?;
    writeln!(out, " Disk Usage ({}):", disk.mount)?;
    writeln!(out, "  - Total : {}", format_bytes(disk.total))?;
    writeln!(out, "  - Used  : {}", format_bytes(disk.used))?;
    writeln!(out, "  - Free  : {}", format_bytes(disk.free))?;
    writeln!(out, "  - Usage : {:.1}%", disk.percent)?;

    writeln!(out)?;
    writeln!(out, "(Press Ctrl+C to exit)")?;
    Ok(())
}
