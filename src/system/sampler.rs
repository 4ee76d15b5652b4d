use std::path::{Path, PathBuf};
use std::time::Duration;

use color_eyre::Result;
use color_eyre::eyre::eyre;
use sysinfo::{Disks, System};

use super::snapshot::{CpuSnapshot, DiskSnapshot, MemorySnapshot, SnapshotBundle, SystemInfo};

/// Window over which per-core utilization is measured. Each cycle blocks for
/// this long before reading the CPU counters a second time.
pub const CPU_SAMPLE_WINDOW: Duration = Duration::from_secs(1);

#[cfg(windows)]
const PRIMARY_MOUNT: &str = "C:\\";
#[cfg(not(windows))]
const PRIMARY_MOUNT: &str = "/";

/// Mount point the disk snapshot is scoped to for the whole run.
pub fn primary_mount() -> &'static Path {
    Path::new(PRIMARY_MOUNT)
}

/// Source of per-cycle readings. The production implementation queries the
/// OS; tests substitute deterministic mocks.
#[allow(async_fn_in_trait)] // single-threaded runtime, no Send bound needed
pub trait Sampler {
    async fn sample(&mut self) -> Result<SnapshotBundle>;
}

pub struct SystemSampler {
    sys: System,
    disks: Disks,
    disk_mount: PathBuf,
}

impl SystemSampler {
    /// Keeps reusable `sysinfo` handles so refreshes don't reallocate, and
    /// performs an initial refresh so the first CPU reading has a baseline.
    pub fn new(disk_mount: impl Into<PathBuf>) -> Self {
        let mut sys = System::new();
        sys.refresh_memory();
        sys.refresh_cpu_all();
        let disks = Disks::new_with_refreshed_list();
        SystemSampler {
            sys,
            disks,
            disk_mount: disk_mount.into(),
        }
    }

    /// Static identification. Queried once at startup, never in the loop.
    pub fn system_info(&self) -> SystemInfo {
        let processor = self
            .sys
            .cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .filter(|brand| !brand.is_empty())
            .unwrap_or_else(|| "unknown".to_string());

        SystemInfo {
            platform: System::name().unwrap_or_else(|| "unknown".to_string()),
            release: System::kernel_version().unwrap_or_else(|| "unknown".to_string()),
            architecture: System::cpu_arch(),
            processor,
        }
    }

    async fn cpu(&mut self) -> CpuSnapshot {
        self.sys.refresh_cpu_all();
        tokio::time::sleep(CPU_SAMPLE_WINDOW).await;
        self.sys.refresh_cpu_all();

        CpuSnapshot {
            per_core_percent: self.sys.cpus().iter().map(|cpu| cpu.cpu_usage()).collect(),
        }
    }

    fn memory(&mut self) -> MemorySnapshot {
        self.sys.refresh_memory();
        let total = self.sys.total_memory();
        let available = self.sys.available_memory();
        let used = self.sys.used_memory();

        MemorySnapshot {
            total,
            available,
            used,
            percent: percent_of(used, total),
        }
    }

    fn disk(&mut self) -> Result<DiskSnapshot> {
        self.disks.refresh(true);
        let disk = self
            .disks
            .list()
            .iter()
            .find(|disk| disk.mount_point() == self.disk_mount.as_path())
            .ok_or_else(|| eyre!("no disk mounted at {}", self.disk_mount.display()))?;

        let total = disk.total_space();
        let free = disk.available_space();
        let used = total.saturating_sub(free);

        Ok(DiskSnapshot {
            mount: self.disk_mount.display().to_string(),
            total,
            used,
            free,
            percent: percent_of(used, total),
        })
    }
}

impl Sampler for SystemSampler {
    async fn sample(&mut self) -> Result<SnapshotBundle> {
        // Groups are read sequentially, not atomically; skew within a cycle
        // is acceptable.
        let cpu = self.cpu().await;
        let memory = self.memory();
        let disk = self.disk()?;
        Ok(SnapshotBundle { cpu, memory, disk })
    }
}

fn percent_of(part: u64, whole: u64) -> f32 {
    if whole == 0 {
        0.0
    } else {
        (part as f64 / whole as f64 * 100.0) as f32
    }
}
