/// Per-core utilization percentages measured over one sampling window.
#[derive(Debug, Clone, PartialEq)]
pub struct CpuSnapshot {
    pub per_core_percent: Vec<f32>,
}

impl CpuSnapshot {
    pub fn core_count(&self) -> usize {
        self.per_core_percent.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemorySnapshot {
    pub total: u64,
    pub available: u64,
    pub used: u64,
    pub percent: f32,
}

/// Usage of the single mount the monitor is scoped to.
#[derive(Debug, Clone, PartialEq)]
pub struct DiskSnapshot {
    pub mount: String,
    pub total: u64,
    pub used: u64,
    pub free: u64,
    pub percent: f32,
}

/// One cycle's readings. The three groups are read back to back, not
/// atomically; minor skew between them is expected.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotBundle {
    pub cpu: CpuSnapshot,
    pub memory: MemorySnapshot,
    pub disk: DiskSnapshot,
}

/// Static host identification, queried once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemInfo {
    pub platform: String,
    pub release: String,
    pub architecture: String,
    pub processor: String,
}
