//! Data model for one measurement pass.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::classifier::percent_of;

/// Usage of a single mounted partition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiskRecord {
    pub mount_point: String,
    pub used_bytes: u64,
    pub total_bytes: u64,
}

impl DiskRecord {
    pub fn new<S: Into<String>>(mount_point: S, used_bytes: u64, total_bytes: u64) -> Self {
        Self {
            mount_point: mount_point.into(),
            used_bytes,
            total_bytes,
        }
    }

    pub fn used_percent(&self) -> f64 {
        percent_of(self.used_bytes, self.total_bytes)
    }

    pub fn free_percent(&self) -> f64 {
        100.0 - self.used_percent()
    }
}

/// A process matched by name. Informational only, never classified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessRecord {
    pub pid: u32,
    pub name: String,
    pub cpu_percent: f64,
    pub memory_percent: f64,
    pub status: String,
}

impl ProcessRecord {
    pub fn new<S: Into<String>>(pid: u32, name: S) -> Self {
        Self {
            pid,
            name: name.into(),
            cpu_percent: 0.0,
            memory_percent: 0.0,
            status: "unknown".to_string(),
        }
    }
}

/// Immutable result of one measurement pass.
///
/// Only [`SnapshotBuilder`] can produce one; after `build()` the values
/// can be read but not changed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    cpu_percent: f64,
    memory_used: u64,
    memory_total: u64,
    disks: Vec<DiskRecord>,
    processes: Vec<ProcessRecord>,
    captured_at: DateTime<Utc>,
}

impl Snapshot {
    pub fn builder() -> SnapshotBuilder {
        SnapshotBuilder::new()
    }

    pub fn cpu_percent(&self) -> f64 {
        self.cpu_percent
    }

    pub fn memory_used(&self) -> u64 {
        self.memory_used
    }

    pub fn memory_total(&self) -> u64 {
        self.memory_total
    }

    pub fn memory_percent(&self) -> f64 {
        percent_of(self.memory_used, self.memory_total)
    }

    pub fn disks(&self) -> &[DiskRecord] {
        &self.disks
    }

    pub fn processes(&self) -> &[ProcessRecord] {
        &self.processes
    }

    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }
}

/// Accumulates provider results until the snapshot is complete
#[derive(Debug, Clone)]
pub struct SnapshotBuilder {
    cpu_percent: f64,
    memory_used: u64,
    memory_total: u64,
    disks: Vec<DiskRecord>,
    processes: Vec<ProcessRecord>,
    captured_at: DateTime<Utc>,
}

impl SnapshotBuilder {
    /// Empty builder stamped with the current time
    pub fn new() -> Self {
        Self {
            cpu_percent: 0.0,
            memory_used: 0,
            memory_total: 0,
            disks: Vec::new(),
            processes: Vec::new(),
            captured_at: Utc::now(),
        }
    }

    pub fn captured_at(mut self, at: DateTime<Utc>) -> Self {
        self.captured_at = at;
        self
    }

    pub fn cpu_percent(mut self, percent: f64) -> Self {
        self.cpu_percent = percent;
        self
    }

    pub fn memory(mut self, used: u64, total: u64) -> Self {
        self.memory_used = used;
        self.memory_total = total;
        self
    }

    pub fn disk(mut self, disk: DiskRecord) -> Self {
        self.disks.push(disk);
        self
    }

    pub fn process(mut self, process: ProcessRecord) -> Self {
        self.processes.push(process);
        self
    }

    pub fn build(self) -> Snapshot {
        Snapshot {
            cpu_percent: self.cpu_percent,
            memory_used: self.memory_used,
            memory_total: self.memory_total,
            disks: self.disks,
            processes: self.processes,
            captured_at: self.captured_at,
        }
    }
}

impl Default for SnapshotBuilder {
    fn default() -> Self {
        Self::new()
    }
}
