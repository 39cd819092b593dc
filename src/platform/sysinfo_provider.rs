//! [`MetricsProvider`] backed by the `sysinfo` crate.

use std::collections::HashSet;
use std::ffi::OsStr;

use sysinfo::{CpuRefreshKind, Disks, MemoryRefreshKind, ProcessesToUpdate, RefreshKind, System};

use crate::core::health::{percent_of, MetricsProvider, ProcessRecord};
use crate::error::ProviderError;

/// Reads live values from the local host
pub struct SysinfoProvider {
    system: System,
    disks: Disks,
}

impl SysinfoProvider {
    pub fn new() -> Self {
        let refresh_kind = RefreshKind::nothing()
            .with_cpu(CpuRefreshKind::nothing().with_cpu_usage())
            .with_memory(MemoryRefreshKind::nothing().with_ram());

        Self {
            system: System::new_with_specifics(refresh_kind),
            disks: Disks::new(),
        }
    }
}

impl Default for SysinfoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsProvider for SysinfoProvider {
    fn cpu_percent(&mut self) -> Result<f64, ProviderError> {
        // Usage is a delta between two refreshes
        self.system.refresh_cpu_usage();
        std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
        self.system.refresh_cpu_usage();

        if self.system.cpus().is_empty() {
            return Err(ProviderError::new("no CPUs reported by the system"));
        }

        let usage = self.system.global_cpu_usage();
        if !usage.is_finite() {
            return Err(ProviderError::new(format!("invalid CPU reading: {}", usage)));
        }
        Ok(usage as f64)
    }

    fn memory(&mut self) -> Result<(u64, u64), ProviderError> {
        self.system.refresh_memory();
        Ok((self.system.used_memory(), self.system.total_memory()))
    }

    fn list_partitions(&mut self) -> Result<Vec<String>, ProviderError> {
        self.disks = Disks::new_with_refreshed_list();
        let mounts = unique_mounts(
            self.disks
                .list()
                .iter()
                .map(|disk| disk.mount_point().to_string_lossy().to_string()),
        );

        log::debug!("{} partitions listed", mounts.len());
        Ok(mounts)
    }

    fn partition_usage(&mut self, mount_point: &str) -> Result<(u64, u64), ProviderError> {
        let disk = self
            .disks
            .list()
            .iter()
            .find(|disk| disk.mount_point().to_string_lossy() == mount_point)
            .ok_or_else(|| ProviderError::new(format!("{} is no longer mounted", mount_point)))?;

        let total = disk.total_space();
        let available = disk.available_space();
        if available > total {
            return Err(ProviderError::new(format!(
                "{} reports more available space than its size",
                mount_point
            )));
        }

        Ok((total - available, total))
    }

    fn find_process(&mut self, name: &str) -> Result<Option<ProcessRecord>, ProviderError> {
        self.system.refresh_memory();
        self.system.refresh_processes(ProcessesToUpdate::All, true);
        std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
        self.system.refresh_processes(ProcessesToUpdate::All, true);

        let total_memory = self.system.total_memory();
        let found = self
            .system
            .processes_by_exact_name(OsStr::new(name))
            .next()
            .map(|proc| {
                let mut record =
                    ProcessRecord::new(proc.pid().as_u32(), proc.name().to_string_lossy());
                record.cpu_percent = proc.cpu_usage() as f64;
                record.memory_percent = percent_of(proc.memory(), total_memory);
                record
            });

        Ok(found)
    }
}

/// Keeps the first occurrence of each mount point.
/// Bind mounts and stacked mounts show up as several disks on one path,
/// and usage lookup by path can only ever see the first of them.
fn unique_mounts(mounts: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    mounts
        .into_iter()
        .filter(|mount| seen.insert(mount.clone()))
        .collect()
}
