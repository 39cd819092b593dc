//! Drives a [`MetricsProvider`] to assemble one [`Snapshot`].

use std::mem;

use super::provider::MetricsProvider;
use super::snapshot::{DiskRecord, Snapshot, SnapshotBuilder};
use crate::error::{HealthError, Resource, Result};

/// Runs the resource checks for a single measurement pass
pub struct HealthChecker<P: MetricsProvider> {
    provider: P,
    builder: SnapshotBuilder,
}

impl<P: MetricsProvider> HealthChecker<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            builder: SnapshotBuilder::new(),
        }
    }

    fn update<F>(&mut self, f: F)
    where
        F: FnOnce(SnapshotBuilder) -> SnapshotBuilder,
    {
        self.builder = f(mem::take(&mut self.builder));
    }

    /// Run CPU, memory and disk checks in order, stopping at the first failure
    pub fn check_all(&mut self) -> Result<()> {
        self.check_cpu()?;
        self.check_memory()?;
        self.check_disk()?;
        Ok(())
    }

    pub fn check_cpu(&mut self) -> Result<()> {
        let percent = self
            .provider
            .cpu_percent()
            .map_err(|e| HealthError::collection(Resource::Cpu, e))?;
        log::debug!("cpu: {:.2}%", percent);
        self.update(|b| b.cpu_percent(percent));
        Ok(())
    }

    pub fn check_memory(&mut self) -> Result<()> {
        let (used, total) = self
            .provider
            .memory()
            .map_err(|e| HealthError::collection(Resource::Memory, e))?;
        log::debug!("memory: {} / {} bytes", used, total);
        self.update(|b| b.memory(used, total));
        Ok(())
    }

    /// Record usage for every readable partition.
    ///
    /// Failing to enumerate partitions aborts the check; a single partition
    /// that cannot be read is skipped.
    pub fn check_disk(&mut self) -> Result<()> {
        let partitions = self
            .provider
            .list_partitions()
            .map_err(|e| HealthError::collection(Resource::Disk, e))?;

        for mount_point in partitions {
            match self.provider.partition_usage(&mount_point) {
                Ok((used, total)) => {
                    log::debug!("disk {}: {} / {} bytes", mount_point, used, total);
                    self.update(|b| b.disk(DiskRecord::new(mount_point, used, total)));
                }
                Err(e) => {
                    log::debug!("skipping partition {}: {}", mount_point, e);
                }
            }
        }

        Ok(())
    }

    /// Look up a process by exact name.
    ///
    /// Not finding it is reported as [`HealthError::ProcessNotFound`]; the
    /// snapshot stays usable either way.
    pub fn check_process(&mut self, name: &str) -> Result<()> {
        let found = self
            .provider
            .find_process(name)
            .map_err(|e| HealthError::collection(Resource::Process, e))?;

        match found {
            Some(mut process) => {
                process.status = "running".to_string();
                log::debug!("process {} found with pid {}", process.name, process.pid);
                self.update(|b| b.process(process));
                Ok(())
            }
            None => Err(HealthError::process_not_found(name)),
        }
    }

    /// Seal the collected values into an immutable snapshot
    pub fn finish(self) -> Snapshot {
        self.builder.build()
    }
}
