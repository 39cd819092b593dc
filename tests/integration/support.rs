use std::collections::HashMap;

use syshealth::core::health::{MetricsProvider, ProcessRecord};
use syshealth::ProviderError;

/// Provider returning canned values
#[derive(Debug, Clone)]
pub struct MockProvider {
    pub cpu: Result<f64, ProviderError>,
    pub memory: Result<(u64, u64), ProviderError>,
    pub partitions: Result<Vec<String>, ProviderError>,
    pub usage: HashMap<String, Result<(u64, u64), ProviderError>>,
    pub processes: Result<Vec<ProcessRecord>, ProviderError>,
}

impl MockProvider {
    /// A quiet host: 10% CPU, 20% memory, one half-full disk
    pub fn healthy() -> Self {
        let mut usage = HashMap::new();
        usage.insert("/".to_string(), Ok((50, 100)));

        Self {
            cpu: Ok(10.0),
            memory: Ok((2, 10)),
            partitions: Ok(vec!["/".to_string()]),
            usage,
            processes: Ok(Vec::new()),
        }
    }

    pub fn with_disk(mut self, mount: &str, usage: Result<(u64, u64), ProviderError>) -> Self {
        if let Ok(list) = self.partitions.as_mut() {
            list.push(mount.to_string());
        }
        self.usage.insert(mount.to_string(), usage);
        self
    }

    pub fn with_process(mut self, pid: u32, name: &str) -> Self {
        if let Ok(list) = self.processes.as_mut() {
            list.push(ProcessRecord::new(pid, name));
        }
        self
    }
}

impl MetricsProvider for MockProvider {
    fn cpu_percent(&mut self) -> Result<f64, ProviderError> {
        self.cpu.clone()
    }

    fn memory(&mut self) -> Result<(u64, u64), ProviderError> {
        self.memory.clone()
    }

    fn list_partitions(&mut self) -> Result<Vec<String>, ProviderError> {
        self.partitions.clone()
    }

    fn partition_usage(&mut self, mount_point: &str) -> Result<(u64, u64), ProviderError> {
        self.usage
            .get(mount_point)
            .cloned()
            .unwrap_or_else(|| Err(ProviderError::new("unknown mount point")))
    }

    fn find_process(&mut self, name: &str) -> Result<Option<ProcessRecord>, ProviderError> {
        let processes = self.processes.clone()?;
        Ok(processes.into_iter().find(|p| p.name == name))
    }
}
