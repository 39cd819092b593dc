use super::snapshot::ProcessRecord;
use crate::error::ProviderError;

/// Source of raw host measurements.
///
/// Implementations live in the platform layer; tests drive the checker
/// with canned values instead.
pub trait MetricsProvider {
    /// Overall CPU utilization in percent
    fn cpu_percent(&mut self) -> Result<f64, ProviderError>;

    /// `(used, total)` memory in bytes
    fn memory(&mut self) -> Result<(u64, u64), ProviderError>;

    /// Mount points of the physical partitions
    fn list_partitions(&mut self) -> Result<Vec<String>, ProviderError>;

    /// `(used, total)` bytes for one mount point
    fn partition_usage(&mut self, mount_point: &str) -> Result<(u64, u64), ProviderError>;

    /// First running process whose name matches exactly, if any
    fn find_process(&mut self, name: &str) -> Result<Option<ProcessRecord>, ProviderError>;
}
