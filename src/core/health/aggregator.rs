//! Combines per-resource severities into one verdict for the host.

use super::severity::Severity;
use super::snapshot::Snapshot;
use super::thresholds::ThresholdSet;

/// Per-resource severities and the overall verdict for one snapshot.
///
/// Disk severities are stored in the same order as `Snapshot::disks()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    pub cpu: Severity,
    pub memory: Severity,
    pub disks: Vec<Severity>,
    pub overall: Severity,
}

impl Assessment {
    /// Classify every resource, then take the worst.
    pub fn evaluate(snapshot: &Snapshot, thresholds: &ThresholdSet) -> Self {
        let cpu = thresholds.cpu_severity(snapshot.cpu_percent());
        let memory = thresholds.memory_severity(snapshot.memory_percent());
        let disks: Vec<Severity> = snapshot
            .disks()
            .iter()
            .map(|disk| thresholds.disk_severity(disk))
            .collect();

        let overall = worst([cpu, memory].into_iter().chain(disks.iter().copied()));

        Self {
            cpu,
            memory,
            disks,
            overall,
        }
    }
}

/// Maximum severity of `severities`, `Ok` when empty
pub fn worst<I>(severities: I) -> Severity
where
    I: IntoIterator<Item = Severity>,
{
    severities.into_iter().max().unwrap_or_default()
}

/// Overall severity of the host. Processes never count.
pub fn overall_severity(snapshot: &Snapshot, thresholds: &ThresholdSet) -> Severity {
    Assessment::evaluate(snapshot, thresholds).overall
}
