//! Maps a single metric value plus its cutoffs to a severity.

use super::severity::Severity;
use super::snapshot::DiskRecord;
use super::thresholds::ThresholdSet;

/// Which way a metric gets worse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Utilization percentages (CPU, memory). The cutoff itself breaches.
    HigherIsWorse,
    /// Free-space percentages (disk). The cutoff itself is still safe.
    LowerIsWorse,
}

/// Classify `value` against a warning/critical pair.
pub fn classify(value: f64, warning: f64, critical: f64, direction: Direction) -> Severity {
    match direction {
        Direction::HigherIsWorse => {
            if value >= critical {
                Severity::Critical
            } else if value >= warning {
                Severity::Warning
            } else {
                Severity::Ok
            }
        }
        Direction::LowerIsWorse => {
            if value < critical {
                Severity::Critical
            } else if value < warning {
                Severity::Warning
            } else {
                Severity::Ok
            }
        }
    }
}

/// `part / total * 100`, or 0.0 when `total` is 0
pub fn percent_of(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 / total as f64 * 100.0
}

impl ThresholdSet {
    pub fn cpu_severity(&self, cpu_percent: f64) -> Severity {
        classify(
            cpu_percent,
            self.cpu_warning,
            self.cpu_critical,
            Direction::HigherIsWorse,
        )
    }

    pub fn memory_severity(&self, memory_percent: f64) -> Severity {
        classify(
            memory_percent,
            self.mem_warning,
            self.mem_critical,
            Direction::HigherIsWorse,
        )
    }

    /// Disk severity is judged on free space, not used space
    pub fn disk_severity(&self, disk: &DiskRecord) -> Severity {
        classify(
            disk.free_percent(),
            self.disk_warning,
            self.disk_critical,
            Direction::LowerIsWorse,
        )
    }
}
