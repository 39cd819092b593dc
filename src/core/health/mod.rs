//! Host health classification.
//!
//! Turns one measurement pass into per-resource severities and a single
//! overall verdict using configurable thresholds.

mod aggregator;
mod checker;
mod classifier;
mod provider;
mod severity;
mod snapshot;
mod thresholds;

pub use aggregator::{overall_severity, worst, Assessment};
pub use checker::HealthChecker;
pub use classifier::{classify, percent_of, Direction};
pub use provider::MetricsProvider;
pub use severity::Severity;
pub use snapshot::{DiskRecord, ProcessRecord, Snapshot, SnapshotBuilder};
pub use thresholds::{ThresholdOverrides, ThresholdSet};
