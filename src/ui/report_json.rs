//! Machine-readable report.

use chrono::SecondsFormat;
use serde::Serialize;

use crate::core::health::{Assessment, Severity, Snapshot, ThresholdSet};
use crate::error::Result;

#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub timestamp: String,
    pub overall_status: Severity,
    pub metrics: MetricsJson,
    pub thresholds: ThresholdSet,
}

#[derive(Debug, Serialize)]
pub struct MetricsJson {
    pub cpu: CpuJson,
    pub memory: MemoryJson,
    pub disks: Vec<DiskJson>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub processes: Vec<ProcessJson>,
}

#[derive(Debug, Serialize)]
pub struct CpuJson {
    pub percent: f64,
    pub status: Severity,
}

#[derive(Debug, Serialize)]
pub struct MemoryJson {
    pub used_bytes: u64,
    pub total_bytes: u64,
    pub percent: f64,
    pub status: Severity,
}

#[derive(Debug, Serialize)]
pub struct DiskJson {
    pub mount_point: String,
    pub used_bytes: u64,
    pub total_bytes: u64,
    pub used_percent: f64,
    pub free_percent: f64,
    pub status: Severity,
}

#[derive(Debug, Serialize)]
pub struct ProcessJson {
    pub name: String,
    pub pid: u32,
    pub status: String,
    pub cpu_percent: f64,
    pub memory_percent: f64,
}

impl JsonReport {
    pub fn new(snapshot: &Snapshot, thresholds: &ThresholdSet) -> Self {
        let assessment = Assessment::evaluate(snapshot, thresholds);

        let disks = snapshot
            .disks()
            .iter()
            .zip(&assessment.disks)
            .map(|(d, status)| DiskJson {
                mount_point: d.mount_point.clone(),
                used_bytes: d.used_bytes,
                total_bytes: d.total_bytes,
                used_percent: d.used_percent(),
                free_percent: d.free_percent(),
                status: *status,
            })
            .collect();

        let processes = snapshot
            .processes()
            .iter()
            .map(|p| ProcessJson {
                name: p.name.clone(),
                pid: p.pid,
                status: p.status.clone(),
                cpu_percent: p.cpu_percent,
                memory_percent: p.memory_percent,
            })
            .collect();

        Self {
            timestamp: snapshot
                .captured_at()
                .to_rfc3339_opts(SecondsFormat::Secs, true),
            overall_status: assessment.overall,
            metrics: MetricsJson {
                cpu: CpuJson {
                    percent: snapshot.cpu_percent(),
                    status: assessment.cpu,
                },
                memory: MemoryJson {
                    used_bytes: snapshot.memory_used(),
                    total_bytes: snapshot.memory_total(),
                    percent: snapshot.memory_percent(),
                    status: assessment.memory,
                },
                disks,
                processes,
            },
            thresholds: *thresholds,
        }
    }
}

/// Render the report as pretty-printed JSON
pub fn render_json(snapshot: &Snapshot, thresholds: &ThresholdSet) -> Result<String> {
    let report = JsonReport::new(snapshot, thresholds);
    Ok(serde_json::to_string_pretty(&report)?)
}
