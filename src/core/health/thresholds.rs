//! Warning/critical cutoffs per resource kind.

use serde::{Deserialize, Serialize};

use crate::error::{HealthError, Result};

/// Threshold configuration used to classify a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSet {
    pub cpu_warning: f64,  // used %
    pub cpu_critical: f64, // used %
    pub mem_warning: f64,  // used %
    pub mem_critical: f64, // used %
    pub disk_warning: f64,  // free % floor
    pub disk_critical: f64, // free % floor
}

impl Default for ThresholdSet {
    fn default() -> Self {
        Self {
            cpu_warning: 80.0,
            cpu_critical: 90.0,
            mem_warning: 75.0,
            mem_critical: 85.0,
            disk_warning: 20.0,
            disk_critical: 10.0,
        }
    }
}

/// Caller-supplied values layered on top of the defaults.
///
/// A missing or negative value means "not supplied". Anything else,
/// including NaN, is carried through so that `validate` can reject it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ThresholdOverrides {
    #[serde(default)]
    pub cpu_warning: Option<f64>,
    #[serde(default)]
    pub cpu_critical: Option<f64>,
    #[serde(default)]
    pub mem_warning: Option<f64>,
    #[serde(default)]
    pub mem_critical: Option<f64>,
    #[serde(default)]
    pub disk_warning: Option<f64>,
    #[serde(default)]
    pub disk_critical: Option<f64>,
}

impl ThresholdOverrides {
    /// Layer `other` on top of `self`; supplied values in `other` win
    pub fn merge(self, other: ThresholdOverrides) -> ThresholdOverrides {
        ThresholdOverrides {
            cpu_warning: supplied(other.cpu_warning).or(self.cpu_warning),
            cpu_critical: supplied(other.cpu_critical).or(self.cpu_critical),
            mem_warning: supplied(other.mem_warning).or(self.mem_warning),
            mem_critical: supplied(other.mem_critical).or(self.mem_critical),
            disk_warning: supplied(other.disk_warning).or(self.disk_warning),
            disk_critical: supplied(other.disk_critical).or(self.disk_critical),
        }
    }
}

fn supplied(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_nan() || *v >= 0.0)
}

fn apply(slot: &mut f64, value: Option<f64>) {
    if let Some(v) = supplied(value) {
        *slot = v;
    }
}

impl ThresholdSet {
    /// Defaults with every supplied override applied. Never fails.
    pub fn with_overrides(overrides: ThresholdOverrides) -> Self {
        let mut set = Self::default();
        apply(&mut set.cpu_warning, overrides.cpu_warning);
        apply(&mut set.cpu_critical, overrides.cpu_critical);
        apply(&mut set.mem_warning, overrides.mem_warning);
        apply(&mut set.mem_critical, overrides.mem_critical);
        apply(&mut set.disk_warning, overrides.disk_warning);
        apply(&mut set.disk_critical, overrides.disk_critical);
        set
    }

    /// Check that every cutoff is a finite number and that every warning
    /// cutoff is less severe than its critical one.
    ///
    /// CPU and memory need `warning < critical`; disk is a free-space floor
    /// so it needs `warning > critical`.
    pub fn validate(&self) -> Result<()> {
        let values = [
            ("CPU warning", self.cpu_warning),
            ("CPU critical", self.cpu_critical),
            ("memory warning", self.mem_warning),
            ("memory critical", self.mem_critical),
            ("disk warning", self.disk_warning),
            ("disk critical", self.disk_critical),
        ];
        if let Some((name, value)) = values.iter().find(|(_, v)| !v.is_finite()) {
            return Err(HealthError::invalid_thresholds(format!(
                "{} must be a finite percentage, got {}",
                name, value
            )));
        }

        if self.cpu_warning >= self.cpu_critical {
            return Err(HealthError::invalid_thresholds(format!(
                "CPU warning ({}) must be below CPU critical ({})",
                self.cpu_warning, self.cpu_critical
            )));
        }
        if self.mem_warning >= self.mem_critical {
            return Err(HealthError::invalid_thresholds(format!(
                "memory warning ({}) must be below memory critical ({})",
                self.mem_warning, self.mem_critical
            )));
        }
        if self.disk_warning <= self.disk_critical {
            return Err(HealthError::invalid_thresholds(format!(
                "disk warning ({}% free) must be above disk critical ({}% free)",
                self.disk_warning, self.disk_critical
            )));
        }
        Ok(())
    }
}
