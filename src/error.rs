use std::fmt;
use thiserror::Error;

/// Resource kinds a collection failure can be attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Cpu,
    Memory,
    Disk,
    Process,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resource::Cpu => "CPU",
            Resource::Memory => "memory",
            Resource::Disk => "disk",
            Resource::Process => "process",
        };
        f.write_str(name)
    }
}

/// Failure reported by a metrics provider when the OS query itself fails
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ProviderError {
    message: String,
}

impl ProviderError {
    pub fn new<S: Into<String>>(msg: S) -> Self {
        Self {
            message: msg.into(),
        }
    }
}

/// Custom error type for syshealth
#[derive(Error, Debug)]
pub enum HealthError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid thresholds: {0}")]
    InvalidThresholds(String),

    #[error("{resource} check failed: {source}")]
    Collection {
        resource: Resource,
        #[source]
        source: ProviderError,
    },

    #[error("process not found: {0}")]
    ProcessNotFound(String),
}

/// Result type alias for syshealth
pub type Result<T> = std::result::Result<T, HealthError>;

impl HealthError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        HealthError::Config(msg.into())
    }

    pub fn invalid_thresholds<S: Into<String>>(msg: S) -> Self {
        HealthError::InvalidThresholds(msg.into())
    }

    /// Wrap a provider failure with the resource it happened on
    pub fn collection(resource: Resource, source: ProviderError) -> Self {
        HealthError::Collection { resource, source }
    }

    pub fn process_not_found<S: Into<String>>(name: S) -> Self {
        HealthError::ProcessNotFound(name.into())
    }

    /// Whether the run can continue after this error
    pub fn is_advisory(&self) -> bool {
        matches!(
            self,
            HealthError::ProcessNotFound(_)
                | HealthError::Collection {
                    resource: Resource::Process,
                    ..
                }
        )
    }
}
