use syshealth::core::health::{HealthChecker, Severity, ThresholdSet};
use syshealth::core::Assessment;
use syshealth::{HealthError, ProviderError, Resource};

use super::support::MockProvider;

#[test]
fn test_check_all_populates_snapshot() {
    let provider = MockProvider::healthy().with_disk("/home", Ok((90, 100)));
    let mut checker = HealthChecker::new(provider);
    checker.check_all().unwrap();

    let snapshot = checker.finish();
    assert_eq!(snapshot.cpu_percent(), 10.0);
    assert_eq!(snapshot.memory_used(), 2);
    assert_eq!(snapshot.memory_total(), 10);
    assert_eq!(snapshot.disks().len(), 2);
    assert_eq!(snapshot.disks()[1].mount_point, "/home");
}

#[test]
fn test_cpu_failure_is_labeled() {
    let provider = MockProvider {
        cpu: Err(ProviderError::new("permission denied")),
        ..MockProvider::healthy()
    };
    let mut checker = HealthChecker::new(provider);

    let err = checker.check_all().unwrap_err();
    assert_eq!(err.to_string(), "CPU check failed: permission denied");
    assert!(matches!(
        err,
        HealthError::Collection {
            resource: Resource::Cpu,
            ..
        }
    ));
}

#[test]
fn test_memory_failure_stops_before_disk() {
    let provider = MockProvider {
        memory: Err(ProviderError::new("meminfo unreadable")),
        ..MockProvider::healthy()
    };
    let mut checker = HealthChecker::new(provider);

    let err = checker.check_all().unwrap_err();
    assert_eq!(err.to_string(), "memory check failed: meminfo unreadable");

    let snapshot = checker.finish();
    assert!(snapshot.disks().is_empty());
}

#[test]
fn test_partition_listing_failure_is_fatal() {
    let provider = MockProvider {
        partitions: Err(ProviderError::new("cannot read mount table")),
        ..MockProvider::healthy()
    };
    let mut checker = HealthChecker::new(provider);

    let err = checker.check_all().unwrap_err();
    assert_eq!(err.to_string(), "disk check failed: cannot read mount table");
}

#[test]
fn test_unreadable_partition_is_skipped() {
    let provider = MockProvider::healthy()
        .with_disk("/mnt/stale-nfs", Err(ProviderError::new("stale handle")))
        .with_disk("/var", Ok((10, 100)));
    let mut checker = HealthChecker::new(provider);
    checker.check_all().unwrap();

    let snapshot = checker.finish();
    let mounts: Vec<_> = snapshot
        .disks()
        .iter()
        .map(|d| d.mount_point.as_str())
        .collect();
    assert_eq!(mounts, vec!["/", "/var"]);
}

#[test]
fn test_missing_process_does_not_abort_checks() {
    let provider = MockProvider::healthy().with_process(100, "sshd");
    let mut checker = HealthChecker::new(provider);
    checker.check_all().unwrap();

    let err = checker.check_process("nginx").unwrap_err();
    assert!(matches!(err, HealthError::ProcessNotFound(ref name) if name == "nginx"));
    assert!(err.is_advisory());

    let snapshot = checker.finish();
    assert!(snapshot.processes().is_empty());
    assert_eq!(snapshot.disks().len(), 1);
    assert_eq!(
        Assessment::evaluate(&snapshot, &ThresholdSet::default()).overall,
        Severity::Ok
    );
}

#[test]
fn test_found_process_is_marked_running() {
    let provider = MockProvider::healthy().with_process(321, "postgres");
    let mut checker = HealthChecker::new(provider);
    checker.check_all().unwrap();
    checker.check_process("postgres").unwrap();

    let snapshot = checker.finish();
    assert_eq!(snapshot.processes().len(), 1);
    assert_eq!(snapshot.processes()[0].pid, 321);
    assert_eq!(snapshot.processes()[0].status, "running");
}

#[test]
fn test_process_listing_failure_is_advisory() {
    let provider = MockProvider {
        processes: Err(ProviderError::new("procfs unavailable")),
        ..MockProvider::healthy()
    };
    let mut checker = HealthChecker::new(provider);
    checker.check_all().unwrap();

    let err = checker.check_process("sshd").unwrap_err();
    assert_eq!(err.to_string(), "process check failed: procfs unavailable");
    assert!(err.is_advisory());
}
