use syshealth::core::health::{
    classify, overall_severity, Assessment, Direction, DiskRecord, Severity, Snapshot,
    ThresholdSet,
};

#[test]
fn test_cpu_over_critical_is_critical_overall() {
    let snapshot = Snapshot::builder().cpu_percent(95.0).build();
    let thresholds = ThresholdSet::default();
    let assessment = Assessment::evaluate(&snapshot, &thresholds);

    assert_eq!(assessment.cpu, Severity::Critical);
    assert_eq!(assessment.overall, Severity::Critical);
}

#[test]
fn test_memory_warning_is_warning_overall() {
    let snapshot = Snapshot::builder().cpu_percent(50.0).memory(8, 10).build();
    let assessment = Assessment::evaluate(&snapshot, &ThresholdSet::default());

    assert_eq!(assessment.cpu, Severity::Ok);
    assert_eq!(assessment.memory, Severity::Warning);
    assert_eq!(assessment.overall, Severity::Warning);
}

#[test]
fn test_zero_sized_disk_is_ok_under_any_thresholds() {
    let disk = DiskRecord::new("/mnt/empty", 0, 0);
    assert_eq!(disk.used_percent(), 0.0);
    assert_eq!(disk.free_percent(), 100.0);

    for (warning, critical) in [(20.0, 10.0), (99.0, 50.0), (100.0, 99.9)] {
        let thresholds = ThresholdSet {
            disk_warning: warning,
            disk_critical: critical,
            ..Default::default()
        };
        assert_eq!(thresholds.disk_severity(&disk), Severity::Ok);
    }
}

#[test]
fn test_zero_memory_total_reads_as_zero_percent() {
    let snapshot = Snapshot::builder().memory(123, 0).build();
    assert_eq!(snapshot.memory_percent(), 0.0);
    assert_eq!(
        overall_severity(&snapshot, &ThresholdSet::default()),
        Severity::Ok
    );
}

#[test]
fn test_boundaries_are_asymmetric() {
    // Utilization: equal to the cutoff already breaches
    assert_eq!(
        classify(80.0, 80.0, 90.0, Direction::HigherIsWorse),
        Severity::Warning
    );
    assert_eq!(
        classify(90.0, 80.0, 90.0, Direction::HigherIsWorse),
        Severity::Critical
    );
    // Free space: equal to the cutoff is still fine
    assert_eq!(
        classify(20.0, 20.0, 10.0, Direction::LowerIsWorse),
        Severity::Ok
    );
    assert_eq!(
        classify(10.0, 20.0, 10.0, Direction::LowerIsWorse),
        Severity::Warning
    );
}

#[test]
fn test_free_percent_sweep() {
    let (w, c) = (20.0, 10.0);
    for tenth in 0..=1000 {
        let f = tenth as f64 / 10.0;
        let expected = if f < c {
            Severity::Critical
        } else if f < w {
            Severity::Warning
        } else {
            Severity::Ok
        };
        assert_eq!(classify(f, w, c, Direction::LowerIsWorse), expected, "f={}", f);
    }
}

#[test]
fn test_used_plus_free_is_hundred() {
    for (used, total) in [(1u64, 3u64), (0, 7), (7, 7), (123_456, 987_654_321)] {
        let d = DiskRecord::new("/", used, total);
        assert!((d.used_percent() + d.free_percent() - 100.0).abs() < 1e-9);
    }
}

#[test]
fn test_overall_is_max_of_all_resources() {
    let t = ThresholdSet::default();
    let cases = [
        (10.0, (1, 10), vec![(95, 100)], Severity::Critical),
        (85.0, (1, 10), vec![(10, 100)], Severity::Warning),
        (10.0, (9, 10), vec![(10, 100)], Severity::Critical),
        (10.0, (1, 10), vec![(10, 100), (85, 100)], Severity::Warning),
        (10.0, (1, 10), vec![], Severity::Ok),
    ];

    for (cpu, (used, total), disks, expected) in cases {
        let snapshot = disks
            .into_iter()
            .enumerate()
            .fold(
                Snapshot::builder().cpu_percent(cpu).memory(used, total),
                |b, (i, (u, t))| b.disk(DiskRecord::new(format!("/d{}", i), u, t)),
            )
            .build();
        assert_eq!(overall_severity(&snapshot, &t), expected);
    }
}
