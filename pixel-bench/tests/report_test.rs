use std::time::Duration;

use pixel_bench::report::{BenchmarkRegistry, FixtureInfo, PhaseMetric};

#[test]
fn start_and_end_phase_records_a_metric() {
    let mut registry = BenchmarkRegistry::new();
    registry.start_phase("block_analysis");
    let metric = registry.end_phase(100, 400).expect("phase was active");

    assert_eq!(metric.name, "block_analysis");
    assert_eq!(metric.items_processed, 100);
    assert_eq!(metric.tokens_processed, 400);
    assert_eq!(registry.phases().len(), 1);
}

#[test]
fn end_phase_without_start_returns_none() {
    let mut registry = BenchmarkRegistry::new();
    assert!(registry.end_phase(1, 1).is_none());
    assert!(registry.phases().is_empty());
}

#[test]
fn phase_looks_up_by_name() {
    let mut registry = BenchmarkRegistry::new();
    registry.record_phase(PhaseMetric::new("stack_safety", Duration::from_micros(250), 10, 40));

    assert!(registry.phase("stack_safety").is_some());
    assert!(registry.phase("missing").is_none());
}

#[test]
fn build_report_populates_environment_and_kpis() {
    let mut registry = BenchmarkRegistry::new();
    registry.set_fixture(FixtureInfo {
        size_label: "Small".to_string(),
        stream_count: 32,
        total_tokens: 2048,
    });
    registry.record_phase(PhaseMetric::new("block_analysis", Duration::from_micros(1000), 32, 2048));
    registry.record_phase(PhaseMetric::new("stack_safety", Duration::from_micros(500), 32, 2048));

    let report = registry.build_report();

    assert_eq!(report.fixture.stream_count, 32);
    assert_eq!(report.phases.len(), 2);
    assert!(report.kpis.tokens_per_second > 0.0);
    assert!(!report.environment.os.is_empty());
    assert!(!report.has_regressions());
}

#[test]
fn json_round_trips_through_a_file() {
    let mut registry = BenchmarkRegistry::new();
    registry.record_phase(PhaseMetric::new("prop_write_safety", Duration::from_micros(300), 8, 128));
    let report = registry.build_report();

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("report.json");
    report.write_to_file(&path).expect("write report");

    let loaded = pixel_bench::BenchmarkReport::load_from_file(&path).expect("load report");
    assert_eq!(loaded.phases.len(), report.phases.len());
    assert_eq!(loaded.phases[0].name, "prop_write_safety");
}

#[test]
fn compare_to_baseline_flags_phases_that_slowed_down() {
    let mut baseline_registry = BenchmarkRegistry::new();
    baseline_registry.record_phase(PhaseMetric::new("stack_safety", Duration::from_micros(100), 10, 40));
    let baseline = baseline_registry.build_report();

    let mut current_registry = BenchmarkRegistry::new();
    current_registry.record_phase(PhaseMetric::new("stack_safety", Duration::from_micros(200), 10, 40));

    let verdicts = current_registry.compare_to_baseline(&baseline, 20.0);

    assert_eq!(verdicts.len(), 1);
    assert!(verdicts[0].regressed);
    assert!((verdicts[0].change_pct - 100.0).abs() < f64::EPSILON);
}

#[test]
fn compare_to_baseline_ignores_phases_within_threshold() {
    let mut baseline_registry = BenchmarkRegistry::new();
    baseline_registry.record_phase(PhaseMetric::new("stack_safety", Duration::from_micros(100), 10, 40));
    let baseline = baseline_registry.build_report();

    let mut current_registry = BenchmarkRegistry::new();
    current_registry.record_phase(PhaseMetric::new("stack_safety", Duration::from_micros(105), 10, 40));

    let verdicts = current_registry.compare_to_baseline(&baseline, 20.0);

    assert_eq!(verdicts.len(), 1);
    assert!(!verdicts[0].regressed);
}

#[test]
fn compare_to_baseline_skips_phases_absent_from_baseline() {
    let baseline = BenchmarkRegistry::new().build_report();

    let mut current_registry = BenchmarkRegistry::new();
    current_registry.record_phase(PhaseMetric::new("prop_write_safety", Duration::from_micros(50), 1, 4));

    let verdicts = current_registry.compare_to_baseline(&baseline, 10.0);
    assert!(verdicts.is_empty());
}
