//! Benchmark fixtures and structured reporting for the analysis pipeline.

#![allow(dead_code)]

pub mod fixtures;
pub mod report;

pub use fixtures::{generate_fixture, Fixture, FixtureSize};
pub use report::{BenchmarkRegistry, BenchmarkReport, EnvironmentInfo, FixtureInfo, PhaseMetric, RegressionVerdict};
