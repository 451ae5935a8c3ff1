//! Structured benchmark telemetry: per-phase timing, derived KPIs, JSON
//! serialization, and simple regression detection against a baseline report.

use std::path::Path;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use pixel_core::types::collections::FxHashMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseMetric {
    pub name: String,
    pub duration_us: u64,
    pub items_processed: u64,
    pub tokens_processed: u64,
    pub items_per_second: f64,
    pub tokens_per_second: f64,
    pub us_per_item: f64,
    pub sub_metrics: FxHashMap<String, f64>,
}

impl PhaseMetric {
    pub fn new(name: impl Into<String>, duration: Duration, items_processed: u64, tokens_processed: u64) -> Self {
        let duration_us = duration.as_micros() as u64;
        let seconds = duration.as_secs_f64().max(f64::EPSILON);
        let items_per_second = items_processed as f64 / seconds;
        let tokens_per_second = tokens_processed as f64 / seconds;
        let us_per_item = if items_processed == 0 {
            0.0
        } else {
            duration_us as f64 / items_processed as f64
        };

        Self {
            name: name.into(),
            duration_us,
            items_processed,
            tokens_processed,
            items_per_second,
            tokens_per_second,
            us_per_item,
            sub_metrics: FxHashMap::default(),
        }
    }

    pub fn with_sub(mut self, name: impl Into<String>, value: f64) -> Self {
        self.sub_metrics.insert(name.into(), value);
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FixtureInfo {
    pub size_label: String,
    pub stream_count: usize,
    pub total_tokens: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentInfo {
    pub os: String,
    pub arch: String,
    pub cpu_count: usize,
    pub profile: String,
}

impl EnvironmentInfo {
    pub fn capture() -> Self {
        Self {
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            cpu_count: std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1),
            profile: if cfg!(debug_assertions) { "debug" } else { "release" }.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Kpis {
    pub streams_per_second: f64,
    pub tokens_per_second: f64,
    pub total_duration_us: u64,
    pub phase_ratios: FxHashMap<String, f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressionVerdict {
    pub phase: String,
    pub current_us: u64,
    pub baseline_us: u64,
    pub change_pct: f64,
    pub threshold_pct: f64,
    pub regressed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkReport {
    pub timestamp: String,
    pub commit_sha: Option<String>,
    pub fixture: FixtureInfo,
    pub environment: EnvironmentInfo,
    pub phases: Vec<PhaseMetric>,
    pub kpis: Kpis,
    pub regressions: Vec<RegressionVerdict>,
}

impl BenchmarkReport {
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).expect("BenchmarkReport serializes")
    }

    pub fn to_json_compact(&self) -> String {
        serde_json::to_string(self).expect("BenchmarkReport serializes")
    }

    pub fn load_from_file(path: &Path) -> std::io::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(std::io::Error::other)
    }

    pub fn write_to_file(&self, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, self.to_json())
    }

    pub fn has_regressions(&self) -> bool {
        self.regressions.iter().any(|r| r.regressed)
    }

    pub fn summary(&self) -> String {
        let mut out = String::new();
        out.push_str("PIXEL-ANALYSIS BENCHMARK REPORT\n");
        out.push_str(&format!("timestamp: {}\n", self.timestamp));
        out.push_str(&format!(
            "fixture: {} ({} streams, {} tokens)\n",
            self.fixture.size_label, self.fixture.stream_count, self.fixture.total_tokens
        ));
        out.push_str(&format!(
            "streams/s: {:.1}  tokens/s: {:.1}\n",
            self.kpis.streams_per_second, self.kpis.tokens_per_second
        ));
        for phase in &self.phases {
            out.push_str(&format!(
                "  {:<20} {:>10.1}us  {:>10.1} items/s\n",
                phase.name, phase.duration_us as f64, phase.items_per_second
            ));
        }
        for regression in &self.regressions {
            if regression.regressed {
                out.push_str(&format!(
                    "  REGRESSED: {} {:+.1}% (threshold {:.1}%)\n",
                    regression.phase, regression.change_pct, regression.threshold_pct
                ));
            }
        }
        out
    }
}

/// Accumulates phase timings for one benchmark run, then builds an
/// immutable [`BenchmarkReport`].
pub struct BenchmarkRegistry {
    phases: Vec<PhaseMetric>,
    fixture: FixtureInfo,
    commit_sha: Option<String>,
    active_phase: Option<(String, Instant)>,
}

impl Default for BenchmarkRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BenchmarkRegistry {
    pub fn new() -> Self {
        Self {
            phases: Vec::new(),
            fixture: FixtureInfo::default(),
            commit_sha: None,
            active_phase: None,
        }
    }

    pub fn set_fixture(&mut self, fixture: FixtureInfo) {
        self.fixture = fixture;
    }

    pub fn set_commit_sha(&mut self, sha: impl Into<String>) {
        self.commit_sha = Some(sha.into());
    }

    pub fn start_phase(&mut self, name: impl Into<String>) {
        self.active_phase = Some((name.into(), Instant::now()));
    }

    /// Ends the phase started by the most recent [`Self::start_phase`] call,
    /// returning the recorded metric. Returns `None` if no phase is active.
    pub fn end_phase(&mut self, items_processed: u64, tokens_processed: u64) -> Option<PhaseMetric> {
        let (name, started) = self.active_phase.take()?;
        let metric = PhaseMetric::new(name, started.elapsed(), items_processed, tokens_processed);
        self.phases.push(metric.clone());
        Some(metric)
    }

    pub fn record_phase(&mut self, metric: PhaseMetric) {
        self.phases.push(metric);
    }

    pub fn phases(&self) -> &[PhaseMetric] {
        &self.phases
    }

    pub fn phase(&self, name: &str) -> Option<&PhaseMetric> {
        self.phases.iter().find(|p| p.name == name)
    }

    pub fn build_report(&self) -> BenchmarkReport {
        let total_duration_us = self.phases.iter().map(|p| p.duration_us).sum();
        let streams_per_second = self
            .phases
            .first()
            .map(|p| p.items_per_second)
            .unwrap_or(0.0);
        let tokens_per_second = self
            .phases
            .iter()
            .map(|p| p.tokens_per_second)
            .fold(0.0f64, f64::max);

        let mut phase_ratios = FxHashMap::default();
        for pair in self.phases.windows(2) {
            if let [a, b] = pair {
                if a.duration_us > 0 {
                    phase_ratios.insert(
                        format!("{}/{}", b.name, a.name),
                        b.duration_us as f64 / a.duration_us as f64,
                    );
                }
            }
        }

        BenchmarkReport {
            timestamp: format_timestamp(SystemTime::now()),
            commit_sha: self.commit_sha.clone(),
            fixture: self.fixture.clone(),
            environment: EnvironmentInfo::capture(),
            phases: self.phases.clone(),
            kpis: Kpis {
                streams_per_second,
                tokens_per_second,
                total_duration_us,
                phase_ratios,
            },
            regressions: Vec::new(),
        }
    }

    /// Compares `self`'s recorded phases against `baseline`'s, flagging any
    /// phase whose duration increased by more than `threshold_pct`. Phases
    /// with no baseline counterpart are skipped.
    pub fn compare_to_baseline(&self, baseline: &BenchmarkReport, threshold_pct: f64) -> Vec<RegressionVerdict> {
        self.phases
            .iter()
            .filter_map(|current| {
                let baseline_phase = baseline.phases.iter().find(|p| p.name == current.name)?;
                let change_pct = if baseline_phase.duration_us == 0 {
                    0.0
                } else {
                    ((current.duration_us as f64 - baseline_phase.duration_us as f64)
                        / baseline_phase.duration_us as f64)
                        * 100.0
                };
                Some(RegressionVerdict {
                    phase: current.name.clone(),
                    current_us: current.duration_us,
                    baseline_us: baseline_phase.duration_us,
                    change_pct,
                    threshold_pct,
                    regressed: change_pct > threshold_pct,
                })
            })
            .collect()
    }
}

/// A minimal RFC 3339 UTC timestamp (`YYYY-MM-DDTHH:MM:SSZ`), computed from
/// the system clock without pulling in a date/time crate the workspace
/// doesn't otherwise need.
fn format_timestamp(time: SystemTime) -> String {
    let secs = time.duration_since(UNIX_EPOCH).unwrap_or_default().as_secs();
    let days = secs / 86_400;
    let time_of_day = secs % 86_400;
    let (hour, minute, second) = (time_of_day / 3600, (time_of_day % 3600) / 60, time_of_day % 60);

    let (year, month, day) = civil_from_days(days as i64);
    format!("{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}:{second:02}Z")
}

/// Howard Hinnant's `civil_from_days`: days-since-epoch to a proleptic
/// Gregorian (year, month, day), valid for the whole timestamp range we
/// ever produce here.
fn civil_from_days(z: i64) -> (i64, u32, u32) {
    let z = z + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = (z - era * 146_097) as u64;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365;
    let y = yoe as i64 + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = if mp < 10 { mp + 3 } else { mp - 9 } as u32;
    let year = if month <= 2 { y + 1 } else { y };
    (year, month, day)
}
