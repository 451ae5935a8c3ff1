//! Configuration for the analysis pipeline.

mod analysis_config;

pub use analysis_config::AnalysisConfig;
