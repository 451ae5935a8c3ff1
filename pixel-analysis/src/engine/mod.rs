//! The pass-orchestration framework: a memoizing, dependency-resolving host
//! for analysis passes during one run.

pub mod manager;
pub mod pass;

pub use manager::AnalysisManager;
pub use pass::AnalysisPass;
