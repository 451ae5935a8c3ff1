//! Block analysis: partitions the token stream into basic blocks and builds
//! the CFG.

mod builder;
mod types;

pub use builder::BlockAnalysisPass;
pub use types::{Block, BlockAnalysisResult};
