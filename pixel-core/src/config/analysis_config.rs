//! Analysis-run configuration — the VM-defined knobs the passes need but
//! don't hardcode.

use serde::{Deserialize, Serialize};

/// Configuration for one analysis run.
///
/// The exact pop/push arity table per token kind and the terminal stack
/// depth requirement are VM-defined, not part of this core's specification;
/// a host embeds them here rather than the passes reinventing them.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Exact stack depth every reachable terminal block must end with.
    /// `None` means the stack-safety pass does not check terminal depth.
    pub terminal_stack_depth: Option<u32>,
    /// How many blocks the stack-safety and prop-write-safety worklists
    /// process between cancellation checks. Default: 256.
    pub cancellation_check_interval: Option<usize>,
}

impl AnalysisConfig {
    /// Returns the effective cancellation check interval, defaulting to 256
    /// blocks.
    pub fn effective_cancellation_check_interval(&self) -> usize {
        self.cancellation_check_interval.unwrap_or(256).max(1)
    }

    /// Load a config from a TOML string, falling back to defaults for any
    /// field the document omits.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}
