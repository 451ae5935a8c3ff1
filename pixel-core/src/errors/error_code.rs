//! Stable, machine-readable error codes for diagnostics.

/// A stable string identifier for a diagnostic kind, independent of the
/// human-readable message. Hosts can match on this instead of parsing the
/// rendered message.
pub trait AnalysisErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const UNRESOLVED_LABEL: &str = "UNRESOLVED_LABEL";
pub const STACK_UNDERFLOW: &str = "STACK_UNDERFLOW";
pub const STACK_DEPTH_MISMATCH: &str = "STACK_DEPTH_MISMATCH";
pub const TERMINAL_DEPTH_MISMATCH: &str = "TERMINAL_DEPTH_MISMATCH";
pub const INCONSISTENT_PROPERTY_TYPE: &str = "INCONSISTENT_PROPERTY_TYPE";
pub const NO_REACHABLE_TERMINAL: &str = "NO_REACHABLE_TERMINAL";
pub const PROPERTY_NOT_ALWAYS_WRITTEN: &str = "PROPERTY_NOT_ALWAYS_WRITTEN";
pub const DEPENDENCY_CYCLE: &str = "DEPENDENCY_CYCLE";
pub const PASS_NOT_RUN: &str = "PASS_NOT_RUN";
pub const CANCELLED: &str = "CANCELLED";
