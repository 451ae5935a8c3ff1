//! The uniform diagnostic type every pass raises on failure.

use serde::Serialize;

use crate::token::PropType;

use super::error_code::{self, AnalysisErrorCode};

/// The taxonomy of failures the analysis pipeline can report. Each variant
/// carries exactly the data needed to render a precise message; the token
/// index used to locate the failure in the source lives on [`Diagnostic`]
/// itself, not here, since some kinds cite more than one index.
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
pub enum DiagnosticKind {
    #[error("jump targets undefined label '{label}'")]
    UnresolvedLabel { label: String },

    #[error("operation pops from an empty stack (needs {needed}, have {available})")]
    StackUnderflow { needed: u32, available: u32 },

    #[error("predecessors disagree on stack depth at join: {a} vs {b}")]
    StackDepthMismatch { a: u32, b: u32 },

    #[error("terminal block ends with stack depth {actual}, expected {expected}")]
    TerminalDepthMismatch { expected: u32, actual: u32 },

    #[error(
        "inconsistent types used for property '{name}': previous type {first_type} (idx: {first_index}), current type {second_type} (idx: {second_index})"
    )]
    InconsistentPropertyType {
        name: String,
        first_type: PropType,
        first_index: usize,
        second_type: PropType,
        second_index: usize,
    },

    #[error("property writes exist but the expression has no reachable terminal point")]
    NoReachableTerminal,

    #[error("write to property '{name}' is not guaranteed to be executed on all paths")]
    PropertyNotAlwaysWritten { name: String },

    #[error("dependency cycle detected while running pass '{pass}'")]
    DependencyCycle { pass: &'static str },

    #[error("pass '{pass}' has not been run")]
    PassNotRun { pass: &'static str },

    #[error("analysis run was cancelled")]
    Cancelled,
}

impl AnalysisErrorCode for DiagnosticKind {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnresolvedLabel { .. } => error_code::UNRESOLVED_LABEL,
            Self::StackUnderflow { .. } => error_code::STACK_UNDERFLOW,
            Self::StackDepthMismatch { .. } => error_code::STACK_DEPTH_MISMATCH,
            Self::TerminalDepthMismatch { .. } => error_code::TERMINAL_DEPTH_MISMATCH,
            Self::InconsistentPropertyType { .. } => error_code::INCONSISTENT_PROPERTY_TYPE,
            Self::NoReachableTerminal => error_code::NO_REACHABLE_TERMINAL,
            Self::PropertyNotAlwaysWritten { .. } => error_code::PROPERTY_NOT_ALWAYS_WRITTEN,
            Self::DependencyCycle { .. } => error_code::DEPENDENCY_CYCLE,
            Self::PassNotRun { .. } => error_code::PASS_NOT_RUN,
            Self::Cancelled => error_code::CANCELLED,
        }
    }
}

/// A single diagnostic: the failure that aborted an analysis run.
///
/// Renders as `<message> (idx: <token_index>)`. The token index identifies a
/// position in the postfix token stream; a host fronting the core with the
/// infix surface syntax remaps it through its own source map before display.
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[error("{kind} (idx: {token_index})")]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub token_index: usize,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, token_index: usize) -> Self {
        Self { kind, token_index }
    }

    pub fn error_code(&self) -> &'static str {
        self.kind.error_code()
    }

    /// Render as a JSON object `{code, message, token_index}` for hosts that
    /// want to report diagnostics over a non-Rust boundary.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "code": self.error_code(),
            "message": self.kind.to_string(),
            "token_index": self.token_index,
        })
    }
}
