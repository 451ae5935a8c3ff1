pub mod diagnostic;
pub mod error_code;

pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use error_code::AnalysisErrorCode;
