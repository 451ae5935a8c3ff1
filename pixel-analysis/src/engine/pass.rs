//! The analysis-pass trait.

use pixel_core::{Diagnostic, TokenStream};

use super::manager::AnalysisManager;

/// A pure function from the token stream and prior pass results to this
/// pass's own result, or a diagnostic.
///
/// A pass declares its dependencies implicitly: it calls
/// [`AnalysisManager::get_result`] for each dependency at the start of
/// `run`, which lazily resolves and memoizes that dependency before this
/// pass proceeds. Passes carry no instance state of their own — `Self` is
/// only ever used as a type-level tag — so every implementor derives
/// `Default` and is constructed on demand by the manager.
pub trait AnalysisPass: Default + 'static {
    /// The result this pass publishes on success.
    type Output: 'static;

    /// Stable name used in diagnostics and tracing spans.
    const NAME: &'static str;

    fn run(tokens: &TokenStream, manager: &mut AnalysisManager<'_>) -> Result<Self::Output, Diagnostic>;
}
