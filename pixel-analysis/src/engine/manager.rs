//! The analysis manager: exactly-once, dependency-ordered pass execution
//! memoized for the lifetime of one run.

use std::any::{Any, TypeId};

use pixel_core::types::collections::{FxHashMap, FxHashSet};
use pixel_core::{AnalysisConfig, Diagnostic, DiagnosticKind, TokenStream};

use crate::stack::{ArityProvider, DefaultArityProvider};

use super::pass::AnalysisPass;

/// Owns pass instances' results for one analysis run over one token stream.
///
/// `run::<P>()` executes `P` if it hasn't already run in this manager and
/// caches the result; re-entry with the same `P` returns the cached value
/// without re-executing. `get_result::<P>()` is what passes call on their
/// own dependencies — it transparently runs the dependency if its result
/// isn't cached yet, lazily resolving the dependency DAG one call at a time.
///
/// A pass that (directly or transitively) asks the manager for its own
/// result while it is still executing hits [`DiagnosticKind::DependencyCycle`]
/// instead of recursing forever — that can only happen from a programming
/// error in how passes declare their dependencies, not from anything a
/// token stream can trigger.
pub struct AnalysisManager<'t> {
    tokens: &'t TokenStream,
    config: &'t AnalysisConfig,
    results: FxHashMap<TypeId, Box<dyn Any>>,
    running: FxHashSet<TypeId>,
    cancelled: bool,
    arity_provider: Box<dyn ArityProvider>,
}

impl<'t> AnalysisManager<'t> {
    pub fn new(tokens: &'t TokenStream, config: &'t AnalysisConfig) -> Self {
        Self {
            tokens,
            config,
            results: FxHashMap::default(),
            running: FxHashSet::default(),
            cancelled: false,
            arity_provider: Box::new(DefaultArityProvider),
        }
    }

    /// Override the VM-defined pop/push arity table. Must be called before
    /// the stack-safety pass runs; it reads whatever is installed at the
    /// time it first executes.
    pub fn with_arity_provider(mut self, provider: impl ArityProvider + 'static) -> Self {
        self.arity_provider = Box::new(provider);
        self
    }

    pub fn arity_provider(&self) -> &dyn ArityProvider {
        self.arity_provider.as_ref()
    }

    pub fn tokens(&self) -> &'t TokenStream {
        self.tokens
    }

    pub fn config(&self) -> &'t AnalysisConfig {
        self.config
    }

    /// Cooperative cancellation: set by a host wrapping the run, observed by
    /// passes at block/token loop tops. The core itself never calls this.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Run `P` if it hasn't already run in this manager; return its cached
    /// result either way.
    pub fn run<P: AnalysisPass>(&mut self) -> Result<&P::Output, Diagnostic> {
        let type_id = TypeId::of::<P>();

        if self.results.contains_key(&type_id) {
            return Ok(self.cached::<P>());
        }

        if !self.running.insert(type_id) {
            return Err(Diagnostic::new(
                DiagnosticKind::DependencyCycle { pass: P::NAME },
                0,
            ));
        }

        tracing::debug!(pass = P::NAME, "running pass");
        let outcome = P::run(self.tokens, self);
        self.running.remove(&type_id);

        let output = outcome?;
        tracing::debug!(pass = P::NAME, "pass completed");
        self.results.insert(type_id, Box::new(output));
        Ok(self.cached::<P>())
    }

    /// Get `P`'s result, running it first if it hasn't run yet. This is what
    /// a pass calls on its own declared dependencies.
    pub fn get_result<P: AnalysisPass>(&mut self) -> Result<&P::Output, Diagnostic> {
        self.run::<P>()
    }

    /// Read a previously completed pass's result without triggering it.
    /// Intended for a downstream consumer (e.g. the code generator) querying
    /// a finished manager; fails with [`DiagnosticKind::PassNotRun`] if `P`
    /// was never run during this analysis.
    pub fn peek_result<P: AnalysisPass>(&self) -> Result<&P::Output, Diagnostic> {
        self.results
            .get(&TypeId::of::<P>())
            .map(|boxed| {
                boxed
                    .downcast_ref::<P::Output>()
                    .expect("pass result type mismatch — TypeId collision should be impossible")
            })
            .ok_or_else(|| Diagnostic::new(DiagnosticKind::PassNotRun { pass: P::NAME }, 0))
    }

    /// Whether `P` has already run (and cached a result) in this manager.
    pub fn has_run<P: AnalysisPass>(&self) -> bool {
        self.results.contains_key(&TypeId::of::<P>())
    }

    fn cached<P: AnalysisPass>(&self) -> &P::Output {
        self.results
            .get(&TypeId::of::<P>())
            .expect("cached called without a cached result")
            .downcast_ref::<P::Output>()
            .expect("pass result type mismatch — TypeId collision should be impossible")
    }
}
