//! Top-level entry point: run every pass over one token stream in
//! dependency order and report timing for each phase.

use std::time::Instant;

use pixel_core::{AnalysisConfig, Diagnostic, TokenStream};

use crate::block::BlockAnalysisPass;
use crate::engine::AnalysisManager;
use crate::propwrite::{PropWriteSafetyPass, PropWriteTypeSafetyPass};
use crate::stack::StackSafetyPass;

/// Microsecond timing for each of the four mandatory passes, in run order.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhaseTimings {
    pub block_analysis_us: u128,
    pub stack_safety_us: u128,
    pub prop_write_type_safety_us: u128,
    pub prop_write_safety_us: u128,
}

/// Run the full pipeline over `tokens` and return the manager holding every
/// pass's result, plus per-phase timing. On the first diagnostic, the run
/// aborts and that diagnostic is returned; already-cached results of earlier
/// passes are not exposed to the caller in that case.
pub fn analyze<'t>(
    tokens: &'t TokenStream,
    config: &'t AnalysisConfig,
) -> Result<(AnalysisManager<'t>, PhaseTimings), Diagnostic> {
    let mut manager = AnalysisManager::new(tokens, config);
    let mut timings = PhaseTimings::default();

    let started = Instant::now();
    manager.run::<BlockAnalysisPass>()?;
    timings.block_analysis_us = started.elapsed().as_micros();

    let started = Instant::now();
    manager.run::<StackSafetyPass>()?;
    timings.stack_safety_us = started.elapsed().as_micros();

    let started = Instant::now();
    manager.run::<PropWriteTypeSafetyPass>()?;
    timings.prop_write_type_safety_us = started.elapsed().as_micros();

    let started = Instant::now();
    manager.run::<PropWriteSafetyPass>()?;
    timings.prop_write_safety_us = started.elapsed().as_micros();

    tracing::debug!(
        block_analysis_us = timings.block_analysis_us,
        stack_safety_us = timings.stack_safety_us,
        prop_write_type_safety_us = timings.prop_write_type_safety_us,
        prop_write_safety_us = timings.prop_write_safety_us,
        "analysis pipeline completed"
    );

    Ok((manager, timings))
}
