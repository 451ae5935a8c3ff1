//! Worklist propagation of per-block stack depth.
//!
//! Depths start at ⟂ (unreached) except the entry block's `stack_depth_in`,
//! which is 0. Each dequeued block is walked token by token with the
//! configured [`ArityProvider`] to produce its `stack_depth_out`, which is
//! then proposed to every successor: first proposal sets and enqueues the
//! successor, a later disagreeing proposal is a `StackDepthMismatch`.

use std::collections::VecDeque;

use pixel_core::{Diagnostic, DiagnosticKind, TokenStream};

use crate::block::BlockAnalysisPass;
use crate::engine::{AnalysisManager, AnalysisPass};

use super::types::StackSafetyResult;

#[derive(Default)]
pub struct StackSafetyPass;

impl AnalysisPass for StackSafetyPass {
    type Output = StackSafetyResult;
    const NAME: &'static str = "Stack Safety Pass";

    fn run(tokens: &TokenStream, manager: &mut AnalysisManager<'_>) -> Result<Self::Output, Diagnostic> {
        let cfg = manager.get_result::<BlockAnalysisPass>()?.clone();
        if cfg.is_empty() {
            return Ok(StackSafetyResult::default());
        }

        let block_count = cfg.len();
        let mut stack_depth_in: Vec<Option<u32>> = vec![None; block_count];
        let mut stack_depth_out: Vec<Option<u32>> = vec![None; block_count];

        stack_depth_in[0] = Some(0);
        let mut worklist: VecDeque<usize> = VecDeque::new();
        worklist.push_back(0);

        let terminal_stack_depth = manager.config().terminal_stack_depth;
        let check_interval = manager.config().effective_cancellation_check_interval();
        let mut processed = 0usize;

        while let Some(block_index) = worklist.pop_front() {
            processed += 1;
            if processed % check_interval == 0 && manager.is_cancelled() {
                return Err(Diagnostic::new(DiagnosticKind::Cancelled, 0));
            }

            let block = &cfg.cfg_blocks[block_index];
            let mut depth = stack_depth_in[block_index]
                .expect("block was enqueued only after its stack_depth_in was set");

            for token_index in block.start..block.end {
                let token = &tokens[token_index];
                let (pops, pushes) = manager.arity_provider().arity(token);
                if depth < pops {
                    return Err(Diagnostic::new(
                        DiagnosticKind::StackUnderflow {
                            needed: pops,
                            available: depth,
                        },
                        token_index,
                    ));
                }
                depth = depth - pops + pushes;
            }

            stack_depth_out[block_index] = Some(depth);

            if block.is_terminal() {
                if let Some(expected) = terminal_stack_depth {
                    if depth != expected {
                        return Err(Diagnostic::new(
                            DiagnosticKind::TerminalDepthMismatch {
                                expected,
                                actual: depth,
                            },
                            block.end.saturating_sub(1),
                        ));
                    }
                }
            }

            for &successor in &block.successors {
                let successor_index = successor.index();
                match stack_depth_in[successor_index] {
                    None => {
                        stack_depth_in[successor_index] = Some(depth);
                        worklist.push_back(successor_index);
                    }
                    Some(existing) if existing != depth => {
                        let successor_first_token = cfg.cfg_blocks[successor_index].start;
                        return Err(Diagnostic::new(
                            DiagnosticKind::StackDepthMismatch { a: existing, b: depth },
                            successor_first_token,
                        ));
                    }
                    Some(_) => {}
                }
            }
        }

        Ok(StackSafetyResult {
            stack_depth_in,
            stack_depth_out,
        })
    }
}
