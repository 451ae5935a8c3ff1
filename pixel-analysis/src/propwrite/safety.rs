//! Path-coverage safety: every output property must be written on every path
//! from entry to every reachable terminal block.
//!
//! Implemented as reachability-without-writes rather than dominator
//! intersection: delete every block that writes property `p` from the CFG
//! and ask whether any reachable terminal is still reachable from entry. A
//! single dominator test is too strict when several distinct write sites
//! jointly, but not individually, cover every path.

use std::collections::VecDeque;

use pixel_core::types::collections::{FxHashMap, FxHashSet};
use pixel_core::types::identifiers::BlockId;
use pixel_core::{Diagnostic, DiagnosticKind, TokenStream};

use crate::block::BlockAnalysisPass;
use crate::engine::{AnalysisManager, AnalysisPass};
use crate::stack::StackSafetyPass;

use super::inventory::PropertyWriteInventory;

/// Presence of this result means every property written anywhere in the
/// token stream is guaranteed on every path from entry to every reachable
/// terminal block.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropWriteSafetyResult;

#[derive(Default)]
pub struct PropWriteSafetyPass;

impl AnalysisPass for PropWriteSafetyPass {
    type Output = PropWriteSafetyResult;
    const NAME: &'static str = "Prop-Write Safety Pass";

    fn run(tokens: &TokenStream, manager: &mut AnalysisManager<'_>) -> Result<Self::Output, Diagnostic> {
        let cfg = manager.get_result::<BlockAnalysisPass>()?.clone();
        let stack = manager.get_result::<StackSafetyPass>()?.clone();

        let inventory = PropertyWriteInventory::collect(tokens, &cfg);
        if inventory.is_empty() {
            return Ok(PropWriteSafetyResult);
        }

        let reachable_terminals: FxHashSet<BlockId> = cfg
            .cfg_blocks
            .iter()
            .filter(|b| b.is_terminal() && stack.is_reachable(b.id.index()))
            .map(|b| b.id)
            .collect();

        if reachable_terminals.is_empty() {
            let first_write_index = inventory
                .first_write_index
                .expect("inventory is non-empty, so a first write exists");
            return Err(Diagnostic::new(DiagnosticKind::NoReachableTerminal, first_write_index));
        }

        let successors_by_block: FxHashMap<BlockId, &[BlockId]> = cfg
            .cfg_blocks
            .iter()
            .map(|b| (b.id, b.successors.as_slice()))
            .collect();

        for name in &inventory.order {
            let write_blocks: FxHashSet<BlockId> = inventory.occurrences[name]
                .iter()
                .map(|&(_, block_id)| block_id)
                .collect();

            if write_blocks.contains(&BlockId::ENTRY) {
                continue;
            }

            let mut visited: FxHashSet<BlockId> = FxHashSet::default();
            let mut worklist = VecDeque::new();
            visited.insert(BlockId::ENTRY);
            worklist.push_back(BlockId::ENTRY);

            while let Some(block_id) = worklist.pop_front() {
                for &successor in successors_by_block[&block_id] {
                    if write_blocks.contains(&successor) || visited.contains(&successor) {
                        continue;
                    }
                    visited.insert(successor);
                    worklist.push_back(successor);
                }
            }

            if reachable_terminals.iter().any(|t| visited.contains(t)) {
                return Err(Diagnostic::new(
                    DiagnosticKind::PropertyNotAlwaysWritten { name: name.clone() },
                    inventory.first_occurrence(name),
                ));
            }
        }

        Ok(PropWriteSafetyResult)
    }
}
