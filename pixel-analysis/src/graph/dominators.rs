//! Dominator sets, computed as a standalone pass via `petgraph`.
//!
//! Not used by [`crate::propwrite::PropWriteSafetyPass`] — that pass uses the
//! reachability-without-writes formulation instead, since it is exact for
//! properties with more than one write site. This pass exists because the
//! dominator relation is a data-model invariant in its own right, useful to
//! downstream consumers that want a block's full set of dominators rather
//! than an answer to one property's coverage question.

use petgraph::algo::dominators::{self, Dominators};
use petgraph::graph::{DiGraph, NodeIndex};

use pixel_core::types::collections::FxHashSet;
use pixel_core::types::identifiers::BlockId;
use pixel_core::{Diagnostic, TokenStream};

use crate::block::BlockAnalysisPass;
use crate::engine::{AnalysisManager, AnalysisPass};
use crate::stack::StackSafetyPass;

/// `dominators_of(b)` is `Some(set)` for every block reachable from entry,
/// `None` for blocks the stack-safety pass never reached. `Dom(entry) =
/// {entry}`; for every other reachable block `b`, `Dom(b) = {b} ∪ ⋂ Dom(p)`
/// over reachable predecessors `p` — exactly what petgraph's dominator tree
/// encodes as an ancestor chain.
#[derive(Debug, Clone, Default)]
pub struct DominatorsResult {
    dom: Vec<Option<FxHashSet<BlockId>>>,
}

impl DominatorsResult {
    pub fn dominators_of(&self, block: BlockId) -> Option<&FxHashSet<BlockId>> {
        self.dom.get(block.index()).and_then(|d| d.as_ref())
    }

    pub fn dominates(&self, candidate: BlockId, block: BlockId) -> bool {
        self.dominators_of(block)
            .is_some_and(|set| set.contains(&candidate))
    }
}

#[derive(Default)]
pub struct DominatorsPass;

impl AnalysisPass for DominatorsPass {
    type Output = DominatorsResult;
    const NAME: &'static str = "Dominators Pass";

    fn run(_tokens: &TokenStream, manager: &mut AnalysisManager<'_>) -> Result<Self::Output, Diagnostic> {
        let cfg = manager.get_result::<BlockAnalysisPass>()?.clone();
        let stack = manager.get_result::<StackSafetyPass>()?.clone();

        if cfg.is_empty() {
            return Ok(DominatorsResult::default());
        }

        // petgraph node index == block index: blocks are already a dense,
        // zero-based id space, so add_node in id order needs no lookup map.
        let mut graph: DiGraph<BlockId, ()> = DiGraph::with_capacity(cfg.len(), 0);
        for block in &cfg.cfg_blocks {
            graph.add_node(block.id);
        }
        for block in &cfg.cfg_blocks {
            for &successor in &block.successors {
                graph.add_edge(NodeIndex::new(block.id.index()), NodeIndex::new(successor.index()), ());
            }
        }

        let roots = dominators::simple_fast(&graph, NodeIndex::new(BlockId::ENTRY.index()));

        let mut dom: Vec<Option<FxHashSet<BlockId>>> = vec![None; cfg.len()];
        for block in &cfg.cfg_blocks {
            if !stack.is_reachable(block.id.index()) {
                continue;
            }
            let node = NodeIndex::new(block.id.index());
            dom[block.id.index()] = Some(ancestor_chain(&roots, node, &graph));
        }

        Ok(DominatorsResult { dom })
    }
}

fn ancestor_chain(roots: &Dominators<NodeIndex>, node: NodeIndex, graph: &DiGraph<BlockId, ()>) -> FxHashSet<BlockId> {
    roots
        .dominators(node)
        .into_iter()
        .flatten()
        .map(|idx| graph[idx])
        .collect()
}
