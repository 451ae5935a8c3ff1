//! Leader-scan CFG construction.
//!
//! 1. Scan tokens once to find leaders: index 0, every label definition,
//!    and every token immediately following a jump, branch, or terminal.
//! 2. Form blocks as maximal ranges between consecutive leaders.
//! 3. Resolve successors from each block's last token.
//! 4. Invert successors into predecessors.

use smallvec::SmallVec;

use pixel_core::token::{TokenKind, TokenPayload};
use pixel_core::types::collections::FxHashMap;
use pixel_core::types::identifiers::BlockId;
use pixel_core::{Diagnostic, DiagnosticKind, TokenStream};

use crate::engine::{AnalysisManager, AnalysisPass};

use super::types::{Block, BlockAnalysisResult};

#[derive(Default)]
pub struct BlockAnalysisPass;

impl AnalysisPass for BlockAnalysisPass {
    type Output = BlockAnalysisResult;
    const NAME: &'static str = "Block Analysis Pass";

    fn run(tokens: &TokenStream, _manager: &mut AnalysisManager<'_>) -> Result<Self::Output, Diagnostic> {
        if tokens.is_empty() {
            return Ok(BlockAnalysisResult::default());
        }

        let n = tokens.len();

        // Step 1: raw leaders, plus the position of every label definition.
        let mut is_raw_leader = vec![false; n];
        is_raw_leader[0] = true;
        let mut label_positions: FxHashMap<String, usize> = FxHashMap::default();

        for (i, tok) in tokens.iter().enumerate() {
            match (&tok.kind, &tok.payload) {
                (TokenKind::Label, TokenPayload::Label { name }) => {
                    is_raw_leader[i] = true;
                    label_positions.insert(name.clone(), i);
                }
                (TokenKind::Jump, _) | (TokenKind::Branch, _) | (TokenKind::Terminal, _) => {
                    if i + 1 < n {
                        is_raw_leader[i + 1] = true;
                    }
                }
                _ => {}
            }
        }

        // Step 1b: collapse adjacent label-only leaders into a single block
        // start, so two label definitions that coincide (no real content
        // between them) resolve to the same block.
        let raw_leaders: Vec<usize> = (0..n).filter(|&i| is_raw_leader[i]).collect();
        let mut leader_to_block_start: FxHashMap<usize, usize> = FxHashMap::default();
        let mut block_starts: Vec<usize> = Vec::new();

        for &idx in &raw_leaders {
            let merges_with_previous = idx > 0
                && is_raw_leader[idx - 1]
                && matches!(tokens[idx].kind, TokenKind::Label)
                && matches!(tokens[idx - 1].kind, TokenKind::Label)
                && leader_to_block_start.contains_key(&(idx - 1));

            if merges_with_previous {
                let start = leader_to_block_start[&(idx - 1)];
                leader_to_block_start.insert(idx, start);
            } else {
                block_starts.push(idx);
                leader_to_block_start.insert(idx, idx);
            }
        }

        // Step 2: form blocks between consecutive (collapsed) leaders.
        let block_start_to_id: FxHashMap<usize, BlockId> = block_starts
            .iter()
            .enumerate()
            .map(|(id, &start)| (start, BlockId::from(id)))
            .collect();

        let mut cfg_blocks: Vec<Block> = block_starts
            .iter()
            .enumerate()
            .map(|(id, &start)| {
                let end = block_starts.get(id + 1).copied().unwrap_or(n);
                let label = tokens[start..end]
                    .iter()
                    .find_map(|t| match (&t.kind, &t.payload) {
                        (TokenKind::Label, TokenPayload::Label { name }) => Some(name.clone()),
                        _ => None,
                    });
                Block {
                    id: BlockId::from(id),
                    start,
                    end,
                    predecessors: SmallVec::new(),
                    successors: SmallVec::new(),
                    label,
                }
            })
            .collect();

        // Step 3: resolve successors from the last token of each block.
        let resolve_label = |name: &str, cite_index: usize| -> Result<BlockId, Diagnostic> {
            let pos = label_positions
                .get(name)
                .ok_or_else(|| Diagnostic::new(DiagnosticKind::UnresolvedLabel { label: name.to_string() }, cite_index))?;
            let block_start = leader_to_block_start[pos];
            Ok(block_start_to_id[&block_start])
        };

        for id in 0..cfg_blocks.len() {
            let block_end = cfg_blocks[id].end;
            let last_index = block_end - 1;
            let last_token = &tokens[last_index];

            let mut successors: SmallVec<[BlockId; 2]> = SmallVec::new();
            match (&last_token.kind, &last_token.payload) {
                (TokenKind::Jump, TokenPayload::Jump { target_label }) => {
                    successors.push(resolve_label(target_label, last_index)?);
                }
                (TokenKind::Branch, TokenPayload::Branch { taken_label }) => {
                    successors.push(resolve_label(taken_label, last_index)?);
                    if block_end < n {
                        successors.push(block_start_to_id[&block_end]);
                    }
                }
                (TokenKind::Terminal, _) => {}
                _ => {
                    if block_end < n {
                        successors.push(block_start_to_id[&block_end]);
                    }
                }
            }

            cfg_blocks[id].successors = successors;
        }

        // Step 4: invert successors into predecessors.
        let successors_by_block: Vec<SmallVec<[BlockId; 2]>> =
            cfg_blocks.iter().map(|b| b.successors.clone()).collect();
        for (pred_id, successors) in successors_by_block.iter().enumerate() {
            for &succ in successors {
                cfg_blocks[succ.index()].predecessors.push(BlockId::from(pred_id));
            }
        }

        Ok(BlockAnalysisResult { cfg_blocks })
    }
}
