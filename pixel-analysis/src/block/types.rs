//! The control-flow graph produced by the block analysis pass.

use smallvec::SmallVec;

use pixel_core::types::identifiers::BlockId;

/// A maximal straight-line token range with a single entry and a single
/// exit. `[start, end)` is half-open; every token index in
/// `[0, token_count)` belongs to exactly one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub id: BlockId,
    pub start: usize,
    pub end: usize,
    /// Most blocks have 0 or 1 predecessors; a join point has 2 (a diamond
    /// merge) or occasionally more (several branches targeting one label).
    pub predecessors: SmallVec<[BlockId; 4]>,
    /// At most 2: fall-through and/or a branch/jump target.
    pub successors: SmallVec<[BlockId; 2]>,
    pub label: Option<String>,
}

impl Block {
    pub fn is_terminal(&self) -> bool {
        self.successors.is_empty()
    }

    pub fn contains(&self, token_index: usize) -> bool {
        token_index >= self.start && token_index < self.end
    }
}

/// Output of the block analysis pass: the CFG as a flat, index-addressable
/// vector of blocks. `cfg_blocks[0]` is always the entry block.
#[derive(Debug, Clone, Default)]
pub struct BlockAnalysisResult {
    pub cfg_blocks: Vec<Block>,
}

impl BlockAnalysisResult {
    pub fn get(&self, id: BlockId) -> &Block {
        &self.cfg_blocks[id.index()]
    }

    pub fn block_containing(&self, token_index: usize) -> Option<&Block> {
        self.cfg_blocks.iter().find(|b| b.contains(token_index))
    }

    pub fn len(&self) -> usize {
        self.cfg_blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cfg_blocks.is_empty()
    }
}
