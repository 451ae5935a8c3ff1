//! Newtype identifiers, kept distinct so a block id can never be confused
//! with a raw token index at a call boundary.

use std::fmt;

/// Index of a CFG block. Block 0 is always the entry block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockId(pub u32);

impl BlockId {
    pub const ENTRY: BlockId = BlockId(0);

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "block#{}", self.0)
    }
}

impl From<usize> for BlockId {
    fn from(value: usize) -> Self {
        BlockId(value as u32)
    }
}

/// Position in the token stream. A plain alias, not a newtype: it is
/// compared and arithmetic'd against raw indices constantly, and the token
/// stream itself already owns the invariant that these are valid positions.
pub type TokenIndex = usize;
