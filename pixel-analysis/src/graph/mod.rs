//! Graph utilities layered on the CFG: dominator sets.

mod dominators;

pub use dominators::{DominatorsPass, DominatorsResult};
