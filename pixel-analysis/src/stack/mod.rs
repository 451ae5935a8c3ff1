//! Stack-discipline safety: per-block stack depth via worklist propagation.

mod arity;
mod safety;
mod types;

pub use arity::{Arity, ArityProvider, DefaultArityProvider};
pub use safety::StackSafetyPass;
pub use types::StackSafetyResult;
