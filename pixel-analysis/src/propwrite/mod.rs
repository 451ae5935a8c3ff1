//! Property-write safety: type consistency and path-coverage across output
//! property writes.

mod inventory;
mod safety;
mod type_safety;

pub use safety::{PropWriteSafetyPass, PropWriteSafetyResult};
pub use type_safety::{PropWriteTypeSafetyPass, PropWriteTypeSafetyResult};
