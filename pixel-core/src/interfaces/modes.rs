//! Re-export of the lowering mode, named here because the mode is the one
//! piece of frontend vocabulary the core's token payloads carry directly.

pub use crate::token::Mode;
