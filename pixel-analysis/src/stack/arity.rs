//! The pop/push contract for each token kind.
//!
//! The exact arity table is VM-defined — this crate does not own the
//! authoritative definition, only a conservative default consistent with
//! the kinds in [`pixel_core::token`]. A host embedding the core with a
//! different VM wires its own table through [`ArityProvider`] instead of
//! this crate reinventing one.

use pixel_core::token::{ArithOp, Mode, StackOp, Token, TokenKind, TokenPayload};

/// Number of values a token pops and pushes, in that order.
pub type Arity = (u32, u32);

/// Supplies the `(pops, pushes)` contract for a token. Implementations must
/// be pure and total: every token kind the producer can emit must have a
/// defined arity.
pub trait ArityProvider {
    fn arity(&self, token: &Token) -> Arity;
}

/// The default arity table, matching the kinds defined in
/// [`pixel_core::token`]. Good enough for testing and for hosts that don't
/// need to override it.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultArityProvider;

impl ArityProvider for DefaultArityProvider {
    fn arity(&self, token: &Token) -> Arity {
        match (&token.kind, &token.payload) {
            (TokenKind::Constant, _) => (0, 1),
            (TokenKind::PixelAccess, TokenPayload::PixelAccess { mode: Mode::Expr }) => (2, 1),
            (TokenKind::PixelAccess, TokenPayload::PixelAccess { mode: Mode::Single }) => (0, 1),
            (TokenKind::PixelAccess, _) => (0, 1),
            (TokenKind::Arithmetic, TokenPayload::Arithmetic { op }) => (op.operand_count(), 1),
            (TokenKind::Arithmetic, _) => (2, 1),
            (TokenKind::StackManip, TokenPayload::StackManip { op }) => stack_manip_arity(*op),
            (TokenKind::StackManip, _) => (0, 0),
            (TokenKind::Jump, _) => (0, 0),
            (TokenKind::Branch, _) => (1, 0),
            (TokenKind::Label, _) => (0, 0),
            (TokenKind::Terminal, _) => (0, 0),
            (TokenKind::PropStore, _) => (1, 0),
        }
    }
}

fn stack_manip_arity(op: StackOp) -> Arity {
    match op {
        StackOp::Dup => (1, 2),
        StackOp::Drop => (1, 0),
        StackOp::Swap => (2, 2),
    }
}
