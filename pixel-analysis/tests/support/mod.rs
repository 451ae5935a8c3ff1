//! Token-stream builders shared across the integration tests. Each builder
//! takes the `source_index` explicitly so tests read like the token stream
//! they describe.

use pixel_core::token::{ArithOp, Mode, PropType, StackOp, Token, TokenKind, TokenPayload};
use pixel_core::TokenStream;

pub fn constant(index: usize, value: f64) -> Token {
    Token::new(TokenKind::Constant, value.to_string(), index, TokenPayload::Constant { value })
}

pub fn pixel_access(index: usize, mode: Mode) -> Token {
    Token::new(TokenKind::PixelAccess, "pix", index, TokenPayload::PixelAccess { mode })
}

pub fn arith(index: usize, op: ArithOp) -> Token {
    Token::new(TokenKind::Arithmetic, format!("{op:?}"), index, TokenPayload::Arithmetic { op })
}

pub fn stack_manip(index: usize, op: StackOp) -> Token {
    Token::new(TokenKind::StackManip, format!("{op:?}"), index, TokenPayload::StackManip { op })
}

pub fn jump(index: usize, target_label: &str) -> Token {
    Token::new(
        TokenKind::Jump,
        format!("jump {target_label}"),
        index,
        TokenPayload::Jump {
            target_label: target_label.to_string(),
        },
    )
}

pub fn branch(index: usize, taken_label: &str) -> Token {
    Token::new(
        TokenKind::Branch,
        format!("branch {taken_label}"),
        index,
        TokenPayload::Branch {
            taken_label: taken_label.to_string(),
        },
    )
}

pub fn label(index: usize, name: &str) -> Token {
    Token::new(
        TokenKind::Label,
        format!("{name}:"),
        index,
        TokenPayload::Label { name: name.to_string() },
    )
}

pub fn terminal(index: usize) -> Token {
    Token::bare(TokenKind::Terminal, "^", index)
}

pub fn prop_store(index: usize, name: &str, prop_type: PropType) -> Token {
    Token::new(
        TokenKind::PropStore,
        format!("{name}!"),
        index,
        TokenPayload::PropStore {
            prop_name: name.to_string(),
            prop_type,
        },
    )
}

pub fn stream(tokens: Vec<Token>) -> TokenStream {
    TokenStream::new(tokens)
}
