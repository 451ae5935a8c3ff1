//! Synthetic token-stream fixtures for benchmarking and load tests.
//!
//! Unlike a file-scanning pipeline's fixtures, there is no filesystem here —
//! a fixture is just a batch of generated [`pixel_core::TokenStream`]s plus
//! aggregate size stats for reporting throughput.

use pixel_core::token::{PropType, Token, TokenKind, TokenPayload};
use pixel_core::TokenStream;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureSize {
    Micro,
    Small,
    Medium,
    Large,
}

impl FixtureSize {
    /// Number of token streams generated at this size.
    fn stream_count(self) -> usize {
        match self {
            FixtureSize::Micro => 4,
            FixtureSize::Small => 32,
            FixtureSize::Medium => 256,
            FixtureSize::Large => 2048,
        }
    }

    /// Approximate token count per generated stream.
    fn tokens_per_stream(self) -> usize {
        match self {
            FixtureSize::Micro => 16,
            FixtureSize::Small => 64,
            FixtureSize::Medium => 256,
            FixtureSize::Large => 1024,
        }
    }
}

pub struct Fixture {
    pub streams: Vec<TokenStream>,
    pub total_tokens: usize,
}

/// A small xorshift PRNG — deterministic across runs given the same seed, no
/// external dependency needed for fixture variety.
struct Xorshift64(u64);

impl Xorshift64 {
    fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    fn next_range(&mut self, bound: usize) -> usize {
        (self.next() as usize) % bound.max(1)
    }
}

/// Generate `size.stream_count()` token streams, each a diamond-shaped
/// program (branch, two arms each writing a property, join, terminal)
/// repeated until it reaches roughly `size.tokens_per_stream()` tokens.
pub fn generate_fixture(size: FixtureSize, seed: u64) -> Fixture {
    let mut rng = Xorshift64::new(seed);
    let mut streams = Vec::with_capacity(size.stream_count());
    let mut total_tokens = 0;

    for stream_index in 0..size.stream_count() {
        let tokens = generate_diamond_chain(size.tokens_per_stream(), &mut rng, stream_index);
        total_tokens += tokens.len();
        streams.push(tokens);
    }

    Fixture { streams, total_tokens }
}

fn generate_diamond_chain(target_len: usize, rng: &mut Xorshift64, chain_id: usize) -> TokenStream {
    let mut tokens = Vec::with_capacity(target_len + 8);
    let mut index = 0usize;
    let mut diamond_id = 0usize;

    while tokens.len() < target_len {
        let l1 = format!("c{chain_id}_{diamond_id}_l1");
        let l2 = format!("c{chain_id}_{diamond_id}_l2");

        tokens.push(push_const(rng, index));
        index += 1;
        tokens.push(Token::new(
            TokenKind::Branch,
            "branch",
            index,
            TokenPayload::Branch { taken_label: l1.clone() },
        ));
        index += 1;

        tokens.push(push_const(rng, index));
        index += 1;
        tokens.push(Token::new(
            TokenKind::PropStore,
            "p!",
            index,
            TokenPayload::PropStore {
                prop_name: "p".to_string(),
                prop_type: PropType::F,
            },
        ));
        index += 1;
        tokens.push(Token::new(
            TokenKind::Jump,
            "jump",
            index,
            TokenPayload::Jump { target_label: l2.clone() },
        ));
        index += 1;

        tokens.push(Token::new(
            TokenKind::Label,
            format!("{l1}:"),
            index,
            TokenPayload::Label { name: l1 },
        ));
        index += 1;
        tokens.push(push_const(rng, index));
        index += 1;
        tokens.push(Token::new(
            TokenKind::PropStore,
            "p!",
            index,
            TokenPayload::PropStore {
                prop_name: "p".to_string(),
                prop_type: PropType::F,
            },
        ));
        index += 1;

        tokens.push(Token::new(
            TokenKind::Label,
            format!("{l2}:"),
            index,
            TokenPayload::Label { name: l2 },
        ));
        index += 1;

        diamond_id += 1;
    }

    tokens.push(Token::bare(TokenKind::Terminal, "^", index));
    TokenStream::new(tokens)
}

fn push_const(rng: &mut Xorshift64, index: usize) -> Token {
    let value = (rng.next_range(1000) as f64) / 10.0;
    Token::new(TokenKind::Constant, value.to_string(), index, TokenPayload::Constant { value })
}
