//! # pixel-core
//!
//! Foundation crate for the pixel-expression analysis pipeline.
//! Defines the token model, diagnostics, config, identifiers, and the
//! vocabulary shared with the infix frontend, the built-in/stdlib table,
//! and the runtime VM — all of which live outside this workspace and are
//! represented here only as data the core can be handed.
//!
//! Every other crate in the workspace depends on this one.

#![allow(dead_code)]

pub mod config;
pub mod errors;
pub mod interfaces;
pub mod token;
pub mod tracing_init;
pub mod types;

pub use config::AnalysisConfig;
pub use errors::diagnostic::{Diagnostic, DiagnosticKind};
pub use errors::error_code::AnalysisErrorCode;
pub use token::{PropType, Token, TokenKind, TokenPayload, TokenStream};
pub use types::collections::{FxHashMap, FxHashSet};
pub use types::identifiers::{BlockId, TokenIndex};
