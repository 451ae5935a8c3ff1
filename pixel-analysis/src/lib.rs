//! # pixel-analysis
//!
//! Dependency-ordered analysis passes over a [`pixel_core::TokenStream`]:
//! CFG construction, stack-discipline safety, and property-write type and
//! path-coverage safety, orchestrated by a memoizing [`engine::AnalysisManager`].

#![allow(dead_code)]

pub mod block;
pub mod engine;
pub mod graph;
pub mod pipeline;
pub mod propwrite;
pub mod stack;

pub use pipeline::{analyze, PhaseTimings};
