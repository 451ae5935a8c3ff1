//! Collects `PropStore` occurrences grouped by property name, in the order
//! properties are first encountered — a deterministic stand-in for the
//! source-lexicographic ordering a sorted map would give, without requiring
//! one.

use pixel_core::token::{TokenKind, TokenPayload};
use pixel_core::types::collections::FxHashMap;
use pixel_core::types::identifiers::BlockId;
use pixel_core::TokenStream;

use crate::block::BlockAnalysisResult;

pub struct PropertyWriteInventory {
    pub order: Vec<String>,
    pub occurrences: FxHashMap<String, Vec<(usize, BlockId)>>,
    pub first_write_index: Option<usize>,
}

impl PropertyWriteInventory {
    pub fn collect(tokens: &TokenStream, cfg: &BlockAnalysisResult) -> Self {
        let mut order = Vec::new();
        let mut occurrences: FxHashMap<String, Vec<(usize, BlockId)>> = FxHashMap::default();
        let mut first_write_index = None;

        for (index, token) in tokens.iter().enumerate() {
            let (TokenKind::PropStore, TokenPayload::PropStore { prop_name, .. }) =
                (&token.kind, &token.payload)
            else {
                continue;
            };

            if first_write_index.is_none() {
                first_write_index = Some(index);
            }

            let block_id = cfg
                .block_containing(index)
                .expect("every token index belongs to exactly one block")
                .id;

            let entry = occurrences.entry(prop_name.clone()).or_insert_with(|| {
                order.push(prop_name.clone());
                Vec::new()
            });
            entry.push((index, block_id));
        }

        Self {
            order,
            occurrences,
            first_write_index,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn first_occurrence(&self, name: &str) -> usize {
        self.occurrences[name][0].0
    }
}
