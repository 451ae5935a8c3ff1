//! Linear type-consistency check across all writes to a given property.
//!
//! Independent of reachability and of the CFG: an unreachable write to a
//! property still participates in this check, since it is a purely syntactic
//! property of the token stream.

use pixel_core::token::{TokenKind, TokenPayload};
use pixel_core::types::collections::FxHashMap;
use pixel_core::{Diagnostic, DiagnosticKind, TokenStream};

use crate::engine::{AnalysisManager, AnalysisPass};

/// Presence of this result means every property name in the token stream was
/// written with a single consistent type.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropWriteTypeSafetyResult;

#[derive(Default)]
pub struct PropWriteTypeSafetyPass;

impl AnalysisPass for PropWriteTypeSafetyPass {
    type Output = PropWriteTypeSafetyResult;
    const NAME: &'static str = "Prop-Write Type Safety Pass";

    fn run(tokens: &TokenStream, _manager: &mut AnalysisManager<'_>) -> Result<Self::Output, Diagnostic> {
        let mut first_seen: FxHashMap<&str, (pixel_core::token::PropType, usize)> = FxHashMap::default();

        for (index, token) in tokens.iter().enumerate() {
            let (TokenKind::PropStore, TokenPayload::PropStore { prop_name, prop_type }) =
                (&token.kind, &token.payload)
            else {
                continue;
            };

            match first_seen.get(prop_name.as_str()) {
                None => {
                    first_seen.insert(prop_name.as_str(), (*prop_type, index));
                }
                Some(&(first_type, first_index)) if first_type != *prop_type => {
                    return Err(Diagnostic::new(
                        DiagnosticKind::InconsistentPropertyType {
                            name: prop_name.clone(),
                            first_type,
                            first_index,
                            second_type: *prop_type,
                            second_index: index,
                        },
                        index,
                    ));
                }
                Some(_) => {}
            }
        }

        Ok(PropWriteTypeSafetyResult)
    }
}
