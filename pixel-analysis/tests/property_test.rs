mod support;

use proptest::prelude::*;

use pixel_core::AnalysisConfig;
use pixel_analysis::block::BlockAnalysisPass;
use pixel_analysis::engine::{AnalysisManager, AnalysisPass};
use pixel_analysis::stack::StackSafetyPass;
use support::*;

proptest! {
    /// A straight-line run of `n` constant pushes followed by a terminal is
    /// always one block whose output depth is exactly `n`, for any `n`.
    #[test]
    fn straight_line_pushes_produce_one_block_at_depth_n(n in 0usize..64) {
        let mut tokens = Vec::new();
        for i in 0..n {
            tokens.push(constant(i, i as f64));
        }
        tokens.push(terminal(n));
        let tokens = stream(tokens);
        let config = AnalysisConfig::default();
        let mut manager = AnalysisManager::new(&tokens, &config);

        let block_count = manager.run::<BlockAnalysisPass>().unwrap().len();
        prop_assert_eq!(block_count, 1);

        let stack = manager.run::<StackSafetyPass>().unwrap();
        prop_assert_eq!(stack.stack_depth_out[0], Some(n as u32));
    }

    /// Every token index in a straight-line stream belongs to exactly one
    /// block, and that block's predecessor/successor relation is symmetric.
    #[test]
    fn every_block_partition_is_consistent(n in 1usize..32) {
        let mut tokens = Vec::new();
        for i in 0..n {
            tokens.push(constant(i, i as f64));
        }
        tokens.push(terminal(n));
        let tokens = stream(tokens);
        let config = AnalysisConfig::default();
        let mut manager = AnalysisManager::new(&tokens, &config);
        let cfg = manager.run::<BlockAnalysisPass>().unwrap();

        for index in 0..tokens.len() {
            prop_assert!(cfg.block_containing(index).is_some());
        }

        for block in &cfg.cfg_blocks {
            for &succ in &block.successors {
                prop_assert!(cfg.get(succ).predecessors.contains(&block.id));
            }
        }
    }
}
