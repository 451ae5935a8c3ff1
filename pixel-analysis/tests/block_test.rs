mod support;

use pixel_core::{AnalysisConfig, Diagnostic, DiagnosticKind};
use pixel_analysis::block::BlockAnalysisPass;
use pixel_analysis::engine::{AnalysisManager, AnalysisPass};
use support::*;

#[test]
fn empty_stream_yields_empty_cfg() {
    let tokens = stream(vec![]);
    let config = AnalysisConfig::default();
    let mut manager = AnalysisManager::new(&tokens, &config);
    let cfg = manager.run::<BlockAnalysisPass>().unwrap();
    assert!(cfg.is_empty());
}

#[test]
fn straight_line_program_is_one_block() {
    let tokens = stream(vec![constant(0, 1.0), constant(1, 2.0), terminal(2)]);
    let config = AnalysisConfig::default();
    let mut manager = AnalysisManager::new(&tokens, &config);
    let cfg = manager.run::<BlockAnalysisPass>().unwrap();
    assert_eq!(cfg.len(), 1);
    assert!(cfg.get(cfg.cfg_blocks[0].id).is_terminal());
}

#[test]
fn jump_splits_into_two_blocks_with_matching_edges() {
    // 0: jump L   1: label L   2: terminal
    let tokens = stream(vec![jump(0, "L"), label(1, "L"), terminal(2)]);
    let config = AnalysisConfig::default();
    let mut manager = AnalysisManager::new(&tokens, &config);
    let cfg = manager.run::<BlockAnalysisPass>().unwrap();

    assert_eq!(cfg.len(), 2);
    let entry = &cfg.cfg_blocks[0];
    assert_eq!(entry.successors.to_vec(), vec![cfg.cfg_blocks[1].id]);
    assert_eq!(cfg.cfg_blocks[1].predecessors.to_vec(), vec![entry.id]);
}

#[test]
fn jump_to_undefined_label_fails() {
    let tokens = stream(vec![jump(0, "nope"), terminal(1)]);
    let config = AnalysisConfig::default();
    let mut manager = AnalysisManager::new(&tokens, &config);
    let err = manager.run::<BlockAnalysisPass>().unwrap_err();
    assert_eq!(
        err,
        Diagnostic::new(
            DiagnosticKind::UnresolvedLabel { label: "nope".to_string() },
            0,
        )
    );
}

#[test]
fn diamond_has_two_predecessors_at_the_join() {
    // 0: const            (entry)
    // 1: branch taken=L1  -> {L1, fallthrough}
    // 2: const            (arm taken via fallthrough)
    // 3: jump L2
    // 4: label L1         (other arm)
    // 5: const
    // 6: label L2         (join)
    // 7: terminal
    let tokens = stream(vec![
        constant(0, 1.0),
        branch(1, "L1"),
        constant(2, 2.0),
        jump(3, "L2"),
        label(4, "L1"),
        constant(5, 3.0),
        label(6, "L2"),
        terminal(7),
    ]);
    let config = AnalysisConfig::default();
    let mut manager = AnalysisManager::new(&tokens, &config);
    let cfg = manager.run::<BlockAnalysisPass>().unwrap();

    let join = cfg
        .cfg_blocks
        .iter()
        .find(|b| b.label.as_deref() == Some("L2"))
        .expect("join block with label L2 exists");
    assert_eq!(join.predecessors.len(), 2);
}
