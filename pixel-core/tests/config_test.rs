use std::io::Write;

use pixel_core::AnalysisConfig;

#[test]
fn defaults_are_permissive() {
    let config = AnalysisConfig::default();
    assert_eq!(config.terminal_stack_depth, None);
    assert_eq!(config.effective_cancellation_check_interval(), 256);
}

#[test]
fn from_toml_str_overrides_only_the_fields_present() {
    let config = AnalysisConfig::from_toml_str("terminal_stack_depth = 1\n").unwrap();
    assert_eq!(config.terminal_stack_depth, Some(1));
    assert_eq!(config.effective_cancellation_check_interval(), 256);
}

#[test]
fn cancellation_interval_is_clamped_to_at_least_one() {
    let config = AnalysisConfig::from_toml_str("cancellation_check_interval = 0\n").unwrap();
    assert_eq!(config.effective_cancellation_check_interval(), 1);
}

#[test]
fn from_toml_str_rejects_malformed_documents() {
    assert!(AnalysisConfig::from_toml_str("terminal_stack_depth = \"not a number\"").is_err());
}

#[test]
fn config_loads_from_a_file_on_disk() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp config file");
    writeln!(file, "terminal_stack_depth = 2").unwrap();
    writeln!(file, "cancellation_check_interval = 64").unwrap();
    file.flush().unwrap();

    let contents = std::fs::read_to_string(file.path()).unwrap();
    let config = AnalysisConfig::from_toml_str(&contents).unwrap();

    assert_eq!(config.terminal_stack_depth, Some(2));
    assert_eq!(config.effective_cancellation_check_interval(), 64);
}
