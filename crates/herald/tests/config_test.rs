//! Loading engine configuration from TOML files.

use herald::{FlowMode, HeraldConfig};
use std::fs;

#[test]
fn empty_file_yields_reference_defaults() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("herald.toml");
    fs::write(&path, "").unwrap();

    let config = HeraldConfig::from_file(&path).unwrap();
    assert_eq!(*config.flow_mode(), FlowMode::Single);
    assert_eq!(*config.scheduling().optimal_offset_hours(), 26);
    assert_eq!(config.scheduling().slots().len(), 4);
    assert_eq!(*config.suggestion_delay_ms(), 2000);
}

#[test]
fn file_overrides_flow_and_scheduling_constants() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("herald.toml");
    fs::write(
        &path,
        r#"
flow_mode = "multi"
suggestion_delay_ms = 0

[scheduling]
optimal_offset_hours = 48

[[scheduling.slots]]
time = "07:00:00"
label = "morning commute"

[[scheduling.slots]]
time = "21:15:00"
label = "late scrolling"
"#,
    )
    .unwrap();

    let config = HeraldConfig::from_file(&path).unwrap();
    assert_eq!(*config.flow_mode(), FlowMode::Multi);
    assert_eq!(*config.scheduling().optimal_offset_hours(), 48);
    assert!(config.suggestion_delay().is_zero());

    let labels: Vec<&str> = config
        .scheduling()
        .slots()
        .iter()
        .map(|slot| slot.label().as_str())
        .collect();
    assert_eq!(labels, vec!["morning commute", "late scrolling"]);
}

#[test]
fn partial_scheduling_section_keeps_default_slots() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("herald.toml");
    fs::write(&path, "[scheduling]\noptimal_offset_hours = 12\n").unwrap();

    let config = HeraldConfig::from_file(&path).unwrap();
    assert_eq!(*config.scheduling().optimal_offset_hours(), 12);
    assert_eq!(config.scheduling().slots().len(), 4);
}

#[test]
fn missing_file_reports_a_read_error() {
    let temp_dir = tempfile::tempdir().unwrap();
    let err = HeraldConfig::from_file(temp_dir.path().join("missing.toml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn malformed_file_reports_a_parse_error() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("herald.toml");
    fs::write(&path, "flow_mode = \"carrier-pigeon\"").unwrap();

    let err = HeraldConfig::from_file(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config"));
}
