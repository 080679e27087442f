//! # Configuration Tests
//!
//! Defaults, JSON deserialization and validation of the simulator config.

use std::io::Write;

use ls8_core::common::ConfigError;
use ls8_core::config::Config;

#[test]
fn test_defaults_describe_the_standard_machine() {
    let config = Config::default();
    assert_eq!(config.machine.memory_size, 256);
    assert_eq!(config.machine.stack_pointer, 0xF4);
    assert!(!config.machine.console_to_stderr);
    assert!(!config.general.trace_instructions);
    assert!(!config.general.print_stats);
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_json_yields_defaults() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config.machine.memory_size, 256);
    assert_eq!(config.machine.stack_pointer, 0xF4);
}

#[test]
fn test_partial_json_overrides_only_named_fields() {
    let config = Config::from_json(
        r#"{ "general": { "print_stats": true }, "machine": { "stack_pointer": 128 } }"#,
    )
    .unwrap();
    assert!(config.general.print_stats);
    assert!(!config.general.trace_instructions);
    assert_eq!(config.machine.stack_pointer, 128);
    assert_eq!(config.machine.memory_size, 256);
}

#[test]
fn test_malformed_json_is_a_parse_error() {
    let err = Config::from_json("{ general: ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_zero_memory_is_rejected() {
    let err = Config::from_json(r#"{ "machine": { "memory_size": 0 } }"#).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Invalid {
            field: "machine.memory_size",
            ..
        }
    ));
}

#[test]
fn test_memory_beyond_byte_addressing_is_rejected() {
    let err = Config::from_json(r#"{ "machine": { "memory_size": 257 } }"#).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Invalid {
            field: "machine.memory_size",
            ..
        }
    ));
}

#[test]
fn test_stack_pointer_above_memory_is_rejected() {
    let err = Config::from_json(r#"{ "machine": { "memory_size": 64, "stack_pointer": 100 } }"#)
        .unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Invalid {
            field: "machine.stack_pointer",
            ..
        }
    ));
}

#[test]
fn test_from_file_reads_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"{ "general": { "trace_instructions": true } }"#)
        .unwrap();
    let config = Config::from_file(file.path()).unwrap();
    assert!(config.general.trace_instructions);
}

#[test]
fn test_from_file_missing_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
