//! Configuration Tests.
//!
//! Defaults, JSON parsing, and every validation rule.

use pretty_assertions::assert_eq;
use rvfetch_core::common::{ConfigError, Xlen};
use rvfetch_core::config::{Config, FetchVariant};

#[test]
fn defaults() {
    let config = Config::default();
    assert_eq!(config.general.start_pc, 0x8000_0000);
    assert_eq!(config.general.xlen, Xlen::Rv64);
    assert_eq!(config.fetch.variant, FetchVariant::Unaligned);
    assert_eq!(config.fetch.fetch_target_queue_depth, 2);
    assert_eq!(config.fetch.max_inflight, None);
    assert_eq!(config.fetch.inflight(), 2);
    assert!(config.validate().is_ok());
}

#[test]
fn inflight_defaults_per_variant() {
    let mut config = Config::default();
    config.fetch.variant = FetchVariant::Basic;
    assert_eq!(config.fetch.inflight(), 1);
    config.fetch.max_inflight = Some(2);
    assert_eq!(config.fetch.inflight(), 2);
}

#[test]
fn empty_document_uses_defaults() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config.general.start_pc, 0x8000_0000);
    assert_eq!(config.fetch.variant, FetchVariant::Unaligned);
}

#[test]
fn parses_full_document() {
    let json = r#"{
        "general": { "start_pc": 2, "xlen": "rv32" },
        "fetch": {
            "variant": "Unaligned",
            "fetch_target_queue_depth": 4,
            "max_inflight": 3
        }
    }"#;
    let config = Config::from_json(json).unwrap();
    assert_eq!(config.general.start_pc, 2);
    assert_eq!(config.general.xlen, Xlen::Rv32);
    assert_eq!(config.fetch.fetch_target_queue_depth, 4);
    assert_eq!(config.fetch.inflight(), 3);
}

#[test]
fn malformed_json_is_a_parse_error() {
    assert!(matches!(
        Config::from_json("{ \"fetch\": "),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        Config::from_json(r#"{ "fetch": { "variant": "Superscalar" } }"#),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn rejects_start_pc_beyond_address_width() {
    let json = r#"{ "general": { "start_pc": 4294967296, "xlen": "Rv32" } }"#;
    assert!(matches!(
        Config::from_json(json),
        Err(ConfigError::StartPcOutOfRange {
            pc: 0x1_0000_0000,
            bits: 32,
        })
    ));
}

#[test]
fn rejects_misaligned_start_pc() {
    let json = r#"{ "general": { "start_pc": 4098 }, "fetch": { "variant": "Basic" } }"#;
    assert!(matches!(
        Config::from_json(json),
        Err(ConfigError::MisalignedStartPc {
            pc: 0x1002,
            alignment: 4,
        })
    ));

    let json = r#"{ "general": { "start_pc": 4097 } }"#;
    assert!(matches!(
        Config::from_json(json),
        Err(ConfigError::MisalignedStartPc { alignment: 2, .. })
    ));
}

#[test]
fn rejects_zero_capacities() {
    let mut config = Config::default();
    config.fetch.fetch_target_queue_depth = 0;
    assert!(matches!(config.validate(), Err(ConfigError::ZeroQueueDepth)));

    let mut config = Config::default();
    config.fetch.max_inflight = Some(0);
    assert!(matches!(config.validate(), Err(ConfigError::ZeroInflight)));
}

#[test]
fn basic_inflight_bounded_by_queue_depth() {
    let mut config = Config::default();
    config.fetch.variant = FetchVariant::Basic;
    config.fetch.max_inflight = Some(3);
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InflightExceedsQueue {
            inflight: 3,
            depth: 2,
        })
    ));

    // the unaligned fetcher has no queue to overflow
    config.fetch.variant = FetchVariant::Unaligned;
    assert!(config.validate().is_ok());
}
