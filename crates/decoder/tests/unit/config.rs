//! Configuration Tests.

use pretty_assertions::assert_eq;
use rstest::rstest;
use rvdecode_core::config::{Config, Xlen};

#[test]
fn defaults_to_rv32_without_tracing() {
    let config = Config::default();
    assert_eq!(config.decoder.xlen, Xlen::Rv32);
    assert!(!config.general.trace_decode);
}

#[test]
fn empty_document_uses_defaults() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config.decoder.xlen, Xlen::Rv32);
    assert!(!config.general.trace_decode);
}

#[rstest]
#[case(r#""rv32""#, Xlen::Rv32)]
#[case(r#""RV64""#, Xlen::Rv64)]
#[case(r#""64""#, Xlen::Rv64)]
fn xlen_spellings(#[case] value: &str, #[case] expected: Xlen) {
    let json = format!(r#"{{ "decoder": {{ "xlen": {value} }} }}"#);
    assert_eq!(Config::from_json(&json).unwrap().decoder.xlen, expected);
}

#[test]
fn general_section() {
    let config = Config::from_json(r#"{ "general": { "trace_decode": true } }"#).unwrap();
    assert!(config.general.trace_decode);
    assert_eq!(config.decoder.xlen, Xlen::Rv32);
}

#[rstest]
#[case(r#"{ "decoder": { "xlen": "rv128" } }"#)]
#[case(r#"{ "general": { "trace_decode": "yes" } }"#)]
#[case("not json")]
fn rejects_malformed_documents(#[case] json: &str) {
    assert!(Config::from_json(json).is_err());
}

#[test]
fn xlen_helpers() {
    assert_eq!(Xlen::Rv32.bits(), 32);
    assert_eq!(Xlen::Rv64.mask(), u64::MAX);
    assert_eq!(Xlen::Rv32.mask(), 0xFFFF_FFFF);
    assert_eq!(Xlen::Rv32.shamt_bits(), 5);
    assert_eq!(Xlen::Rv64.shamt_bits(), 6);
    assert_eq!(Xlen::from_bits(64), Some(Xlen::Rv64));
    assert_eq!(Xlen::from_bits(128), None);
    assert_eq!(Xlen::Rv64.to_string(), "RV64");
}
