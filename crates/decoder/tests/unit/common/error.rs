//! Illegal Instruction Error Tests.

use pretty_assertions::assert_eq;
use rstest::rstest;
use rvdecode_core::isa::opcode::OpcodeClass;
use rvdecode_core::{IllegalInstruction, IllegalReason, Xlen, decode};

#[test]
fn new_extracts_diagnostic_fields() {
    let err = IllegalInstruction::new(0xFE00_7033, OpcodeClass::Op, IllegalReason::NoMatch);
    assert_eq!(err.raw, 0xFE00_7033);
    assert_eq!(err.funct3, 0b111);
    assert_eq!(err.funct7, 0b111_1111);
    assert_eq!(err.class, OpcodeClass::Op);
}

#[test]
fn display_names_the_word_and_cause() {
    let err = decode(0xFE00_7033, Xlen::Rv32).unwrap_err();
    assert_eq!(
        err.to_string(),
        "illegal instruction 0xfe007033 (no matching operation): class=OP, funct3=0b111, funct7=0b1111111"
    );
}

#[rstest]
#[case(IllegalReason::NotThirtyTwoBit, "not a 32-bit encoding")]
#[case(IllegalReason::UnsupportedClass, "unsupported opcode class")]
#[case(IllegalReason::NoMatch, "no matching operation")]
#[case(IllegalReason::Rv64Only, "RV64-only operation on an RV32 core")]
#[case(IllegalReason::ReservedBits, "reserved bits set")]
fn reasons_describe_themselves(#[case] reason: IllegalReason, #[case] text: &str) {
    assert_eq!(reason.describe(), text);
}

#[test]
fn serializes_for_structured_output() {
    let err = IllegalInstruction::new(0x0000_0000, OpcodeClass::Unknown, IllegalReason::NotThirtyTwoBit);
    let json = serde_json::to_value(err).unwrap();
    assert_eq!(json["class"], "UNKNOWN");
    assert_eq!(json["reason"], "not_thirty_two_bit");
    assert_eq!(json["raw"], 0);
}

#[test]
fn is_a_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(IllegalInstruction::new(
        0x7F,
        OpcodeClass::InstVliw,
        IllegalReason::UnsupportedClass,
    ));
    assert!(err.to_string().contains("class=INST_VLIW"));
}
