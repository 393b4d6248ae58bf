//! Whole-table checks for the 8080 opcode metadata

use lib8080::{decode, OperandFormat, OPCODE_TABLE};

#[test]
fn test_every_opcode_decodes() {
    for opcode in 0..=255u8 {
        let metadata = decode(opcode);
        assert!(!metadata.mnemonic.is_empty(), "opcode 0x{:02X}", opcode);
        assert!(
            (1..=3).contains(&metadata.size_bytes),
            "opcode 0x{:02X} has size {}",
            opcode,
            metadata.size_bytes
        );
    }
}

#[test]
fn test_decode_is_deterministic() {
    for opcode in 0..=255u8 {
        assert_eq!(decode(opcode), decode(opcode));
        assert_eq!(decode(opcode), &OPCODE_TABLE[opcode as usize]);
    }
}

#[test]
fn test_size_distribution() {
    let count = |format| OPCODE_TABLE.iter().filter(|m| m.format == format).count();

    assert_eq!(count(OperandFormat::None), 212);
    assert_eq!(count(OperandFormat::Byte), 18);
    assert_eq!(count(OperandFormat::Address), 26);
}

#[test]
fn test_three_byte_instructions() {
    let mut mnemonics: Vec<&str> = OPCODE_TABLE
        .iter()
        .filter(|m| m.size_bytes == 3)
        .map(|m| m.mnemonic)
        .collect();
    mnemonics.sort_unstable();
    mnemonics.dedup();

    assert_eq!(
        mnemonics,
        vec![
            "CALL", "CC", "CM", "CNC", "CNZ", "CP", "CPE", "CPO", "CZ", "JC", "JM", "JMP", "JNC",
            "JNZ", "JP", "JPE", "JPO", "JZ", "LDA", "LHLD", "LXI", "SHLD", "STA",
        ]
    );
}

#[test]
fn test_two_byte_instructions() {
    let mut mnemonics: Vec<&str> = OPCODE_TABLE
        .iter()
        .filter(|m| m.size_bytes == 2)
        .map(|m| m.mnemonic)
        .collect();
    mnemonics.sort_unstable();
    mnemonics.dedup();

    assert_eq!(
        mnemonics,
        vec!["ACI", "ADI", "ANI", "CPI", "IN", "MVI", "ORI", "OUT", "SBI", "SUI", "XRI"]
    );
}
