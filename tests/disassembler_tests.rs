//! Integration tests for the 8080 disassembler

use lib8080::disassembler::formatter::{format_instruction, format_line};
use lib8080::{disassemble, Disassembler, DisassemblyError, DisassemblyOptions, OperandFormat};

#[test]
fn test_known_sequence() {
    let bytes = &[0x00, 0x3E, 0x05, 0x76]; // NOP; MVI A,05; HLT

    let mut walker = Disassembler::new(bytes);
    let instructions: Vec<_> = walker.by_ref().map(Result::unwrap).collect();

    assert_eq!(instructions.len(), 3);

    assert_eq!(instructions[0].offset, 0x0000);
    assert_eq!(instructions[0].mnemonic(), "NOP");
    assert_eq!(instructions[0].size_bytes(), 1);
    assert!(instructions[0].operand_bytes.is_empty());

    assert_eq!(instructions[1].offset, 0x0001);
    assert_eq!(instructions[1].mnemonic(), "MVI");
    assert_eq!(instructions[1].size_bytes(), 2);
    assert_eq!(instructions[1].operand_bytes, &[0x05]);
    assert_eq!(format_instruction(&instructions[1]), "MVI\tA,05");

    assert_eq!(instructions[2].offset, 0x0003);
    assert_eq!(instructions[2].mnemonic(), "HLT");
    assert_eq!(instructions[2].size_bytes(), 1);

    assert_eq!(walker.position(), bytes.len());
}

#[test]
fn test_empty_buffer() {
    let mut walker = Disassembler::new(&[]);
    assert!(walker.next().is_none());
    assert_eq!(disassemble(&[]).unwrap().len(), 0);
}

#[test]
fn test_truncated_single_byte() {
    let mut walker = Disassembler::new(&[0x01]); // LXI B needs two more bytes

    let err = walker.next().unwrap().unwrap_err();
    assert_eq!(
        err,
        DisassemblyError::Truncated {
            offset: 0,
            opcode: 0x01,
            needed: 3,
            available: 1,
        }
    );
    assert_eq!(err.to_string(), "malformed bytecode at byte 0x0");
    assert!(walker.next().is_none());
}

#[test]
fn test_truncation_reports_earlier_instructions_first() {
    let bytes = &[0x00, 0x3E, 0x05, 0xC3, 0x00];
    let results: Vec<_> = Disassembler::new(bytes).collect();

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().mnemonic(), "NOP");
    assert_eq!(results[1].as_ref().unwrap().mnemonic(), "MVI");
    assert_eq!(results[2].as_ref().unwrap_err().offset(), 3);

    assert_eq!(disassemble(bytes).unwrap_err().offset(), 3);
}

#[test]
fn test_reserved_opcode_is_single_byte_nop() {
    let instructions = disassemble(&[0x08, 0x76]).unwrap();

    assert_eq!(instructions.len(), 2);
    assert_eq!(instructions[0].mnemonic(), "NOP");
    assert_eq!(instructions[0].size_bytes(), 1);
    assert!(instructions[0].metadata.reserved);
    assert_eq!(instructions[1].offset, 1);
}

#[test]
fn test_operand_ending_on_final_byte() {
    let bytes = &[0x31, 0x00, 0x24, 0xCD, 0x05, 0x00];
    let instructions = disassemble(bytes).unwrap();

    assert_eq!(instructions.len(), 2);
    assert_eq!(format_instruction(&instructions[0]), "LXI\tSP,2400");
    assert_eq!(format_instruction(&instructions[1]), "CALL\t0005");
    assert_eq!(instructions[1].metadata.format, OperandFormat::Address);
}

#[test]
fn test_listing_lines() {
    let bytes = &[
        0x21, 0x00, 0x20, // LXI H,2000
        0x7E, //             MOV A,M
        0xFE, 0x0D, //       CPI 0d
        0xCA, 0x0C, 0x00, // JZ 000c
        0xD3, 0x01, //       OUT 01
        0xC9, //             RET
        0x76, //             HLT
    ];

    let options = DisassemblyOptions::default();
    let lines: Vec<String> = disassemble(bytes)
        .unwrap()
        .iter()
        .map(|instr| format_line(instr, &options))
        .collect();

    assert_eq!(
        lines,
        vec![
            "0000: LXI\tH,2000",
            "0003: MOV\tA,M",
            "0004: CPI\t0d",
            "0006: JZ\t000c",
            "0009: OUT\t01",
            "000b: RET",
            "000c: HLT",
        ]
    );
}

#[test]
fn test_8085_opcodes_are_literal() {
    let instructions = disassemble(&[0x20, 0x30]).unwrap();
    assert_eq!(instructions[0].mnemonic(), "RIM");
    assert_eq!(instructions[1].mnemonic(), "SIM");
    assert_eq!(instructions[1].offset, 1);
}
