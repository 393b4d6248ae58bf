//! Property-based tests for the stream walker.
//!
//! These tests verify that:
//! - offsets advance by exactly the declared instruction size
//! - operand byte counts match the opcode table
//! - a pass either consumes the whole image or stops at one truncated instruction

use lib8080::{decode, disassemble, Disassembler, OPCODE_TABLE};
use proptest::prelude::*;

/// Generate a complete instruction for `opcode` with the given operand filler
fn generate_instruction_bytes(opcode: u8, fill: u8) -> Vec<u8> {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let mut bytes = vec![opcode];
    bytes.resize(metadata.size_bytes as usize, fill);
    bytes
}

proptest! {
    /// Property: every opcode decodes to a well-formed descriptor
    #[test]
    fn prop_decode_is_total(opcode in any::<u8>()) {
        let metadata = decode(opcode);
        prop_assert!(!metadata.mnemonic.is_empty());
        prop_assert!((1..=3).contains(&metadata.size_bytes));
        prop_assert_eq!(metadata.size_bytes, metadata.format.instruction_len());
    }

    /// Property: a single complete instruction yields exactly one record
    #[test]
    fn prop_single_instruction(opcode in any::<u8>(), fill in any::<u8>()) {
        let bytes = generate_instruction_bytes(opcode, fill);
        let instructions = disassemble(&bytes).unwrap();

        prop_assert_eq!(instructions.len(), 1);
        let instr = &instructions[0];
        prop_assert_eq!(instr.opcode, opcode);
        prop_assert_eq!(instr.operand_bytes.len() + 1, instr.size_bytes() as usize);
        prop_assert_eq!(instr.bytes(), bytes);
    }

    /// Property: dropping the last byte of a multi-byte instruction truncates at its opcode
    #[test]
    fn prop_truncated_instruction(prefix in prop::collection::vec(Just(0x00u8), 0..16), opcode in any::<u8>()) {
        let size = decode(opcode).size_bytes as usize;
        prop_assume!(size > 1);

        let mut bytes = prefix.clone();
        bytes.extend(generate_instruction_bytes(opcode, 0xAA));
        bytes.pop();

        let results: Vec<_> = Disassembler::new(&bytes).collect();
        prop_assert_eq!(results.len(), prefix.len() + 1);
        prop_assert!(results[..prefix.len()].iter().all(Result::is_ok));
        let err = results.last().unwrap().as_ref().unwrap_err();
        prop_assert_eq!(err.offset(), prefix.len());
    }

    /// Property: records tile the image, or stop at a single error
    #[test]
    fn prop_walker_tiles_image(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
        let mut expected_offset = 0;
        let mut failed = false;

        for result in Disassembler::new(&bytes) {
            prop_assert!(!failed, "walker yielded after an error");
            match result {
                Ok(instr) => {
                    prop_assert_eq!(instr.offset, expected_offset);
                    prop_assert_eq!(instr.operand_bytes.len(), instr.size_bytes() as usize - 1);
                    expected_offset += instr.size_bytes() as usize;
                }
                Err(err) => {
                    prop_assert_eq!(err.offset(), expected_offset);
                    prop_assert!(expected_offset + decode(bytes[expected_offset]).size_bytes as usize > bytes.len());
                    failed = true;
                }
            }
        }

        if !failed {
            prop_assert_eq!(expected_offset, bytes.len());
        }
    }

    /// Property: reset replays the same pass
    #[test]
    fn prop_reset_replays(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let mut walker = Disassembler::new(&bytes);
        let first: Vec<_> = walker.by_ref().collect();
        walker.reset();
        let second: Vec<_> = walker.collect();
        prop_assert_eq!(first, second);
    }
}
