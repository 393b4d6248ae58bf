//! Fuzz target for the disassembler.
//!
//! This target feeds arbitrary byte sequences to the stream walker
//! to find edge cases and crashes in instruction decoding.

#![no_main]

use arbitrary::Arbitrary;
use lib8080::disassembler::formatter::format_line;
use lib8080::{decode, Disassembler, DisassemblyOptions};
use libfuzzer_sys::fuzz_target;

/// Disassembly options for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzOptions {
    origin: u16,
    hex_dump: bool,
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    bytes: Vec<u8>,
    options: FuzzOptions,
}

fuzz_target!(|input: FuzzInput| {
    // Limit input size to prevent OOM
    if input.bytes.len() > 65536 {
        return;
    }

    let options = DisassemblyOptions {
        origin: input.options.origin,
        hex_dump: input.options.hex_dump,
    };

    let mut consumed: usize = 0;
    let mut failed = false;

    for result in Disassembler::new(&input.bytes) {
        assert!(!failed, "walker yielded after an error");

        match result {
            Ok(instr) => {
                // Each instruction starts where the previous one ended
                assert_eq!(instr.offset, consumed);

                // Size should be 1-3 bytes with matching operands
                assert!(instr.size_bytes() >= 1 && instr.size_bytes() <= 3);
                assert_eq!(instr.operand_bytes.len() + 1, instr.size_bytes() as usize);

                let line = format_line(&instr, &options);
                assert!(line.contains(instr.mnemonic()));

                consumed += instr.size_bytes() as usize;
            }
            Err(err) => {
                // Only the final instruction may be truncated
                assert_eq!(err.offset(), consumed);
                let size = decode(input.bytes[consumed]).size_bytes as usize;
                assert!(consumed + size > input.bytes.len());
                failed = true;
            }
        }
    }

    if !failed {
        assert_eq!(consumed, input.bytes.len());
    }
});
