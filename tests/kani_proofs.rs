//! Kani formal verification proofs for the 8080 decoder.
//!
//! To run these proofs, install Kani and run:
//! ```
//! cargo kani --tests
//! ```
//!
//! Note: Kani proofs are conditional on the `kani` cfg.
//! They will be ignored when running regular tests.

// Allow the `kani` cfg which is set by the Kani verifier
#![allow(unexpected_cfgs)]

#[cfg(kani)]
mod kani_proofs {
    use lib8080::{decode, Disassembler, DisassemblyError};

    /// Proof: every opcode has a size in 1..=3 that matches its operand format
    #[kani::proof]
    fn proof_decode_total() {
        let opcode: u8 = kani::any();
        let metadata = decode(opcode);

        kani::assert(
            metadata.size_bytes >= 1 && metadata.size_bytes <= 3,
            "Instruction size must be 1-3 bytes",
        );
        kani::assert(
            metadata.size_bytes == metadata.format.instruction_len(),
            "Size must match operand format",
        );
        kani::assert(
            !metadata.reserved || metadata.size_bytes == 1,
            "Reserved opcodes must be single-byte",
        );
    }

    /// Proof: decoding a three-byte window never reads out of bounds
    #[kani::proof]
    #[kani::unwind(4)]
    fn proof_walker_stays_in_bounds() {
        let bytes: [u8; 3] = kani::any();
        let len: usize = kani::any();
        kani::assume(len <= 3);
        let image = &bytes[..len];

        let mut consumed = 0;
        for result in Disassembler::new(image) {
            match result {
                Ok(instr) => {
                    kani::assert(instr.offset == consumed, "Offsets must be contiguous");
                    consumed += instr.size_bytes() as usize;
                    kani::assert(consumed <= len, "Instruction must fit in the image");
                }
                Err(DisassemblyError::Truncated { offset, .. }) => {
                    kani::assert(offset == consumed, "Truncation reported at cursor");
                }
            }
        }
    }
}
