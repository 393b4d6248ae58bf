//! # Intel 8080 Disassembler Core
//!
//! Decodes raw 8080 program images into an assembly listing, one line per
//! instruction, with the byte offset, mnemonic and operands in hexadecimal.
//!
//! ## Quick Start
//!
//! ```rust
//! use lib8080::disassembler::formatter::format_line;
//! use lib8080::{Disassembler, DisassemblyOptions};
//!
//! let program = [0x00, 0x3E, 0x05, 0x76]; // NOP; MVI A,05; HLT
//! let options = DisassemblyOptions::default();
//!
//! let lines: Vec<String> = Disassembler::new(&program)
//!     .map(|instr| instr.map(|instr| format_line(&instr, &options)))
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! assert_eq!(lines, ["0000: NOP", "0001: MVI\tA,05", "0003: HLT"]);
//! ```
//!
//! ## Architecture
//!
//! - **Table-Driven Design**: All opcode metadata lives in a single 256-entry table
//! - **Incremental Decoding**: The walker yields each instruction as soon as it is
//!   decoded and stops on the first truncated instruction
//! - **WebAssembly Portability**: The core has no OS dependencies
//!
//! ## Modules
//!
//! - `opcodes` - Opcode metadata table and `decode`
//! - `operand` - Operand format enumeration
//! - `disassembler` - Stream walker, decoder and formatter

pub mod disassembler;
pub mod opcodes;
pub mod operand;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use disassembler::{
    disassemble, write_listing, Disassembler, DisassemblyOptions, Instruction, ListingError,
};
pub use opcodes::{decode, OpcodeMetadata, OPCODE_TABLE};
pub use operand::OperandFormat;

/// Errors that can occur while walking a program image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisassemblyError {
    /// The instruction starting at `offset` needs more bytes than remain in the image.
    ///
    /// Instructions before `offset` were decoded successfully.
    Truncated {
        /// Byte offset of the opcode of the incomplete instruction.
        offset: usize,
        /// The opcode byte found at `offset`.
        opcode: u8,
        /// Total instruction size declared by the opcode.
        needed: u8,
        /// Bytes left in the image, counting the opcode.
        available: usize,
    },
}

impl DisassemblyError {
    /// Byte offset at which the failing instruction begins.
    pub fn offset(&self) -> usize {
        match self {
            DisassemblyError::Truncated { offset, .. } => *offset,
        }
    }
}

impl std::fmt::Display for DisassemblyError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            DisassemblyError::Truncated { offset, .. } => {
                write!(f, "malformed bytecode at byte 0x{:x}", offset)
            }
        }
    }
}

impl std::error::Error for DisassemblyError {}
