//! # Opcode Metadata Table
//!
//! This module contains the complete 256-entry opcode metadata table that serves as the
//! single source of truth for all Intel 8080 instruction information.
//!
//! The table covers:
//! - **244 documented instructions** - Official 8080 opcodes
//! - **10 reserved opcodes** - Unassigned slots that the 8080 executes as a
//!   one-byte `NOP`, decoded here as `NOP` with `reserved: true`
//! - **2 8085 opcodes** - `RIM` (0x20) and `SIM` (0x30), kept as literal
//!   one-byte entries
//!
//! Every entry is written out explicitly in opcode order. There is no fallback
//! entry, so the table can be checked against a reference card line by line.

use crate::operand::OperandFormat;

/// Metadata for a single 8080 opcode.
///
/// # Fields
///
/// - `mnemonic`: Instruction name (e.g., "MOV", "LXI", "RST")
/// - `registers`: Operand text fixed by the opcode (e.g., "B,C" for `MOV B,C`)
/// - `format`: Shape of the operand bytes that follow the opcode
/// - `size_bytes`: Total instruction size including opcode and operands (1-3 bytes)
/// - `reserved`: Whether this slot has no assigned 8080 instruction
///
/// # Examples
///
/// ```
/// use lib8080::{OperandFormat, OPCODE_TABLE};
///
/// // Look up MVI A,d8 (opcode 0x3E)
/// let mvi_a = &OPCODE_TABLE[0x3E];
/// assert_eq!(mvi_a.mnemonic, "MVI");
/// assert_eq!(mvi_a.registers, "A");
/// assert_eq!(mvi_a.format, OperandFormat::Byte);
/// assert_eq!(mvi_a.size_bytes, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic (e.g., "MOV", "JMP", "NOP").
    pub mnemonic: &'static str,

    /// Register or vector operand encoded in the opcode itself.
    ///
    /// Empty when the instruction has no fixed operand (`JMP`, `NOP`, `ADI`).
    pub registers: &'static str,

    /// Shape of the operand bytes following the opcode.
    pub format: OperandFormat,

    /// Total instruction size in bytes (opcode + operands).
    ///
    /// - 1 byte: register, stack and control instructions
    /// - 2 bytes: 8-bit immediates and I/O ports
    /// - 3 bytes: 16-bit addresses and immediates
    pub size_bytes: u8,

    /// Whether this opcode is an unassigned 8080 slot.
    ///
    /// Reserved slots always decode as a one-byte `NOP`.
    pub reserved: bool,
}

/// Look up the metadata for an opcode byte.
///
/// Total over all 256 byte values and free of side effects.
///
/// ```
/// use lib8080::decode;
///
/// assert_eq!(decode(0x76).mnemonic, "HLT");
/// assert_eq!(decode(0x08).mnemonic, "NOP");
/// assert!(decode(0x08).reserved);
/// ```
#[inline]
pub fn decode(opcode: u8) -> &'static OpcodeMetadata {
    &OPCODE_TABLE[opcode as usize]
}

/// Complete 256-entry opcode metadata table indexed by opcode byte value.
///
/// # Organization
///
/// - Rows 0x00-0x3F: register pair loads, increments, rotates and immediates
/// - Rows 0x40-0x7F: `MOV` between registers, with `HLT` in place of `MOV M,M`
/// - Rows 0x80-0xBF: accumulator arithmetic and logic against a register
/// - Rows 0xC0-0xFF: conditional returns, jumps and calls, stack, I/O and `RST`
///
/// # Data Source
///
/// Intel 8080 Assembly Language Programming Manual opcode summary. Reserved
/// slots follow the behavior of the NMOS part, which treats them as `NOP`.
pub static OPCODE_TABLE: [OpcodeMetadata; 256] = [
    // 0x00
    OpcodeMetadata {
        mnemonic: "NOP",
        registers: "",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x01
    OpcodeMetadata {
        mnemonic: "LXI",
        registers: "B",
        format: OperandFormat::Address,
        size_bytes: 3,
        reserved: false,
    },
    // 0x02
    OpcodeMetadata {
        mnemonic: "STAX",
        registers: "B",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x03
    OpcodeMetadata {
        mnemonic: "INX",
        registers: "B",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x04
    OpcodeMetadata {
        mnemonic: "INR",
        registers: "B",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x05
    OpcodeMetadata {
        mnemonic: "DCR",
        registers: "B",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x06
    OpcodeMetadata {
        mnemonic: "MVI",
        registers: "B",
        format: OperandFormat::Byte,
        size_bytes: 2,
        reserved: false,
    },
    // 0x07
    OpcodeMetadata {
        mnemonic: "RLC",
        registers: "",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x08 - Reserved, executes as NOP
    OpcodeMetadata {
        mnemonic: "NOP",
        registers: "",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: true,
    },
    // 0x09
    OpcodeMetadata {
        mnemonic: "DAD",
        registers: "B",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x0A
    OpcodeMetadata {
        mnemonic: "LDAX",
        registers: "B",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x0B
    OpcodeMetadata {
        mnemonic: "DCX",
        registers: "B",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x0C
    OpcodeMetadata {
        mnemonic: "INR",
        registers: "C",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x0D
    OpcodeMetadata {
        mnemonic: "DCR",
        registers: "C",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x0E
    OpcodeMetadata {
        mnemonic: "MVI",
        registers: "C",
        format: OperandFormat::Byte,
        size_bytes: 2,
        reserved: false,
    },
    // 0x0F
    OpcodeMetadata {
        mnemonic: "RRC",
        registers: "",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x10 - Reserved, executes as NOP
    OpcodeMetadata {
        mnemonic: "NOP",
        registers: "",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: true,
    },
    // 0x11
    OpcodeMetadata {
        mnemonic: "LXI",
        registers: "D",
        format: OperandFormat::Address,
        size_bytes: 3,
        reserved: false,
    },
    // 0x12
    OpcodeMetadata {
        mnemonic: "STAX",
        registers: "D",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x13
    OpcodeMetadata {
        mnemonic: "INX",
        registers: "D",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x14
    OpcodeMetadata {
        mnemonic: "INR",
        registers: "D",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x15
    OpcodeMetadata {
        mnemonic: "DCR",
        registers: "D",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x16
    OpcodeMetadata {
        mnemonic: "MVI",
        registers: "D",
        format: OperandFormat::Byte,
        size_bytes: 2,
        reserved: false,
    },
    // 0x17
    OpcodeMetadata {
        mnemonic: "RAL",
        registers: "",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x18 - Reserved, executes as NOP
    OpcodeMetadata {
        mnemonic: "NOP",
        registers: "",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: true,
    },
    // 0x19
    OpcodeMetadata {
        mnemonic: "DAD",
        registers: "D",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x1A
    OpcodeMetadata {
        mnemonic: "LDAX",
        registers: "D",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x1B
    OpcodeMetadata {
        mnemonic: "DCX",
        registers: "D",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x1C
    OpcodeMetadata {
        mnemonic: "INR",
        registers: "E",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x1D
    OpcodeMetadata {
        mnemonic: "DCR",
        registers: "E",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x1E
    OpcodeMetadata {
        mnemonic: "MVI",
        registers: "E",
        format: OperandFormat::Byte,
        size_bytes: 2,
        reserved: false,
    },
    // 0x1F
    OpcodeMetadata {
        mnemonic: "RAR",
        registers: "",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x20 - RIM on the 8085, undefined on the 8080
    OpcodeMetadata {
        mnemonic: "RIM",
        registers: "",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x21
    OpcodeMetadata {
        mnemonic: "LXI",
        registers: "H",
        format: OperandFormat::Address,
        size_bytes: 3,
        reserved: false,
    },
    // 0x22
    OpcodeMetadata {
        mnemonic: "SHLD",
        registers: "",
        format: OperandFormat::Address,
        size_bytes: 3,
        reserved: false,
    },
    // 0x23
    OpcodeMetadata {
        mnemonic: "INX",
        registers: "H",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x24
    OpcodeMetadata {
        mnemonic: "INR",
        registers: "H",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x25
    OpcodeMetadata {
        mnemonic: "DCR",
        registers: "H",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x26
    OpcodeMetadata {
        mnemonic: "MVI",
        registers: "H",
        format: OperandFormat::Byte,
        size_bytes: 2,
        reserved: false,
    },
    // 0x27
    OpcodeMetadata {
        mnemonic: "DAA",
        registers: "",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x28 - Reserved, executes as NOP
    OpcodeMetadata {
        mnemonic: "NOP",
        registers: "",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: true,
    },
    // 0x29
    OpcodeMetadata {
        mnemonic: "DAD",
        registers: "H",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x2A
    OpcodeMetadata {
        mnemonic: "LHLD",
        registers: "",
        format: OperandFormat::Address,
        size_bytes: 3,
        reserved: false,
    },
    // 0x2B
    OpcodeMetadata {
        mnemonic: "DCX",
        registers: "H",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x2C
    OpcodeMetadata {
        mnemonic: "INR",
        registers: "L",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x2D
    OpcodeMetadata {
        mnemonic: "DCR",
        registers: "L",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x2E
    OpcodeMetadata {
        mnemonic: "MVI",
        registers: "L",
        format: OperandFormat::Byte,
        size_bytes: 2,
        reserved: false,
    },
    // 0x2F
    OpcodeMetadata {
        mnemonic: "CMA",
        registers: "",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x30 - SIM on the 8085, undefined on the 8080
    OpcodeMetadata {
        mnemonic: "SIM",
        registers: "",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x31
    OpcodeMetadata {
        mnemonic: "LXI",
        registers: "SP",
        format: OperandFormat::Address,
        size_bytes: 3,
        reserved: false,
    },
    // 0x32
    OpcodeMetadata {
        mnemonic: "STA",
        registers: "",
        format: OperandFormat::Address,
        size_bytes: 3,
        reserved: false,
    },
    // 0x33
    OpcodeMetadata {
        mnemonic: "INX",
        registers: "SP",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x34
    OpcodeMetadata {
        mnemonic: "INR",
        registers: "M",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x35
    OpcodeMetadata {
        mnemonic: "DCR",
        registers: "M",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x36
    OpcodeMetadata {
        mnemonic: "MVI",
        registers: "M",
        format: OperandFormat::Byte,
        size_bytes: 2,
        reserved: false,
    },
    // 0x37
    OpcodeMetadata {
        mnemonic: "STC",
        registers: "",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x38 - Reserved, executes as NOP
    OpcodeMetadata {
        mnemonic: "NOP",
        registers: "",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: true,
    },
    // 0x39
    OpcodeMetadata {
        mnemonic: "DAD",
        registers: "SP",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x3A
    OpcodeMetadata {
        mnemonic: "LDA",
        registers: "",
        format: OperandFormat::Address,
        size_bytes: 3,
        reserved: false,
    },
    // 0x3B
    OpcodeMetadata {
        mnemonic: "DCX",
        registers: "SP",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x3C
    OpcodeMetadata {
        mnemonic: "INR",
        registers: "A",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x3D
    OpcodeMetadata {
        mnemonic: "DCR",
        registers: "A",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x3E
    OpcodeMetadata {
        mnemonic: "MVI",
        registers: "A",
        format: OperandFormat::Byte,
        size_bytes: 2,
        reserved: false,
    },
    // 0x3F
    OpcodeMetadata {
        mnemonic: "CMC",
        registers: "",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x40
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "B,B",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x41
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "B,C",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x42
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "B,D",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x43
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "B,E",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x44
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "B,H",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x45
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "B,L",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x46
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "B,M",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x47
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "B,A",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x48
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "C,B",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x49
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "C,C",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x4A
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "C,D",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x4B
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "C,E",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x4C
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "C,H",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x4D
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "C,L",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x4E
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "C,M",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x4F
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "C,A",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x50
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "D,B",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x51
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "D,C",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x52
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "D,D",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x53
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "D,E",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x54
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "D,H",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x55
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "D,L",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x56
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "D,M",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x57
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "D,A",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x58
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "E,B",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x59
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "E,C",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x5A
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "E,D",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x5B
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "E,E",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x5C
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "E,H",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x5D
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "E,L",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x5E
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "E,M",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x5F
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "E,A",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x60
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "H,B",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x61
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "H,C",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x62
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "H,D",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x63
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "H,E",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x64
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "H,H",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x65
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "H,L",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x66
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "H,M",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x67
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "H,A",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x68
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "L,B",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x69
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "L,C",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x6A
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "L,D",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x6B
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "L,E",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x6C
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "L,H",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x6D
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "L,L",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x6E
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "L,M",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x6F
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "L,A",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x70
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "M,B",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x71
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "M,C",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x72
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "M,D",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x73
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "M,E",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x74
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "M,H",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x75
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "M,L",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x76
    OpcodeMetadata {
        mnemonic: "HLT",
        registers: "",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x77
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "M,A",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x78
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "A,B",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x79
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "A,C",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x7A
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "A,D",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x7B
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "A,E",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x7C
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "A,H",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x7D
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "A,L",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x7E
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "A,M",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x7F
    OpcodeMetadata {
        mnemonic: "MOV",
        registers: "A,A",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x80
    OpcodeMetadata {
        mnemonic: "ADD",
        registers: "B",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x81
    OpcodeMetadata {
        mnemonic: "ADD",
        registers: "C",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x82
    OpcodeMetadata {
        mnemonic: "ADD",
        registers: "D",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x83
    OpcodeMetadata {
        mnemonic: "ADD",
        registers: "E",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x84
    OpcodeMetadata {
        mnemonic: "ADD",
        registers: "H",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x85
    OpcodeMetadata {
        mnemonic: "ADD",
        registers: "L",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x86
    OpcodeMetadata {
        mnemonic: "ADD",
        registers: "M",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x87
    OpcodeMetadata {
        mnemonic: "ADD",
        registers: "A",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x88
    OpcodeMetadata {
        mnemonic: "ADC",
        registers: "B",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x89
    OpcodeMetadata {
        mnemonic: "ADC",
        registers: "C",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x8A
    OpcodeMetadata {
        mnemonic: "ADC",
        registers: "D",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x8B
    OpcodeMetadata {
        mnemonic: "ADC",
        registers: "E",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x8C
    OpcodeMetadata {
        mnemonic: "ADC",
        registers: "H",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x8D
    OpcodeMetadata {
        mnemonic: "ADC",
        registers: "L",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x8E
    OpcodeMetadata {
        mnemonic: "ADC",
        registers: "M",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x8F
    OpcodeMetadata {
        mnemonic: "ADC",
        registers: "A",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x90
    OpcodeMetadata {
        mnemonic: "SUB",
        registers: "B",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x91
    OpcodeMetadata {
        mnemonic: "SUB",
        registers: "C",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x92
    OpcodeMetadata {
        mnemonic: "SUB",
        registers: "D",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x93
    OpcodeMetadata {
        mnemonic: "SUB",
        registers: "E",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x94
    OpcodeMetadata {
        mnemonic: "SUB",
        registers: "H",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x95
    OpcodeMetadata {
        mnemonic: "SUB",
        registers: "L",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x96
    OpcodeMetadata {
        mnemonic: "SUB",
        registers: "M",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x97
    OpcodeMetadata {
        mnemonic: "SUB",
        registers: "A",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x98
    OpcodeMetadata {
        mnemonic: "SBB",
        registers: "B",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x99
    OpcodeMetadata {
        mnemonic: "SBB",
        registers: "C",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x9A
    OpcodeMetadata {
        mnemonic: "SBB",
        registers: "D",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x9B
    OpcodeMetadata {
        mnemonic: "SBB",
        registers: "E",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x9C
    OpcodeMetadata {
        mnemonic: "SBB",
        registers: "H",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x9D
    OpcodeMetadata {
        mnemonic: "SBB",
        registers: "L",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x9E
    OpcodeMetadata {
        mnemonic: "SBB",
        registers: "M",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0x9F
    OpcodeMetadata {
        mnemonic: "SBB",
        registers: "A",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xA0
    OpcodeMetadata {
        mnemonic: "ANA",
        registers: "B",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xA1
    OpcodeMetadata {
        mnemonic: "ANA",
        registers: "C",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xA2
    OpcodeMetadata {
        mnemonic: "ANA",
        registers: "D",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xA3
    OpcodeMetadata {
        mnemonic: "ANA",
        registers: "E",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xA4
    OpcodeMetadata {
        mnemonic: "ANA",
        registers: "H",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xA5
    OpcodeMetadata {
        mnemonic: "ANA",
        registers: "L",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xA6
    OpcodeMetadata {
        mnemonic: "ANA",
        registers: "M",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xA7
    OpcodeMetadata {
        mnemonic: "ANA",
        registers: "A",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xA8
    OpcodeMetadata {
        mnemonic: "XRA",
        registers: "B",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xA9
    OpcodeMetadata {
        mnemonic: "XRA",
        registers: "C",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xAA
    OpcodeMetadata {
        mnemonic: "XRA",
        registers: "D",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xAB
    OpcodeMetadata {
        mnemonic: "XRA",
        registers: "E",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xAC
    OpcodeMetadata {
        mnemonic: "XRA",
        registers: "H",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xAD
    OpcodeMetadata {
        mnemonic: "XRA",
        registers: "L",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xAE
    OpcodeMetadata {
        mnemonic: "XRA",
        registers: "M",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xAF
    OpcodeMetadata {
        mnemonic: "XRA",
        registers: "A",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xB0
    OpcodeMetadata {
        mnemonic: "ORA",
        registers: "B",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xB1
    OpcodeMetadata {
        mnemonic: "ORA",
        registers: "C",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xB2
    OpcodeMetadata {
        mnemonic: "ORA",
        registers: "D",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xB3
    OpcodeMetadata {
        mnemonic: "ORA",
        registers: "E",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xB4
    OpcodeMetadata {
        mnemonic: "ORA",
        registers: "H",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xB5
    OpcodeMetadata {
        mnemonic: "ORA",
        registers: "L",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xB6
    OpcodeMetadata {
        mnemonic: "ORA",
        registers: "M",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xB7
    OpcodeMetadata {
        mnemonic: "ORA",
        registers: "A",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xB8
    OpcodeMetadata {
        mnemonic: "CMP",
        registers: "B",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xB9
    OpcodeMetadata {
        mnemonic: "CMP",
        registers: "C",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xBA
    OpcodeMetadata {
        mnemonic: "CMP",
        registers: "D",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xBB
    OpcodeMetadata {
        mnemonic: "CMP",
        registers: "E",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xBC
    OpcodeMetadata {
        mnemonic: "CMP",
        registers: "H",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xBD
    OpcodeMetadata {
        mnemonic: "CMP",
        registers: "L",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xBE
    OpcodeMetadata {
        mnemonic: "CMP",
        registers: "M",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xBF
    OpcodeMetadata {
        mnemonic: "CMP",
        registers: "A",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xC0
    OpcodeMetadata {
        mnemonic: "RNZ",
        registers: "",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xC1
    OpcodeMetadata {
        mnemonic: "POP",
        registers: "B",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xC2
    OpcodeMetadata {
        mnemonic: "JNZ",
        registers: "",
        format: OperandFormat::Address,
        size_bytes: 3,
        reserved: false,
    },
    // 0xC3
    OpcodeMetadata {
        mnemonic: "JMP",
        registers: "",
        format: OperandFormat::Address,
        size_bytes: 3,
        reserved: false,
    },
    // 0xC4
    OpcodeMetadata {
        mnemonic: "CNZ",
        registers: "",
        format: OperandFormat::Address,
        size_bytes: 3,
        reserved: false,
    },
    // 0xC5
    OpcodeMetadata {
        mnemonic: "PUSH",
        registers: "B",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xC6
    OpcodeMetadata {
        mnemonic: "ADI",
        registers: "",
        format: OperandFormat::Byte,
        size_bytes: 2,
        reserved: false,
    },
    // 0xC7
    OpcodeMetadata {
        mnemonic: "RST",
        registers: "0",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xC8
    OpcodeMetadata {
        mnemonic: "RZ",
        registers: "",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xC9
    OpcodeMetadata {
        mnemonic: "RET",
        registers: "",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xCA
    OpcodeMetadata {
        mnemonic: "JZ",
        registers: "",
        format: OperandFormat::Address,
        size_bytes: 3,
        reserved: false,
    },
    // 0xCB - Reserved, executes as NOP
    OpcodeMetadata {
        mnemonic: "NOP",
        registers: "",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: true,
    },
    // 0xCC
    OpcodeMetadata {
        mnemonic: "CZ",
        registers: "",
        format: OperandFormat::Address,
        size_bytes: 3,
        reserved: false,
    },
    // 0xCD
    OpcodeMetadata {
        mnemonic: "CALL",
        registers: "",
        format: OperandFormat::Address,
        size_bytes: 3,
        reserved: false,
    },
    // 0xCE
    OpcodeMetadata {
        mnemonic: "ACI",
        registers: "",
        format: OperandFormat::Byte,
        size_bytes: 2,
        reserved: false,
    },
    // 0xCF
    OpcodeMetadata {
        mnemonic: "RST",
        registers: "1",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xD0
    OpcodeMetadata {
        mnemonic: "RNC",
        registers: "",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xD1
    OpcodeMetadata {
        mnemonic: "POP",
        registers: "D",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xD2
    OpcodeMetadata {
        mnemonic: "JNC",
        registers: "",
        format: OperandFormat::Address,
        size_bytes: 3,
        reserved: false,
    },
    // 0xD3
    OpcodeMetadata {
        mnemonic: "OUT",
        registers: "",
        format: OperandFormat::Byte,
        size_bytes: 2,
        reserved: false,
    },
    // 0xD4
    OpcodeMetadata {
        mnemonic: "CNC",
        registers: "",
        format: OperandFormat::Address,
        size_bytes: 3,
        reserved: false,
    },
    // 0xD5
    OpcodeMetadata {
        mnemonic: "PUSH",
        registers: "D",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xD6
    OpcodeMetadata {
        mnemonic: "SUI",
        registers: "",
        format: OperandFormat::Byte,
        size_bytes: 2,
        reserved: false,
    },
    // 0xD7
    OpcodeMetadata {
        mnemonic: "RST",
        registers: "2",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xD8
    OpcodeMetadata {
        mnemonic: "RC",
        registers: "",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xD9 - Reserved, executes as NOP
    OpcodeMetadata {
        mnemonic: "NOP",
        registers: "",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: true,
    },
    // 0xDA
    OpcodeMetadata {
        mnemonic: "JC",
        registers: "",
        format: OperandFormat::Address,
        size_bytes: 3,
        reserved: false,
    },
    // 0xDB
    OpcodeMetadata {
        mnemonic: "IN",
        registers: "",
        format: OperandFormat::Byte,
        size_bytes: 2,
        reserved: false,
    },
    // 0xDC
    OpcodeMetadata {
        mnemonic: "CC",
        registers: "",
        format: OperandFormat::Address,
        size_bytes: 3,
        reserved: false,
    },
    // 0xDD - Reserved, executes as NOP
    OpcodeMetadata {
        mnemonic: "NOP",
        registers: "",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: true,
    },
    // 0xDE
    OpcodeMetadata {
        mnemonic: "SBI",
        registers: "",
        format: OperandFormat::Byte,
        size_bytes: 2,
        reserved: false,
    },
    // 0xDF
    OpcodeMetadata {
        mnemonic: "RST",
        registers: "3",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xE0
    OpcodeMetadata {
        mnemonic: "RPO",
        registers: "",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xE1
    OpcodeMetadata {
        mnemonic: "POP",
        registers: "H",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xE2
    OpcodeMetadata {
        mnemonic: "JPO",
        registers: "",
        format: OperandFormat::Address,
        size_bytes: 3,
        reserved: false,
    },
    // 0xE3
    OpcodeMetadata {
        mnemonic: "XTHL",
        registers: "",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xE4
    OpcodeMetadata {
        mnemonic: "CPO",
        registers: "",
        format: OperandFormat::Address,
        size_bytes: 3,
        reserved: false,
    },
    // 0xE5
    OpcodeMetadata {
        mnemonic: "PUSH",
        registers: "H",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xE6
    OpcodeMetadata {
        mnemonic: "ANI",
        registers: "",
        format: OperandFormat::Byte,
        size_bytes: 2,
        reserved: false,
    },
    // 0xE7
    OpcodeMetadata {
        mnemonic: "RST",
        registers: "4",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xE8
    OpcodeMetadata {
        mnemonic: "RPE",
        registers: "",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xE9
    OpcodeMetadata {
        mnemonic: "PCHL",
        registers: "",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xEA
    OpcodeMetadata {
        mnemonic: "JPE",
        registers: "",
        format: OperandFormat::Address,
        size_bytes: 3,
        reserved: false,
    },
    // 0xEB
    OpcodeMetadata {
        mnemonic: "XCHG",
        registers: "",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xEC
    OpcodeMetadata {
        mnemonic: "CPE",
        registers: "",
        format: OperandFormat::Address,
        size_bytes: 3,
        reserved: false,
    },
    // 0xED - Reserved, executes as NOP
    OpcodeMetadata {
        mnemonic: "NOP",
        registers: "",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: true,
    },
    // 0xEE
    OpcodeMetadata {
        mnemonic: "XRI",
        registers: "",
        format: OperandFormat::Byte,
        size_bytes: 2,
        reserved: false,
    },
    // 0xEF
    OpcodeMetadata {
        mnemonic: "RST",
        registers: "5",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xF0
    OpcodeMetadata {
        mnemonic: "RP",
        registers: "",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xF1
    OpcodeMetadata {
        mnemonic: "POP",
        registers: "PSW",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xF2
    OpcodeMetadata {
        mnemonic: "JP",
        registers: "",
        format: OperandFormat::Address,
        size_bytes: 3,
        reserved: false,
    },
    // 0xF3
    OpcodeMetadata {
        mnemonic: "DI",
        registers: "",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xF4
    OpcodeMetadata {
        mnemonic: "CP",
        registers: "",
        format: OperandFormat::Address,
        size_bytes: 3,
        reserved: false,
    },
    // 0xF5
    OpcodeMetadata {
        mnemonic: "PUSH",
        registers: "PSW",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xF6
    OpcodeMetadata {
        mnemonic: "ORI",
        registers: "",
        format: OperandFormat::Byte,
        size_bytes: 2,
        reserved: false,
    },
    // 0xF7
    OpcodeMetadata {
        mnemonic: "RST",
        registers: "6",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xF8
    OpcodeMetadata {
        mnemonic: "RM",
        registers: "",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xF9
    OpcodeMetadata {
        mnemonic: "SPHL",
        registers: "",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xFA
    OpcodeMetadata {
        mnemonic: "JM",
        registers: "",
        format: OperandFormat::Address,
        size_bytes: 3,
        reserved: false,
    },
    // 0xFB
    OpcodeMetadata {
        mnemonic: "EI",
        registers: "",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
    // 0xFC
    OpcodeMetadata {
        mnemonic: "CM",
        registers: "",
        format: OperandFormat::Address,
        size_bytes: 3,
        reserved: false,
    },
    // 0xFD - Reserved, executes as NOP
    OpcodeMetadata {
        mnemonic: "NOP",
        registers: "",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: true,
    },
    // 0xFE
    OpcodeMetadata {
        mnemonic: "CPI",
        registers: "",
        format: OperandFormat::Byte,
        size_bytes: 2,
        reserved: false,
    },
    // 0xFF
    OpcodeMetadata {
        mnemonic: "RST",
        registers: "7",
        format: OperandFormat::None,
        size_bytes: 1,
        reserved: false,
    },
];
