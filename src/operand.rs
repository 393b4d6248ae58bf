//! # Operand Formats
//!
//! This module defines the three operand shapes used by the Intel 8080
//! instruction set. The shape determines how many bytes follow the opcode and
//! how the disassembler renders them.

/// 8080 operand format enumeration.
///
/// Register operands (`MOV B,C`, `PUSH PSW`, `RST 3`) are encoded in the opcode
/// itself and are carried by the opcode table as fixed text. This enum only
/// describes the *variable* operand read from the bytes after the opcode.
///
/// # Operand Sizes
///
/// - **0 bytes**: None
/// - **1 byte**: Byte
/// - **2 bytes**: Address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandFormat {
    /// No operand bytes follow the opcode.
    ///
    /// Examples: NOP, MOV B,C, RST 7
    None,

    /// One 8-bit immediate value or I/O port number.
    ///
    /// Examples: MVI A,05 / OUT 10 / CPI ff
    Byte,

    /// One 16-bit address or immediate, stored low byte first.
    ///
    /// Examples: JMP 1234 (bytes `c3 34 12`) / LXI H,2000
    Address,
}

impl OperandFormat {
    /// Number of operand bytes following the opcode.
    pub const fn operand_len(self) -> usize {
        match self {
            OperandFormat::None => 0,
            OperandFormat::Byte => 1,
            OperandFormat::Address => 2,
        }
    }

    /// Total instruction length including the opcode byte.
    pub const fn instruction_len(self) -> u8 {
        self.operand_len() as u8 + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operand_lengths() {
        assert_eq!(OperandFormat::None.operand_len(), 0);
        assert_eq!(OperandFormat::Byte.operand_len(), 1);
        assert_eq!(OperandFormat::Address.operand_len(), 2);
    }

    #[test]
    fn test_instruction_lengths() {
        assert_eq!(OperandFormat::None.instruction_len(), 1);
        assert_eq!(OperandFormat::Byte.instruction_len(), 2);
        assert_eq!(OperandFormat::Address.instruction_len(), 3);
    }
}
