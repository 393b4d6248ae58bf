//! Formatting functions for disassembled instructions

use crate::disassembler::{DisassemblyOptions, Instruction};
use crate::operand::OperandFormat;

/// Width of the hex dump column: three bytes separated by spaces
const HEX_DUMP_WIDTH: usize = 8;

/// Format a single instruction as assembly text
///
/// # Arguments
///
/// * `instr` - The instruction to format
///
/// # Returns
///
/// The mnemonic, followed by a tab and the operand when there is one
pub fn format_instruction(instr: &Instruction) -> String {
    let operand = format_operand(instr);

    if operand.is_empty() {
        instr.mnemonic().to_string()
    } else {
        format!("{}\t{}", instr.mnemonic(), operand)
    }
}

/// Format the operand field: fixed registers, then the variable operand
pub fn format_operand(instr: &Instruction) -> String {
    let registers = instr.metadata.registers;

    let value = match (instr.metadata.format, instr.operand_bytes) {
        (OperandFormat::None, _) => return registers.to_string(),
        (OperandFormat::Byte, &[value]) => format!("{:02x}", value),
        // High byte first, as written in 8080 assembly
        (OperandFormat::Address, &[lo, hi]) => format!("{:02x}{:02x}", hi, lo),
        (OperandFormat::Byte, _) => "??".to_string(),
        (OperandFormat::Address, _) => "????".to_string(),
    };

    if registers.is_empty() {
        value
    } else {
        format!("{},{}", registers, value)
    }
}

/// Format a full listing line: `oooo: [bytes] MNEM\tOPERANDS`
///
/// The offset is printed with at least four lowercase hex digits and widens
/// past 0xFFFF rather than wrapping.
pub fn format_line(instr: &Instruction, options: &DisassemblyOptions) -> String {
    let mut line = format!("{:04x}: ", instr.offset + options.origin as usize);

    if options.hex_dump {
        let dump = instr
            .bytes()
            .iter()
            .map(|byte| format!("{:02x}", byte))
            .collect::<Vec<_>>()
            .join(" ");
        line.push_str(&format!("{:<width$} ", dump, width = HEX_DUMP_WIDTH));
    }

    line.push_str(&format_instruction(instr));
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opcodes::OPCODE_TABLE;

    fn instr(offset: usize, bytes: &[u8]) -> Instruction<'_> {
        Instruction {
            offset,
            opcode: bytes[0],
            metadata: &OPCODE_TABLE[bytes[0] as usize],
            operand_bytes: &bytes[1..],
        }
    }

    #[test]
    fn test_format_immediate() {
        assert_eq!(format_instruction(&instr(1, &[0x3E, 0x05])), "MVI\tA,05");
    }

    #[test]
    fn test_format_port() {
        assert_eq!(format_instruction(&instr(0, &[0xD3, 0x10])), "OUT\t10");
    }

    #[test]
    fn test_format_address_high_byte_first() {
        assert_eq!(format_instruction(&instr(0, &[0xC3, 0x34, 0x12])), "JMP\t1234");
        assert_eq!(format_instruction(&instr(0, &[0x31, 0x00, 0x24])), "LXI\tSP,2400");
    }

    #[test]
    fn test_format_registers_only() {
        assert_eq!(format_instruction(&instr(0, &[0x41])), "MOV\tB,C");
        assert_eq!(format_instruction(&instr(0, &[0xF5])), "PUSH\tPSW");
        assert_eq!(format_instruction(&instr(0, &[0xFF])), "RST\t7");
    }

    #[test]
    fn test_format_implied() {
        assert_eq!(format_instruction(&instr(0, &[0x00])), "NOP");
        assert_eq!(format_instruction(&instr(0, &[0xC9])), "RET");
    }

    #[test]
    fn test_format_line_pads_offset() {
        let options = DisassemblyOptions::default();
        assert_eq!(format_line(&instr(3, &[0x76]), &options), "0003: HLT");
        assert_eq!(format_line(&instr(0x12345, &[0x76]), &options), "12345: HLT");
    }

    #[test]
    fn test_format_line_with_origin() {
        let options = DisassemblyOptions {
            origin: 0x100,
            hex_dump: false,
        };
        assert_eq!(format_line(&instr(2, &[0xAF]), &options), "0102: XRA\tA");
    }

    #[test]
    fn test_format_line_origin_widens_past_ffff() {
        let options = DisassemblyOptions {
            origin: 0xFFFF,
            hex_dump: false,
        };
        assert_eq!(format_line(&instr(0, &[0x00]), &options), "ffff: NOP");
        assert_eq!(format_line(&instr(1, &[0x00]), &options), "10000: NOP");
    }

    #[test]
    fn test_format_line_hex_dump() {
        let options = DisassemblyOptions {
            origin: 0,
            hex_dump: true,
        };
        assert_eq!(
            format_line(&instr(0, &[0xCD, 0x05, 0x00]), &options),
            "0000: cd 05 00 CALL\t0005"
        );
        assert_eq!(format_line(&instr(3, &[0xC9]), &options), "0003: c9       RET");
    }
}
