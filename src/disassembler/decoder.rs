//! Instruction decoder for the 8080 disassembler

use crate::disassembler::Instruction;
use crate::opcodes::decode;
use crate::DisassemblyError;

/// Decode the instruction whose opcode sits at `bytes[offset]`
///
/// # Arguments
///
/// * `bytes` - The whole program image
/// * `offset` - Byte offset of the opcode within `bytes`
///
/// # Returns
///
/// The decoded instruction, or `DisassemblyError::Truncated` if its operand
/// bytes run past the end of `bytes`
///
/// # Panics
///
/// Panics if `offset` is not inside `bytes`.
pub fn decode_instruction(bytes: &[u8], offset: usize) -> Result<Instruction<'_>, DisassemblyError> {
    let opcode = bytes[offset];
    let metadata = decode(opcode);
    let size = metadata.size_bytes as usize;
    let available = bytes.len() - offset;

    if size > available {
        tracing::debug!(
            offset,
            opcode,
            needed = size,
            available,
            "instruction runs past end of image"
        );
        return Err(DisassemblyError::Truncated {
            offset,
            opcode,
            needed: metadata.size_bytes,
            available,
        });
    }

    let operand_bytes = &bytes[offset + 1..offset + size];
    tracing::trace!(offset, opcode, mnemonic = metadata.mnemonic, "decoded");

    Ok(Instruction {
        offset,
        opcode,
        metadata,
        operand_bytes,
    })
}
