//! 8080 Disassembler Module
//!
//! Converts binary machine code into human-readable assembly mnemonics.

pub mod decoder;
pub mod formatter;

use std::io::Write;
use std::iter::FusedIterator;

use crate::opcodes::OpcodeMetadata;
use crate::operand::OperandFormat;
use crate::DisassemblyError;

/// A single decoded instruction borrowed from the program image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction<'a> {
    /// Byte offset of the opcode from the start of the image
    pub offset: usize,

    /// The opcode byte value (0x00-0xFF)
    pub opcode: u8,

    /// Table entry for `opcode`
    pub metadata: &'static OpcodeMetadata,

    /// Operand bytes in stream order (0-2 bytes depending on the operand format)
    pub operand_bytes: &'a [u8],
}

impl Instruction<'_> {
    /// Instruction mnemonic (e.g., "MOV", "JMP")
    pub fn mnemonic(&self) -> &'static str {
        self.metadata.mnemonic
    }

    /// Total size in bytes (1-3 bytes: opcode + operands)
    pub fn size_bytes(&self) -> u8 {
        self.metadata.size_bytes
    }

    /// Opcode followed by its operand bytes
    pub fn bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.operand_bytes.len() + 1);
        bytes.push(self.opcode);
        bytes.extend_from_slice(self.operand_bytes);
        bytes
    }

    /// Numeric value of the variable operand.
    ///
    /// Two-byte operands are assembled little-endian. Returns `None` for
    /// instructions without operand bytes.
    pub fn operand_value(&self) -> Option<u16> {
        match (self.metadata.format, self.operand_bytes) {
            (OperandFormat::Byte, &[value]) => Some(value as u16),
            (OperandFormat::Address, &[lo, hi]) => Some(u16::from_le_bytes([lo, hi])),
            _ => None,
        }
    }
}

/// Options controlling disassembly output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisassemblyOptions {
    /// Load address of the image, added to every displayed offset
    pub origin: u16,

    /// Whether to print the raw instruction bytes before the mnemonic
    pub hex_dump: bool,
}

/// Incremental walker over a program image.
///
/// Yields one decoded instruction per step. When an instruction runs past the
/// end of the image the walker yields a single [`DisassemblyError::Truncated`]
/// and then stays exhausted until [`Disassembler::reset`] is called.
#[derive(Debug, Clone)]
pub struct Disassembler<'a> {
    bytes: &'a [u8],
    cursor: usize,
    failed: bool,
    done: bool,
}

impl<'a> Disassembler<'a> {
    /// Create a walker positioned at the start of `bytes`
    pub fn new(bytes: &'a [u8]) -> Self {
        tracing::debug!(len = bytes.len(), "starting disassembly pass");
        Self {
            bytes,
            cursor: 0,
            failed: false,
            done: false,
        }
    }

    /// Offset of the next opcode to decode
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Bytes not yet consumed
    pub fn remaining(&self) -> usize {
        self.bytes.len().saturating_sub(self.cursor)
    }

    /// Rewind to offset 0 and clear any truncation failure
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.failed = false;
        self.done = false;
    }
}

impl<'a> Iterator for Disassembler<'a> {
    type Item = Result<Instruction<'a>, DisassemblyError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.done {
            return None;
        }

        if self.cursor >= self.bytes.len() {
            self.done = true;
            tracing::debug!(end = self.cursor, "disassembly pass complete");
            return None;
        }

        match decoder::decode_instruction(self.bytes, self.cursor) {
            Ok(instr) => {
                self.cursor += instr.size_bytes() as usize;
                Some(Ok(instr))
            }
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed || self.done {
            return (0, Some(0));
        }
        // Every instruction is 1-3 bytes; a truncated tail still yields one error.
        let remaining = self.remaining();
        (remaining.div_ceil(3), Some(remaining))
    }
}

impl FusedIterator for Disassembler<'_> {}

/// Disassemble a byte slice into a vector of instructions
///
/// # Arguments
///
/// * `bytes` - The machine code to disassemble
///
/// # Returns
///
/// Every instruction in the image, or the first truncation error
pub fn disassemble(bytes: &[u8]) -> Result<Vec<Instruction<'_>>, DisassemblyError> {
    Disassembler::new(bytes).collect()
}

/// Errors raised while writing a listing
#[derive(Debug)]
pub enum ListingError {
    /// The image ended inside an instruction
    Disassembly(DisassemblyError),

    /// The output stream failed
    Io(std::io::Error),
}

impl std::fmt::Display for ListingError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ListingError::Disassembly(err) => err.fmt(f),
            ListingError::Io(err) => write!(f, "failed to write listing: {}", err),
        }
    }
}

impl std::error::Error for ListingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ListingError::Disassembly(err) => Some(err),
            ListingError::Io(err) => Some(err),
        }
    }
}

impl From<DisassemblyError> for ListingError {
    fn from(err: DisassemblyError) -> Self {
        ListingError::Disassembly(err)
    }
}

impl From<std::io::Error> for ListingError {
    fn from(err: std::io::Error) -> Self {
        ListingError::Io(err)
    }
}

/// Stream a listing of `bytes` to `out`, one line per instruction.
///
/// Lines for instructions preceding a truncated one are written before the
/// error is returned. Returns the number of lines written.
pub fn write_listing<W: Write>(
    out: &mut W,
    bytes: &[u8],
    options: &DisassemblyOptions,
) -> Result<usize, ListingError> {
    let mut lines = 0;

    for instr in Disassembler::new(bytes) {
        let instr = instr?;
        writeln!(out, "{}", formatter::format_line(&instr, options))?;
        lines += 1;
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disassemble_empty() {
        let bytes = &[];
        let instructions = disassemble(bytes).unwrap();
        assert_eq!(instructions.len(), 0);
    }

    #[test]
    fn test_walker_advances_by_instruction_size() {
        let bytes = &[0x00, 0x3E, 0x05, 0xC3, 0x00, 0x10, 0x76];
        let offsets: Vec<usize> = Disassembler::new(bytes)
            .map(|instr| instr.unwrap().offset)
            .collect();
        assert_eq!(offsets, vec![0, 1, 3, 6]);
    }

    #[test]
    fn test_walker_is_fused_after_truncation() {
        let mut walker = Disassembler::new(&[0x00, 0xC3, 0x00]);

        assert!(walker.next().unwrap().is_ok());
        let err = walker.next().unwrap().unwrap_err();
        assert_eq!(err.offset(), 1);
        assert!(walker.next().is_none());
        assert!(walker.next().is_none());
        assert_eq!(walker.position(), 1);
    }

    #[test]
    fn test_reset_restarts_pass() {
        let bytes = &[0x00, 0x76];
        let mut walker = Disassembler::new(bytes);
        assert_eq!(walker.by_ref().count(), 2);
        assert_eq!(walker.remaining(), 0);

        walker.reset();
        assert_eq!(walker.position(), 0);
        assert_eq!(walker.remaining(), 2);
        assert_eq!(walker.count(), 2);
    }

    #[test]
    fn test_walker_stays_exhausted_at_end() {
        let mut walker = Disassembler::new(&[0x76]);
        assert!(walker.next().unwrap().is_ok());
        assert!(walker.next().is_none());
        assert!(walker.next().is_none());
        assert_eq!(walker.size_hint(), (0, Some(0)));

        walker.reset();
        assert_eq!(walker.next().unwrap().unwrap().mnemonic(), "HLT");
    }

    #[test]
    fn test_operand_value() {
        let instructions = disassemble(&[0x3E, 0x05, 0xC3, 0x34, 0x12, 0x00]).unwrap();
        assert_eq!(instructions[0].operand_value(), Some(0x05));
        assert_eq!(instructions[1].operand_value(), Some(0x1234));
        assert_eq!(instructions[2].operand_value(), None);
        assert_eq!(instructions[1].bytes(), vec![0xC3, 0x34, 0x12]);
    }

    #[test]
    fn test_write_listing_keeps_lines_before_truncation() {
        let mut out = Vec::new();
        let err = write_listing(&mut out, &[0x00, 0x3E], &DisassemblyOptions::default())
            .unwrap_err();

        assert!(matches!(
            err,
            ListingError::Disassembly(DisassemblyError::Truncated { offset: 1, .. })
        ));
        assert_eq!(String::from_utf8(out).unwrap(), "0000: NOP\n");
    }
}
