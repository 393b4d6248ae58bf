//! WASM API for the 8080 disassembler.
//!
//! Provides JavaScript-callable interfaces for opcode lookup and listing
//! generation.

use crate::disassembler::formatter::{format_line, format_operand};
use crate::{decode, Disassembler, DisassemblyOptions};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
    offset: Option<usize>,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
            offset: None,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }

    /// Offset of the truncated instruction, if the error came from decoding
    #[wasm_bindgen(getter)]
    pub fn offset(&self) -> Option<usize> {
        self.offset
    }
}

/// One line of a listing
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct DisassemblyLine {
    offset: usize,
    bytes: Vec<u8>,
    mnemonic: String,
    operand: String,
    text: String,
}

#[wasm_bindgen]
impl DisassemblyLine {
    #[wasm_bindgen(getter)]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[wasm_bindgen(getter)]
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn mnemonic(&self) -> String {
        self.mnemonic.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn operand(&self) -> String {
        self.operand.clone()
    }

    /// The full `oooo: MNEM\tOPERANDS` line
    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.text.clone()
    }
}

/// Table entry for a single opcode
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct OpcodeInfo {
    mnemonic: String,
    registers: String,
    size_bytes: u8,
    reserved: bool,
}

#[wasm_bindgen]
impl OpcodeInfo {
    #[wasm_bindgen(getter)]
    pub fn mnemonic(&self) -> String {
        self.mnemonic.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn registers(&self) -> String {
        self.registers.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn size_bytes(&self) -> u8 {
        self.size_bytes
    }

    #[wasm_bindgen(getter)]
    pub fn reserved(&self) -> bool {
        self.reserved
    }
}

/// Look up the table entry for `opcode`
#[wasm_bindgen]
pub fn decode_opcode(opcode: u8) -> OpcodeInfo {
    let metadata = decode(opcode);
    OpcodeInfo {
        mnemonic: metadata.mnemonic.to_string(),
        registers: metadata.registers.to_string(),
        size_bytes: metadata.size_bytes,
        reserved: metadata.reserved,
    }
}

/// Disassemble a whole program image into an array of `DisassemblyLine`
///
/// Fails on the first truncated instruction; the error carries its offset.
#[wasm_bindgen]
pub fn disassemble_program(program: &[u8], origin: u16) -> Result<js_sys::Array, JsError> {
    let options = DisassemblyOptions {
        origin,
        hex_dump: false,
    };
    let lines = js_sys::Array::new();

    for instr in Disassembler::new(program) {
        let instr = instr.map_err(|e| JsError {
            message: e.to_string(),
            offset: Some(e.offset()),
        })?;

        let line = DisassemblyLine {
            offset: instr.offset + origin as usize,
            bytes: instr.bytes(),
            mnemonic: instr.mnemonic().to_string(),
            operand: format_operand(&instr),
            text: format_line(&instr, &options),
        };
        lines.push(&JsValue::from(line));
    }

    Ok(lines)
}
