//! WebAssembly bindings for the lib8080 disassembler.
//!
//! This module provides JavaScript-callable interfaces to the decoder,
//! enabling browser-based inspection of 8080 program images.

#[cfg(feature = "wasm")]
pub mod api;

#[cfg(feature = "wasm")]
pub use api::{decode_opcode, disassemble_program, DisassemblyLine, JsError, OpcodeInfo};
