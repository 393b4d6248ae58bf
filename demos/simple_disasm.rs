//! Basic disassembler usage example

use lib8080::disassembler::formatter::format_line;
use lib8080::{Disassembler, DisassemblyOptions};

fn main() {
    // Example machine code bytes, loaded at 0x0100 like a CP/M program
    let code = &[
        0x0E, 0x09, //       MVI C,09
        0x11, 0x09, 0x01, // LXI D,0109
        0xCD, 0x05, 0x00, // CALL 0005
        0xC9, //             RET
    ];

    let options = DisassemblyOptions {
        origin: 0x0100,
        hex_dump: true,
    };

    println!("Disassembled code:");
    for instr in Disassembler::new(code) {
        match instr {
            Ok(instr) => println!("{}", format_line(&instr, &options)),
            Err(err) => {
                eprintln!("{}", err);
                break;
            }
        }
    }
}
