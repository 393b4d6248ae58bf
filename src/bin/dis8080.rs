//! Command-line 8080 disassembler.
//!
//! Reads one program image and prints its listing to stdout.

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser;
use lib8080::{write_listing, DisassemblyError, DisassemblyOptions, ListingError};
use tracing_subscriber::EnvFilter;

const DIS8080_BIN: &str = "dis8080";
const ABOUT: &str = "Disassemble an Intel 8080 program image.";
const AFTER_HELP: &str = "Output format:

    oooo: MNEM\\tOPERANDS

Offsets and operands are lowercase hexadecimal. Two-byte operands are
printed high byte first.";

#[derive(clap::Parser)]
#[command(name = DIS8080_BIN, about = ABOUT, after_help = AFTER_HELP)]
struct Cli {
    /// Program image to disassemble
    file: PathBuf,

    /// Load address added to every printed offset, in hex
    #[arg(long, value_name = "ADDR", default_value = "0", value_parser = parse_hex)]
    origin: u16,

    /// Print the raw instruction bytes before each mnemonic
    #[arg(long)]
    hex_dump: bool,

    /// Increase log verbosity on stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_hex(s: &str) -> Result<u16, String> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    u16::from_str_radix(digits, 16).map_err(|e| format!("invalid hex address {s:?}: {e}"))
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn program_name() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .map(Path::new)
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| DIS8080_BIN.to_string())
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let program = std::fs::read(&cli.file)
        .with_context(|| format!("failed to read {}", cli.file.display()))?;
    tracing::debug!(path = %cli.file.display(), len = program.len(), "loaded program image");

    let options = DisassemblyOptions {
        origin: cli.origin,
        hex_dump: cli.hex_dump,
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = write_listing(&mut out, &program, &options);
    // Lines decoded before a failure must reach stdout before the diagnostic.
    out.flush().context("failed to flush listing")?;

    match result {
        Ok(lines) => {
            tracing::debug!(lines, "listing complete");
            Ok(())
        }
        Err(ListingError::Disassembly(err)) => Err(err.into()),
        Err(err @ ListingError::Io(_)) => Err(err.into()),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let name = program_name();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(err) = err.downcast_ref::<DisassemblyError>() {
                eprintln!("{}: {}", name, err);
                eprintln!("{}: aborting disassembly", name);
            } else {
                eprintln!("{}: {:#}", name, err);
            }
            ExitCode::FAILURE
        }
    }
}
