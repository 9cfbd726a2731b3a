//! RISC-V instruction decoder CLI.
//!
//! This binary feeds instruction words through the decode stage. It performs:
//! 1. **Word mode:** Decodes hex words given on the command line.
//! 2. **File mode:** Decodes every word in the executable sections of an ELF
//!    file, or every word of a raw binary image.
//! 3. **Reporting:** Prints disassembly (or one JSON record per word) followed
//!    by a decode statistics summary.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use rvdecode_core::config::{Config, Xlen};
use rvdecode_core::core::pipeline::latches::{IdExEntry, IfIdEntry};
use rvdecode_core::core::pipeline::stages::DecodeStage;
use rvdecode_core::isa::disasm::disassemble;
use rvdecode_core::sim::loader::{self, Program};
use rvdecode_core::stats::DecodeStats;
use rvdecode_core::{DecodeResult, IllegalInstruction};

#[derive(Parser, Debug)]
#[command(
    name = "rvdecode",
    author,
    version,
    about = "Decode RISC-V RV32G instruction words",
    long_about = "Decode RISC-V instruction words into functional-unit subcodes, registers, and immediates.\n\nExamples:\n  rvdecode word 0x00a00513 0xfff00013\n  rvdecode --xlen 64 word 0x02051513\n  rvdecode file program.elf\n  rvdecode --json file image.bin --raw --base 0x80000000"
)]
struct Cli {
    /// Register width (32 or 64). Overrides the config file and ELF class.
    #[arg(long, global = true, value_parser = parse_xlen)]
    xlen: Option<Xlen>,

    /// Emit one JSON record per word instead of disassembly.
    #[arg(long, global = true)]
    json: bool,

    /// JSON configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log decoder activity at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode instruction words given in hex.
    Word {
        /// Instruction words (`0x` prefix and `_` separators optional).
        #[arg(required = true, value_parser = parse_word)]
        words: Vec<u32>,
    },

    /// Decode the instruction words of a program file.
    File {
        /// ELF executable or raw binary image.
        path: PathBuf,

        /// Treat the file as a raw little-endian binary.
        #[arg(long)]
        raw: bool,

        /// Load address of a raw image.
        #[arg(long, default_value = "0", value_parser = parse_addr, requires = "raw")]
        base: u64,
    },
}

/// One output record in JSON mode.
#[derive(Serialize)]
struct Record<'a> {
    pc: u64,
    raw: u32,
    asm: Option<String>,
    outcome: &'a Result<DecodeResult, IllegalInstruction>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };

    let program = match &cli.command {
        Commands::Word { words } => Program {
            sections: vec![loader::TextSection {
                name: String::new(),
                addr: 0,
                words: words.clone(),
            }],
            xlen: None,
        },
        Commands::File { path, raw, base } => {
            let mut program = loader::load_file(path, *raw)
                .with_context(|| format!("failed to load {}", path.display()))?;
            if *raw {
                for section in &mut program.sections {
                    section.addr = *base;
                }
            }
            program
        }
    };

    if let Some(xlen) = cli.xlen.or(program.xlen) {
        config.decoder.xlen = xlen;
    }
    tracing::debug!(xlen = %config.decoder.xlen, words = program.len(), "decoding");

    let stats = run(&config, &program, cli.json)?;
    if cli.json {
        println!("{}", serde_json::to_string(&stats)?);
    } else {
        stats.print();
    }
    Ok(())
}

/// Pushes every word of `program` through a decode stage and prints each result.
fn run(config: &Config, program: &Program, json: bool) -> Result<DecodeStats> {
    let mut stage = DecodeStage::new(config);
    let mut out = BufWriter::new(io::stdout().lock());

    for (pc, inst) in program.words() {
        let fetched = IfIdEntry::new(pc, inst);
        if let Some(entry) = stage.tick(Some(&fetched), false) {
            write_entry(&mut out, entry, json)?;
        }
    }
    out.flush()?;
    Ok(stage.stats().clone())
}

fn write_entry(out: &mut impl Write, entry: &IdExEntry, json: bool) -> Result<()> {
    if json {
        let record = Record {
            pc: entry.pc,
            raw: entry.inst,
            asm: entry.decoded().map(disassemble),
            outcome: &entry.outcome,
        };
        serde_json::to_writer(&mut *out, &record)?;
        writeln!(out)?;
    } else {
        match &entry.outcome {
            Ok(d) => writeln!(out, "{:08x}:  {:08x}  {}", entry.pc, entry.inst, disassemble(d))?,
            Err(err) => writeln!(out, "{:08x}:  {:08x}  <{err}>", entry.pc, entry.inst)?,
        }
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(path: &Path) -> Result<Config> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    Config::from_json(&text).with_context(|| format!("invalid config {}", path.display()))
}

fn parse_xlen(s: &str) -> Result<Xlen, String> {
    match s.to_ascii_lowercase().trim_start_matches("rv") {
        "32" => Ok(Xlen::Rv32),
        "64" => Ok(Xlen::Rv64),
        _ => Err(format!("expected 32 or 64, got '{s}'")),
    }
}

fn parse_hex(s: &str) -> Result<u64, String> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
        .replace('_', "");
    u64::from_str_radix(&digits, 16).map_err(|e| format!("invalid hex value '{s}': {e}"))
}

fn parse_word(s: &str) -> Result<u32, String> {
    let value = parse_hex(s)?;
    u32::try_from(value).map_err(|_| format!("'{s}' does not fit in 32 bits"))
}

fn parse_addr(s: &str) -> Result<u64, String> {
    parse_hex(s)
}
