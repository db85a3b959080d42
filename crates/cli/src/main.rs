//! LS-8 virtual machine CLI.
//!
//! This binary provides a single entry point for running and inspecting programs. It performs:
//! 1. **Run:** Load a program text file, execute it, print `PRN` output to stdout.
//! 2. **Disassemble:** Print a listing of a program file.
//!
//! Exit codes: 0 on `HLT`, 1 on a fatal fault or usage error, 2 if the program or
//! configuration cannot be loaded.

use std::path::{Path, PathBuf};
use std::{fs, process};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ls8_core::Config;
use ls8_core::Simulator;
use ls8_core::isa::disasm;
use ls8_core::sim::loader;
use ls8_core::soc::StdoutConsole;

/// Exit code for a fatal fault during execution.
const EXIT_FAULT: i32 = 1;
/// Exit code for a program or configuration that could not be loaded.
const EXIT_LOAD: i32 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "ls8",
    author,
    version,
    about = "LS-8 8-bit virtual machine",
    long_about = "Run or disassemble LS-8 programs.\n\nPrograms are text files with one binary byte per line; `#` starts a comment.\n\nExamples:\n  ls8 run programs/mult.ls8\n  ls8 run --trace --stats programs/call.ls8\n  ls8 disasm programs/stack.ls8"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load and execute a program until HLT.
    Run {
        /// Program text file.
        program: PathBuf,

        /// JSON configuration file (stack placement, entry point, tracing).
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print a trace line to stderr before every instruction.
        #[arg(short, long)]
        trace: bool,

        /// Print run statistics to stderr on exit.
        #[arg(short, long)]
        stats: bool,
    },

    /// Print a disassembly listing of a program.
    Disasm {
        /// Program text file.
        program: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run {
            program,
            config,
            trace,
            stats,
        }) => cmd_run(&program, config.as_deref(), trace, stats),
        Some(Commands::Disasm { program }) => cmd_disasm(&program),
        None => {
            eprintln!("LS-8 virtual machine: pass a subcommand");
            eprintln!();
            eprintln!("  ls8 run <program>      Execute a program");
            eprintln!("  ls8 disasm <program>   Print a listing");
            eprintln!();
            eprintln!("  ls8 --help  for full options");
            process::exit(EXIT_FAULT);
        }
    }
}

/// Reads the configuration file if one was given, otherwise returns the defaults.
///
/// Exits with `EXIT_LOAD` on an unreadable or invalid file.
fn read_config(path: Option<&Path>) -> Config {
    let Some(path) = path else {
        return Config::default();
    };
    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading config {}: {}", path.display(), e);
        process::exit(EXIT_LOAD);
    });
    Config::from_json(&text).unwrap_or_else(|e| {
        eprintln!("Error in config {}: {}", path.display(), e);
        process::exit(EXIT_LOAD);
    })
}

/// Reads and parses a program file, exiting with `EXIT_LOAD` on failure.
fn read_program(path: &Path) -> Vec<u8> {
    loader::load_program(path).unwrap_or_else(|e| {
        eprintln!("{e}");
        process::exit(EXIT_LOAD);
    })
}

/// Runs a program to completion.
///
/// On a fatal fault, dumps the CPU state and exits with `EXIT_FAULT`.
fn cmd_run(program_path: &Path, config_path: Option<&Path>, trace: bool, stats: bool) {
    let mut config = read_config(config_path);
    config.general.trace_instructions |= trace;

    let program = read_program(program_path);
    let mut sim = Simulator::new(&config, StdoutConsole::new());
    if let Err(e) = sim.load(&program) {
        eprintln!("Error loading {}: {}", program_path.display(), e);
        process::exit(EXIT_LOAD);
    }

    tracing::info!(program = %program_path.display(), bytes = program.len(), "starting run");
    let result = sim.run();
    tracing::info!(lines = sim.output.lines_written(), "run finished");
    if stats {
        sim.cpu.stats.print();
    }
    if let Err(fault) = result {
        eprintln!("\n[!] {fault}");
        eprintln!("{}", sim.cpu.dump_state());
        process::exit(EXIT_FAULT);
    }
}

/// Prints one line per decoded instruction: address, raw bytes, mnemonic.
fn cmd_disasm(program_path: &Path) {
    let program = read_program(program_path);
    for line in disasm::disassemble_program(&program) {
        let bytes = line
            .bytes
            .iter()
            .map(|b| format!("{b:08b}"))
            .collect::<Vec<_>>()
            .join(" ");
        println!("{:02X}:  {:<26}  {}", line.addr, bytes, line.text);
    }
}
