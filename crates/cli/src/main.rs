//! LS-8 simulator CLI.
//!
//! Loads a program image and runs it until `HLT`. It performs:
//! 1. **Load:** Parse the text image (one binary byte per line) into memory.
//! 2. **Run:** Execute, printing `PRN` output to stdout.
//! 3. **Report:** Optional per-instruction trace and end-of-run statistics on stderr.
//!
//! Exit status: 0 on halt, 2 if the program file does not exist, 1 for any
//! other load failure or machine trap.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use ls8_core::Config;
use ls8_core::Simulator;
use ls8_core::common::SimError;

/// Exit status for a missing program file.
const EXIT_NOT_FOUND: u8 = 2;
/// Exit status for every other failure.
const EXIT_FAILURE: u8 = 1;

#[derive(Parser, Debug)]
#[command(
    name = "ls8",
    author,
    version,
    about = "LS-8 8-bit instruction-set simulator",
    long_about = "Run an LS-8 program image.\n\nThe image is a text file with one 8-bit binary literal per line; \
                  '#' starts a comment and blank lines are ignored.\n\nExamples:\n  \
                  ls8 programs/print8.ls8\n  ls8 --trace --stats programs/call.ls8"
)]
struct Cli {
    /// Program image to run.
    program: PathBuf,

    /// Print a trace line to stderr before every instruction.
    #[arg(long)]
    trace: bool,

    /// Print execution statistics to stderr after the machine halts.
    #[arg(long)]
    stats: bool,

    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(exit_status(&e))
        }
    }
}

/// Installs the stderr log subscriber.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Builds the configuration, loads the program and runs it to completion.
fn run(cli: &Cli) -> Result<(), SimError> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    config.general.trace_instructions |= cli.trace;
    config.general.print_stats |= cli.stats;
    config.validate()?;

    let mut sim = Simulator::new(&config);
    sim.load_file(&cli.program)?;
    tracing::info!(program = %cli.program.display(), "starting");

    match sim.run() {
        Ok(stats) => {
            if config.general.print_stats {
                eprint!("{}", stats.report());
            }
            Ok(())
        }
        Err(trap) => {
            sim.cpu.dump_state();
            Err(trap.into())
        }
    }
}

/// Maps a failure to the process exit status.
fn exit_status(err: &SimError) -> u8 {
    match err {
        SimError::Load(load) if load.is_not_found() => EXIT_NOT_FOUND,
        _ => EXIT_FAILURE,
    }
}
