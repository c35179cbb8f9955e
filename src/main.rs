//! cachesim command-line tool.
//!
//! Reads a trace (one key per line) from stdin or a file, prints `HIT` or
//! `MISS` for every access, then prints the number of compulsory and
//! capacity misses separated by a space.
//!
//! ```text
//! cachesim [-N <size>] [-F | -L | -C] [--trace <path>] [-q] [-v...]
//! ```
//!
//! Exit codes: 0 on success, 1 on a configuration error, 2 on an I/O error.

use std::io::{self, BufRead, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use cachesim::{
    CacheSimulator, Error, PolicyKind, Reporter, Result, SimulatorConfig, TraceReader,
    DEFAULT_CAPACITY,
};

/// Trace-driven cache replacement simulator.
#[derive(Parser, Debug)]
#[command(name = "cachesim")]
#[command(version)]
#[command(about = "Simulate FIFO, LRU or CLOCK replacement over a trace of keys")]
struct Cli {
    /// Cache size in slots
    #[arg(
        short = 'N',
        value_name = "SIZE",
        default_value_t = DEFAULT_CAPACITY as i64,
        allow_negative_numbers = true
    )]
    size: i64,

    /// Use FIFO replacement (default)
    #[arg(short = 'F', overrides_with_all = ["lru", "clock"])]
    fifo: bool,

    /// Use LRU replacement
    #[arg(short = 'L', overrides_with_all = ["fifo", "clock"])]
    lru: bool,

    /// Use CLOCK (second chance) replacement
    #[arg(short = 'C', overrides_with_all = ["fifo", "lru"])]
    clock: bool,

    /// Policy by name (FIFO, LRU, CLOCK); overrides -F/-L/-C
    #[arg(long, value_name = "NAME")]
    policy: Option<String>,

    /// Read the trace from a file instead of stdin
    #[arg(long, value_name = "PATH")]
    trace: Option<PathBuf>,

    /// Only print the final miss counts
    #[arg(short, long)]
    quiet: bool,

    /// Verbosity level (-v, -vv, -vvv); logs go to stderr
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn policy(&self) -> Result<PolicyKind> {
        if let Some(name) = &self.policy {
            return name.parse();
        }
        Ok(if self.clock {
            PolicyKind::Clock
        } else if self.lru {
            PolicyKind::Lru
        } else {
            PolicyKind::Fifo
        })
    }

    fn config(&self) -> Result<SimulatorConfig> {
        SimulatorConfig::new(self.policy()?, self.size)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("cachesim: {}", e);
            ExitCode::from(exit_status(&e))
        }
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

/// Process exit status for a failed run.
fn exit_status(err: &Error) -> u8 {
    if err.is_config_error() {
        1
    } else {
        2
    }
}

fn run(cli: &Cli) -> Result<()> {
    // Validate everything before touching the input
    let config = cli.config()?;
    let mut sim = CacheSimulator::from_config(&config)?;

    match &cli.trace {
        Some(path) => simulate(&mut sim, TraceReader::open(path)?, cli.quiet),
        None => simulate(&mut sim, TraceReader::stdin(), cli.quiet),
    }
}

fn simulate<R: BufRead>(
    sim: &mut CacheSimulator,
    trace: TraceReader<R>,
    quiet: bool,
) -> Result<()> {
    let stdout = io::stdout().lock();
    let mut reporter = Reporter::new(BufWriter::new(stdout), !quiet);

    let stats = sim.run_trace(trace, |_, verdict| reporter.access(verdict))?;
    reporter.summary(&stats)?;
    reporter.finish()?;

    info!(
        policy = %sim.policy(),
        capacity = sim.capacity(),
        accesses = stats.accesses(),
        hit_rate = stats.hit_rate(),
        "trace complete"
    );
    Ok(())
}
