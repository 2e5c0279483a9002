//! Cache simulator CLI.
//!
//! This binary replays a memory trace through a simulated cache. It performs:
//! 1. **Configuration:** Reads `-s`, `-E`, `-b` and validates the geometry.
//! 2. **Simulation:** Streams the trace named by `-t` through the cache.
//! 3. **Reporting:** Prints the summary line, optionally JSON, and optionally a results file.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use csim_core::common::SimError;
use csim_core::{CacheConfig, SimStats, Simulator, TraceReader};

#[derive(Parser, Debug)]
#[command(
    name = "csim",
    author,
    version,
    about = "Trace-driven set-associative cache simulator",
    long_about = "Replays a memory trace through an LRU, write-back, write-allocate cache and reports hits, misses, evictions, and dirty bytes.\n\nTrace lines have the form `OP ADDRESS,SIZE` with OP `L` (load) or `S` (store) and a hexadecimal address.\n\nExamples:\n  csim -s 4 -E 1 -b 4 -t traces/yi.trace\n  csim -s 0 -E 1 -b 0 -t traces/wide.trace -v"
)]
struct Cli {
    /// Number of set index bits (the cache has 2^s sets).
    #[arg(short = 's', value_name = "BITS")]
    set_bits: u32,

    /// Associativity (number of lines per set).
    #[arg(short = 'E', value_name = "LINES")]
    ways: usize,

    /// Number of block bits (blocks are 2^b bytes).
    #[arg(short = 'b', value_name = "BITS")]
    block_bits: u32,

    /// Trace file to replay.
    #[arg(short = 't', value_name = "TRACEFILE")]
    trace: PathBuf,

    /// Print the outcome of every access.
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Print the statistics as JSON instead of the summary line.
    #[arg(long)]
    json: bool,

    /// Also write the counters to this results file.
    #[arg(long, value_name = "PATH")]
    results: Option<PathBuf>,

    /// Print the sectioned report (comma-separated: summary, memory; empty for all).
    #[arg(long, value_name = "SECTIONS", num_args = 0.., value_delimiter = ',')]
    stats: Option<Vec<String>>,
}

impl Cli {
    fn cache_config(&self) -> CacheConfig {
        CacheConfig {
            set_bits: self.set_bits,
            ways: self.ways,
            block_bits: self.block_bits,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(stats) => {
            if let Err(e) = report(&cli, &stats) {
                eprintln!("[!] {e}");
                process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("[!] {e}");
            process::exit(1);
        }
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` wins; otherwise `warn`,
/// or `debug` for the core when `-v` is given.
fn init_tracing(verbose: bool) {
    let default = if verbose { "warn,csim_core=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Validates the geometry, opens the trace, and runs it to completion.
fn run(cli: &Cli) -> Result<SimStats, SimError> {
    let geometry = cli.cache_config().validate()?;
    tracing::debug!(
        sets = geometry.num_sets(),
        ways = geometry.ways(),
        block_size = geometry.block_size(),
        trace = %cli.trace.display(),
        "starting simulation"
    );
    let trace = TraceReader::open(&cli.trace)?;

    let mut sim = Simulator::new(geometry);
    if cli.verbose {
        sim = sim.with_verbose_stdout();
    }
    sim.run(trace)
}

/// Prints the final statistics and writes the results file if requested.
fn report(cli: &Cli, stats: &SimStats) -> Result<(), SimError> {
    if cli.json {
        let json = stats.to_json().map_err(std::io::Error::from)?;
        println!("{json}");
    } else {
        println!("{stats}");
    }
    if let Some(sections) = &cli.stats {
        stats.print_sections(sections);
    }
    if let Some(path) = &cli.results {
        stats.write_results(path)?;
    }
    Ok(())
}
