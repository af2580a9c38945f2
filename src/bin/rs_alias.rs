// std
use std::path::PathBuf;
// others
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;
// rs_alias
use rs_alias::core::api::{run, Options};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Draw items uniformly and by weight with white noise, additive
/// irrational sequences, R2 and Sobol' points, and write the
/// convergence histograms as CSV files.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// number of items in the alphabet
    #[arg(short = 'n', long = "items", default_value_t = 10)]
    items: usize,
    /// number of leading items printed per scheme
    #[arg(short = 's', long = "show", default_value_t = 80)]
    show: usize,
    /// comma separated draw counts at which histograms are written
    #[arg(
        long = "histogram",
        value_delimiter = ',',
        default_value = "10,100,1000,10000,100000,1000000"
    )]
    histogram: Vec<usize>,
    /// character printed for item 0
    #[arg(short = 'b', long = "base", default_value_t = '0')]
    base: char,
    /// also run the one-minus golden ratio and one-minus pi schemes
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
    /// seed white noise from the system clock
    #[arg(long = "nondeterministic")]
    nondeterministic: bool,
    /// PCG32 sequence used for white noise
    #[arg(long = "seed")]
    seed: Option<u64>,
    /// directory for the histogram CSV files
    #[arg(short = 'o', long = "out", default_value = "out")]
    out: PathBuf,
    /// do not write CSV files
    #[arg(long = "no-csv")]
    no_csv: bool,
    /// use specified number of threads for sampling
    #[arg(short = 't', long = "nthreads", default_value_t = 0)]
    nthreads: u8,
    /// show a progress bar per test
    #[arg(short = 'p', long = "progress")]
    progress: bool,
}

impl From<Cli> for Options {
    fn from(args: Cli) -> Self {
        Options {
            num_items: args.items,
            num_rolls_show: args.show,
            num_rolls_histogram: args.histogram,
            base_character: args.base,
            verbose: args.verbose,
            deterministic: !args.nondeterministic,
            seed: args.seed,
            out_dir: args.out,
            write_csv: !args.no_csv,
            num_threads: args.nthreads,
            show_progress: args.progress,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    // handle command line options
    let args = Cli::parse();
    let mut options: Options = Options::from(args);
    let num_cores = num_cpus::get();
    println!(
        "rs_alias version {} [Detected {} cores]\n",
        VERSION, num_cores
    );
    if let Err(e) = run(&mut options) {
        error!("{}", e);
        std::process::exit(1);
    }
}
