//! Parallel Bubble Sort Visualiser
//!
//! Runs the sequential, foam and reddit sorters over best, worst and random
//! inputs, verifies each result against a reference sort and writes one
//! animated GIF per run, with one frame per pass:
//!
//! ```text
//! foamsort --size 1000 --cases worst,random --sorters foam,reddit --out-dir gifs
//! ```
//!
//! Set `RUST_LOG=foamsort=debug` to see pool start-up and batch sizing.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use rayon::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use foamsort::recorder::artifact_path;
use foamsort::{
    ascending, Algorithm, Case, Error, GifRecorder, PassObserver, PoolConfig, Result, Sequence,
    Sorter, CACHE_LINE_ELEMS,
};

/// Default number of elements per input
const DEFAULT_ARRAY_SIZE: usize = 1000;

/// Parallel bubble sort experiments with GIF visualisation
#[derive(Parser, Debug)]
#[command(name = "foamsort", version, about)]
struct Args {
    /// Number of elements in each generated input
    #[arg(long, default_value_t = DEFAULT_ARRAY_SIZE)]
    size: usize,

    /// Worker threads for the parallel sorters [default: available parallelism]
    #[arg(long)]
    workers: Option<usize>,

    /// Elements per cache line when aligning reddit batches
    #[arg(long, default_value_t = CACHE_LINE_ELEMS)]
    cache_line_elems: usize,

    /// Input shapes to run
    #[arg(long, value_enum, value_delimiter = ',', default_values_t = Case::ALL)]
    cases: Vec<Case>,

    /// Sorters to run
    #[arg(long, value_enum, value_delimiter = ',', default_values_t = Algorithm::ALL)]
    sorters: Vec<Algorithm>,

    /// Seed for the random case (fresh entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Directory that receives `<sorter>_<case>.gif`
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Skip frame recording
    #[arg(long)]
    no_gif: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let workers = args
        .workers
        .unwrap_or_else(|| PoolConfig::default().workers());
    let config = PoolConfig::new(workers, args.cache_line_elems)?;

    println!("Parallel Bubble Sort");
    println!("====================\n");
    println!("Array size: {} elements", args.size);
    println!(
        "Workers: {} (cache line: {} elements)",
        config.workers(),
        config.cache_line_elems()
    );
    if !args.no_gif {
        println!("Frames: {}", args.out_dir.display());
    }

    let mut first_failure = None;

    for &case in &args.cases {
        println!("\n--- {} case ---", case.name());
        let input = case.generate(args.size, args.seed);

        // Reference result, using the parallel pdqsort baseline.
        let mut expected = input.clone();
        expected.par_sort_unstable();

        for &algorithm in &args.sorters {
            let sorter = algorithm.sorter(config);
            if let Err(e) = run_one(args, sorter.as_ref(), case, &input, &expected) {
                println!("{}_{} ERROR: {}", sorter.name(), case.name(), e);
                if first_failure.is_none() {
                    first_failure = Some(e);
                }
            }
        }
    }

    match first_failure {
        Some(e) => Err(e),
        None => {
            info!("all runs verified");
            Ok(())
        }
    }
}

/// Sort one input with one sorter, recording frames unless disabled.
fn run_one(
    args: &Args,
    sorter: &dyn Sorter,
    case: Case,
    input: &[i32],
    expected: &[i32],
) -> Result<()> {
    let name = format!("{}_{}", sorter.name(), case.name());
    let mut seq = Sequence::new(input);
    let mut recorder = if args.no_gif {
        None
    } else {
        Some(GifRecorder::create(
            &artifact_path(&args.out_dir, &name),
            seq.len(),
        )?)
    };

    let start = Instant::now();
    let outcome = sorter.sort_observed(
        &mut seq,
        &ascending,
        recorder.as_mut().map(|r| r as &mut dyn PassObserver),
    );
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    if let Some(recorder) = recorder {
        recorder.finish()?;
    }

    let verified = seq.to_vec() == expected;
    println!(
        "{:<16} {:>6} passes {:>10} swaps {:>12.3} ms   {}",
        name,
        outcome.passes,
        outcome.swaps,
        elapsed_ms,
        if verified { "verified OK" } else { "FAILED" }
    );

    if verified {
        Ok(())
    } else {
        Err(Error::Unsorted {
            sorter: sorter.name().to_string(),
            case: case.name().to_string(),
        })
    }
}
