use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use explico::error::Result;
use explico::generator::{generate_instance, GeneratorConfig, Instance};
use explico::solver::engine::SearchEngine;
use explico::stats::{render_summary_table, summarize};
use explico::sweep::{run_sweep, write_csv, SweepConfig};

#[derive(Parser)]
#[command(name = "explico", version, about = "Compare exhaustive CSP search strategies")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the full parameter sweep and write a CSV of results.
    Sweep {
        /// Where to write the semicolon-delimited CSV.
        #[arg(long, default_value = "output.csv")]
        output: PathBuf,
        /// JSON file with the sweep grid; defaults to the built-in grid.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Override the number of passes over the grid.
        #[arg(long)]
        runs: Option<usize>,
        /// Override the RNG seed.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Generate (or load) a single instance and solve it once.
    Solve {
        #[arg(long, default_value_t = 6)]
        variables: usize,
        #[arg(long, default_value_t = 3)]
        domain_size: usize,
        #[arg(long, default_value_t = 0.5)]
        density: f64,
        #[arg(long, default_value_t = 0.5)]
        tightness: f64,
        /// Strategy name: backtracking, forward_checking or backjumping.
        #[arg(long, default_value = "backtracking")]
        strategy: String,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Load a previously dumped instance instead of generating one.
        #[arg(long)]
        instance: Option<PathBuf>,
        /// Dump the instance as JSON for later replay.
        #[arg(long)]
        dump: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(error) = run(Cli::parse()) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Sweep {
            output,
            config,
            runs,
            seed,
        } => {
            let mut sweep_config = match config {
                Some(path) => serde_json::from_reader(File::open(path)?)?,
                None => SweepConfig::default(),
            };
            if let Some(runs) = runs {
                sweep_config.runs = runs;
            }
            if let Some(seed) = seed {
                sweep_config.seed = seed;
            }

            let records = run_sweep(&sweep_config)?;
            write_csv(&records, BufWriter::new(File::create(&output)?))?;
            info!(
                records = records.len(),
                output = %output.display(),
                "sweep written"
            );

            println!("{}", render_summary_table(&summarize(&records)));
        }
        Command::Solve {
            variables,
            domain_size,
            density,
            tightness,
            strategy,
            seed,
            instance,
            dump,
        } => {
            let instance = match instance {
                Some(path) => serde_json::from_reader::<_, Instance>(File::open(path)?)?,
                None => {
                    let generator_config = GeneratorConfig {
                        num_variables: variables,
                        domain_size,
                        density,
                        tightness,
                    };
                    let mut rng = ChaCha8Rng::seed_from_u64(seed);
                    generate_instance(&generator_config, &mut rng)?
                }
            };
            if let Some(path) = &dump {
                serde_json::to_writer_pretty(BufWriter::new(File::create(path)?), &instance)?;
                info!(path = %path.display(), "instance dumped");
            }

            let graph = instance.into_graph()?;
            print!("{graph}");

            let mut engine = SearchEngine::new(graph);
            let report = engine.solve(&strategy)?;

            match &report.solution {
                Some(values) => println!("solution: {values:?}"),
                None => println!("no solution"),
            }
            println!(
                "strategy: {}  iterations: {}  elapsed: {:?}  valid: {}",
                report.strategy,
                report.iterations,
                report.elapsed,
                engine.is_solution_valid()
            );
        }
    }
    Ok(())
}
