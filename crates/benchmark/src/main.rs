//! Pallet packing benchmark runner CLI

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use palletpack_benchmark::{
    BenchmarkConfig, BenchmarkResult, BenchmarkRunner, DatasetParser, SyntheticGenerator,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pallet-runner")]
#[command(about = "Benchmark runner for palletpack")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack a single dataset file
    Run {
        /// Path to the JSON dataset file
        file: PathBuf,

        #[command(flatten)]
        solver: SolverArgs,

        /// Output file for results with placements (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output file for CSV results
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Pack every JSON dataset in a directory
    RunAll {
        /// Directory holding the dataset files
        dir: PathBuf,

        #[command(flatten)]
        solver: SolverArgs,

        /// Output file for results (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output file for CSV results
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Write a synthetic dataset that fills its pallet exactly
    Generate {
        /// Kind of dataset
        #[arg(short, long, value_enum, default_value = "cubes")]
        kind: Kind,

        /// Pallet dimensions
        #[arg(short, long, num_args = 3, value_names = ["X", "Y", "Z"], default_values_t = vec![120, 100, 80])]
        pallet: Vec<i64>,

        /// Cube side for `cubes`
        #[arg(long, default_value = "20")]
        side: i64,

        /// Number of boxes for `guillotine`
        #[arg(long, default_value = "30")]
        pieces: usize,

        /// Random seed for `guillotine`
        #[arg(long)]
        seed: Option<u64>,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[derive(Args)]
struct SolverArgs {
    /// Time limit per dataset in seconds (0 = unlimited)
    #[arg(short, long, default_value = "60")]
    time_limit: u64,

    /// Run the attempts of each pallet orientation in parallel
    #[arg(long)]
    parallel: bool,
}

impl SolverArgs {
    fn config(&self) -> BenchmarkConfig {
        BenchmarkConfig::new()
            .with_time_limit(self.time_limit * 1000)
            .with_parallel(self.parallel)
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    /// Equal cubes tiling the pallet
    Cubes,
    /// Mixed boxes from random guillotine cuts of the pallet
    Guillotine,
}

fn save(results: &BenchmarkResult, output: Option<PathBuf>, csv: Option<PathBuf>) -> anyhow::Result<()> {
    if let Some(path) = output {
        results
            .save_json(&path)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("Results saved to: {}", path.display());
    }

    if let Some(path) = csv {
        results
            .save_csv(&path)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("CSV saved to: {}", path.display());
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            file,
            solver,
            output,
            csv,
        } => {
            let parser = DatasetParser::new();
            let dataset = parser
                .parse_file(&file)
                .with_context(|| format!("loading {}", file.display()))?;

            let config = solver.config().with_placements(output.is_some());
            let runner = BenchmarkRunner::new(config);

            let mut results = BenchmarkResult::new();
            results.add_run(runner.run_dataset(&dataset)?);
            results.print_summary();

            save(&results, output, csv)?;
        }

        Commands::RunAll {
            dir,
            solver,
            output,
            csv,
        } => {
            let parser = DatasetParser::new();
            let files = parser
                .list_dir(&dir)
                .with_context(|| format!("listing {}", dir.display()))?;
            if files.is_empty() {
                anyhow::bail!("no JSON datasets in {}", dir.display());
            }

            let mut datasets = Vec::new();
            for file in &files {
                match parser.parse_file(file) {
                    Ok(dataset) => datasets.push(dataset),
                    Err(e) => eprintln!("Skipping {}: {}", file.display(), e),
                }
            }

            let runner = BenchmarkRunner::new(solver.config());
            let results = runner.run_datasets(&datasets);
            results.print_summary();
            println!(
                "Average utilization over {} datasets: {:.1}%",
                results.runs.len(),
                results.avg_utilization() * 100.0
            );

            save(&results, output, csv)?;
        }

        Commands::Generate {
            kind,
            pallet,
            side,
            pieces,
            seed,
            output,
        } => {
            let pallet: [i64; 3] = pallet
                .try_into()
                .map_err(|_| anyhow::anyhow!("pallet needs exactly three dimensions"))?;
            if pallet.iter().any(|&d| d <= 0) {
                anyhow::bail!("pallet dimensions must be positive");
            }

            let dataset = match kind {
                Kind::Cubes => SyntheticGenerator::cube_tiling(pallet, side),
                Kind::Guillotine => {
                    let mut generator = match seed {
                        Some(seed) => SyntheticGenerator::with_seed(seed),
                        None => SyntheticGenerator::new(),
                    };
                    generator.guillotine(pallet, pieces)
                }
            };

            let json = serde_json::to_string_pretty(&dataset)?;
            std::fs::write(&output, json)
                .with_context(|| format!("writing {}", output.display()))?;

            let info = dataset.info();
            println!("Dataset saved to: {}", output.display());
            println!("  Item types: {}", info.item_types);
            println!("  Boxes: {}", info.total_boxes);
            println!("  Pallet: {:?}", info.pallet);
        }
    }

    Ok(())
}
