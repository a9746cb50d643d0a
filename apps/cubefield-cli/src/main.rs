use clap::{Parser, Subcommand, ValueEnum};
use cubefield_common::Cell;
use cubefield_kernel::{GrowConfig, GrowthStats};
use cubefield_render::{CubeScene, CubeSink, DEFAULT_CUBE_COUNT, LayerRenderer, Renderer};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cubefield-cli", about = "Grow and inspect random cube clusters")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Grow a cluster of cubes from the origin
    Grow {
        /// Number of cubes in the cluster
        #[arg(short, long, default_value_t = DEFAULT_CUBE_COUNT)]
        count: usize,
        /// RNG seed; drawn at random when omitted
        #[arg(short, long)]
        seed: Option<u64>,
        /// Consecutive stalled draws tolerated before giving up
        #[arg(long, default_value = "1024", conflicts_with = "unbounded")]
        max_stalls: u32,
        /// Retry stalled draws without limit
        #[arg(long)]
        unbounded: bool,
        /// Regenerate the scene this many times, with consecutive seeds
        #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        runs: u32,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Validate the cluster invariants and fail on violation
        #[arg(long)]
        check: bool,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One line per cube as it is placed
    Text,
    /// The finished cluster as JSON
    Json,
    /// Horizontal slices of the finished cluster
    Layers,
}

/// Prints placements as they happen when `echo` is set.
struct StdoutSink {
    echo: bool,
    placed: usize,
}

impl CubeSink for StdoutSink {
    fn place_cube(&mut self, cell: Cell) {
        if self.echo {
            println!("  [{:>4}] {cell}", self.placed);
        }
        self.placed += 1;
    }

    fn clear(&mut self) {
        self.placed = 0;
    }
}

#[derive(Serialize)]
struct GrowReport<'a> {
    seed: u64,
    count: usize,
    stats: GrowthStats,
    cells: Vec<&'a Cell>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Info => {
            println!("cubefield-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", cubefield_common::crate_info());
            println!("kernel: {}", cubefield_kernel::crate_info());
            println!("render: {}", cubefield_render::crate_info());
        }
        Commands::Grow {
            count,
            seed,
            max_stalls,
            unbounded,
            runs,
            format,
            check,
        } => {
            let config = if unbounded {
                GrowConfig::unbounded()
            } else {
                GrowConfig {
                    max_consecutive_stalls: Some(max_stalls),
                }
            };
            let base_seed = seed.unwrap_or_else(rand::random);
            tracing::info!(count, seed = base_seed, runs, "growing cluster");

            let sink = StdoutSink {
                echo: format == Format::Text,
                placed: 0,
            };
            let mut scene = CubeScene::new(sink, config);

            for run in 0..runs {
                let run_seed = base_seed.wrapping_add(u64::from(run));
                if format == Format::Text {
                    println!("=== Run {run} (seed={run_seed}, count={count}) ===");
                }

                let mut rng = ChaCha8Rng::seed_from_u64(run_seed);
                let cluster = scene.regenerate(count, &mut rng)?;

                if check {
                    if let Err(e) = cluster.validate() {
                        anyhow::bail!("cluster check failed for seed {run_seed}: {e}");
                    }
                }

                match format {
                    Format::Text => {
                        let stats = cluster.stats();
                        println!(
                            "Placed {} cubes (samples={}, stalls={}, hash={:#x})",
                            cluster.len(),
                            stats.samples,
                            stats.stalls,
                            cluster.state_hash()
                        );
                    }
                    Format::Json => {
                        let report = GrowReport {
                            seed: run_seed,
                            count: cluster.len(),
                            stats: cluster.stats(),
                            cells: cluster.cells().collect(),
                        };
                        println!("{}", serde_json::to_string(&report)?);
                    }
                    Format::Layers => {
                        println!("=== Run {run} (seed={run_seed}, count={count}) ===");
                        print!("{}", LayerRenderer::new().render(cluster));
                    }
                }
            }

            if check {
                tracing::info!(runs, "cluster check passed");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn zero_runs_is_rejected() {
        let parsed = Cli::try_parse_from(["cubefield-cli", "grow", "--runs", "0", "--check"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn grow_defaults() {
        let cli = Cli::try_parse_from(["cubefield-cli", "grow"]).unwrap();
        match cli.command {
            Commands::Grow {
                count, runs, seed, ..
            } => {
                assert_eq!(count, DEFAULT_CUBE_COUNT);
                assert_eq!(runs, 1);
                assert!(seed.is_none());
            }
            Commands::Info => panic!("expected grow"),
        }
    }

    #[test]
    fn max_stalls_conflicts_with_unbounded() {
        let parsed =
            Cli::try_parse_from(["cubefield-cli", "grow", "--max-stalls", "5", "--unbounded"]);
        assert!(parsed.is_err());
    }
}
