//! War simulator CLI
//!
//! Commands:
//! - batch: Play many games and print statistics
//! - play: Play a single game and print its result

use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use war_sim::{play_one_game, BatchRunner, Metric, SimConfig, TieOrder};

#[derive(Parser)]
#[command(name = "war")]
#[command(about = "Simulate the card game War and report how long games last")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a batch of games and print the series and its statistics
    Batch {
        /// JSON config file; flags override its values
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        games: Option<usize>,
        #[arg(long)]
        metric: Option<Metric>,
        /// Values per row of the printed series
        #[arg(long)]
        per_row: Option<usize>,
        #[command(flatten)]
        rules: RuleArgs,
        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Play a single game
    Play {
        #[command(flatten)]
        rules: RuleArgs,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct RuleArgs {
    /// Face-down cards per player per war
    #[arg(long)]
    burn: Option<usize>,
    /// Comparison cap per game
    #[arg(long)]
    max_rounds: Option<u64>,
    /// Recycle cap per game
    #[arg(long)]
    max_resets: Option<u64>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    tie_order: Option<TieOrder>,
}

impl RuleArgs {
    fn apply(self, mut config: SimConfig) -> SimConfig {
        if let Some(burn) = self.burn {
            config.burn_count = burn;
        }
        if let Some(rounds) = self.max_rounds {
            config.max_rounds = rounds;
        }
        if self.max_resets.is_some() {
            config.max_resets = self.max_resets;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(order) = self.tie_order {
            config.tie_order = order;
        }
        config
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Batch {
            config,
            games,
            metric,
            per_row,
            rules,
            json,
        } => {
            let mut sim = match config {
                Some(path) => SimConfig::from_json_file(&path)
                    .with_context(|| format!("loading {}", path.display()))?,
                None => SimConfig::default(),
            };
            if let Some(games) = games {
                sim.game_count = games;
            }
            if let Some(metric) = metric {
                sim.metric = metric;
            }
            if let Some(per_row) = per_row {
                sim.per_row = per_row;
            }
            let sim = rules.apply(sim);

            let report = BatchRunner::new(sim).context("invalid configuration")?.run();
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{report}");
            }
        }
        Commands::Play { rules, json } => {
            let sim = rules.apply(SimConfig::default());
            sim.validate().context("invalid configuration")?;

            let result = play_one_game(&sim, sim.seed);
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                match result.winner {
                    Some(winner) => println!("{winner} wins"),
                    None => println!("No result ({:?})", result.end),
                }
                println!("Seed:           {}", result.seed);
                println!("Rounds:         {}", result.rounds);
                println!("Resets:         {}", result.reset_count);
                println!("Wars:           {}", result.wars);
                println!("Longest war:    {}", result.longest_war);
                println!("Abandoned ties: {}", result.abandoned_ties);
            }
        }
    }

    Ok(())
}
