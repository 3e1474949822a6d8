use anyhow::Context;
use clap::Parser;
use commonware_codec::DecodeExt;
use commonware_runtime::{tokio as cw_tokio, Runner};
use rand::RngCore;
use std::path::PathBuf;
use tracing::info;
use zoomtrack_simulator::{SessionReport, Simulator, SimulatorConfig, Strategy};
use zoomtrack_types::{
    race::{find_animal, BetAmount},
    Seed,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Hex-encoded 32-byte session seed; random when omitted.
    #[arg(short, long)]
    seed: Option<String>,

    /// Number of races to play.
    #[arg(short, long, default_value_t = 10)]
    races: u64,

    /// Stake per race in chips (10, 25, 50 or 100).
    #[arg(short, long, default_value_t = 10)]
    bet: u64,

    /// Fixed animal id to back every race (overrides --strategy).
    #[arg(short, long)]
    animal: Option<u8>,

    /// Pick strategy: favorite, rotate or random.
    #[arg(long, default_value = "rotate")]
    strategy: String,

    /// Path to a YAML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Emit the session report as JSON on stdout.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    // Parse args
    let args = Args::parse();

    // Create logger
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // Resolve configuration
    let config = match &args.config {
        Some(path) => SimulatorConfig::load(path)?,
        None => SimulatorConfig::default(),
    };
    let engine_config = config
        .into_engine_config()
        .context("invalid configuration")?;

    // Resolve seed
    let seed = match &args.seed {
        Some(hex) => {
            let bytes = commonware_utils::from_hex(hex).context("invalid seed hex format")?;
            Seed::decode(&mut bytes.as_slice()).context("failed to decode seed")?
        }
        None => {
            let mut bytes = [0u8; 32];
            rand::thread_rng().fill_bytes(&mut bytes);
            Seed(bytes)
        }
    };

    // Resolve session parameters
    let bet = BetAmount::from_chips(args.bet)
        .with_context(|| format!("stake {} is not an offered denomination", args.bet))?;
    let strategy = Strategy::parse(&args.strategy)
        .with_context(|| format!("unknown strategy {:?}", args.strategy))?;
    if let Some(animal) = args.animal {
        if find_animal(&engine_config.catalog, animal).is_none() {
            anyhow::bail!("animal id {animal} is not in the catalog");
        }
    }

    let races = args.races;
    let fixed = args.animal;
    let json = args.json;

    // Run the session
    let executor = cw_tokio::Runner::new(cw_tokio::Config::default());
    let report: SessionReport = executor.start(|context| async move {
        let mut simulator = Simulator::new(context, engine_config, seed);
        simulator.run(races, strategy, fixed, bet).await
    });

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("failed to serialize report")?
        );
    } else {
        info!(
            races = report.races_run,
            staked = report.total_staked,
            won = report.total_won,
            final_balance = report.final_balance,
            last_winner = %report.last_winner,
            "session complete"
        );
    }

    Ok(())
}
