use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use minichess_engine::board::Variant;
use minichess_engine::engine::{EngineOptions, MoveExchange, TimeBudget};
use minichess_engine::tt::{DEFAULT_TT_BITS, MAX_TT_BITS};

#[derive(Parser, Debug)]
#[command(author, version, about = "Minichess move engine", long_about = None)]
struct Args {
    /// Search variant: 1-5 or random, negamax, alphabeta, iterative, transposition
    #[arg(long, default_value = "transposition")]
    variant: Variant,

    /// Start exchanging moves at once, using --variant
    #[arg(long)]
    skip_handshake: bool,

    /// log2 of the transposition table size
    #[arg(long, default_value_t = DEFAULT_TT_BITS, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_TT_BITS)))]
    tt_bits: u32,

    /// Depth for the fixed-depth variants
    #[arg(long)]
    depth: Option<u32>,

    /// Deepest iteration for the deepening variants
    #[arg(long)]
    max_depth: Option<u32>,

    /// Fixed thinking time per move instead of the schedule
    #[arg(long)]
    move_time_ms: Option<u64>,

    /// Seed for reproducible tie-breaking and random play
    #[arg(long)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // stdout carries protocol replies only
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let options = EngineOptions {
        tt_bits: args.tt_bits,
        depth: args.depth,
        max_depth: args.max_depth,
        node_limit: 0,
        time_budget: args
            .move_time_ms
            .map_or(TimeBudget::Schedule, TimeBudget::fixed_ms),
        seed: args.seed,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut exchange = if args.skip_handshake {
        MoveExchange::with_variant(stdin.lock(), stdout.lock(), options, args.variant)
    } else {
        MoveExchange::new(stdin.lock(), stdout.lock(), options)
    };

    exchange
        .run_session()
        .context("move exchange with the coordinator failed")?;
    Ok(())
}
