use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use blackbox_core::{AtomGenerator, Game, GameConfig, Position, RandomAtomGenerator};
use clap::Parser;

mod command;
mod session;

#[derive(Parser, Debug)]
#[command(version, about = "Find the atoms hidden in the black box", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::WarnLevel>,

    /// Place an atom at ROW,COL (repeatable); overrides random placement
    #[arg(long = "atom", value_name = "ROW,COL", value_parser = command::parse_position)]
    atoms: Vec<Position>,

    /// Number of atoms to hide when placing them randomly
    #[arg(short = 'n', long = "atoms", default_value_t = 5)]
    atom_count: usize,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// TOML file with scoring rules
    #[arg(short, long, value_name = "FILE")]
    rules: Option<PathBuf>,
}

fn load_rules(path: Option<&PathBuf>) -> Result<GameConfig> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("could not read rules from {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("invalid rules in {}", path.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let config = load_rules(args.rules.as_ref())?;

    let atoms = if args.atoms.is_empty() {
        let seed = args.seed.unwrap_or_else(rand::random);
        log::info!("placing {} atoms with seed {}", args.atom_count, seed);
        RandomAtomGenerator::new(seed, args.atom_count).generate()
    } else {
        args.atoms
    };

    let mut game = Game::with_config(config, &atoms).context("could not set up the board")?;

    let stdin = io::stdin();
    session::run(&mut game, stdin.lock(), io::stdout().lock())
}
