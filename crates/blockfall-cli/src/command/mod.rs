use blockfall_engine::{DEFAULT_HEIGHT, DEFAULT_WIDTH, GRAVITY_INTERVAL, Game, GameConfig};
use clap::Parser;

use crate::{command::play::PlayApp, tui::Runtime};

mod play;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Board width in columns
    #[clap(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,
    /// Board height in rows
    #[clap(long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,
    /// Ticks between automatic descents
    #[clap(long, default_value_t = GRAVITY_INTERVAL)]
    gravity: u32,
    /// Seed for the piece sequence (random when omitted)
    #[clap(long)]
    seed: Option<u64>,
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    anyhow::ensure!(args.width >= 4, "board width must be at least 4 columns");
    anyhow::ensure!(args.height >= 4, "board height must be at least 4 rows");
    anyhow::ensure!(args.gravity > 0, "gravity interval must be at least 1 tick");

    let config = GameConfig {
        width: args.width,
        height: args.height,
        gravity_interval: args.gravity,
    };
    let game = match args.seed {
        Some(seed) => Game::with_seed(config, seed),
        None => Game::new(config),
    };

    let mut app = PlayApp::new(game);
    Runtime::with_tick_rate(PlayApp::TICK_RATE).run(&mut app)?;
    Ok(())
}
