//=========================================================================
// UniverseCatch: Binary Entry Point
//=========================================================================

use anyhow::{Context, Result};
use log::info;

use universe_catch::config::CONFIG_FILE;
use universe_catch::{GameBuilder, GameConfig};

fn main() -> Result<()> {
    let config = GameConfig::load(CONFIG_FILE).context("failed to load configuration")?;

    let default_filter = if config.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();
    info!("{} {}", config.title, config.version);

    GameBuilder::new(config)
        .with_default_scenes()
        .build()
        .context("failed to set up the game")?
        .run()
        .context("game stopped with an error")
}
