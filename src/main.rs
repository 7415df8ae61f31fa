use anyhow::Result;
use clap::Parser;
use torus_snake::game::GameConfig;
use torus_snake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "torus-snake")]
#[command(version, about = "Classic snake on a wrap-around grid")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value = "32")]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value = "24")]
    height: usize,

    /// Simulation ticks per second
    #[arg(long, default_value = "10")]
    speed: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Create game configuration from CLI arguments
    let config = GameConfig {
        grid_width: cli.width,
        grid_height: cli.height,
        tick_rate: cli.speed,
    };
    config.validate()?;

    let mut human_mode = HumanMode::new(config)?;
    human_mode.run().await?;

    Ok(())
}
