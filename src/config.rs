/// Command-line configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::ai::Seeding;

#[derive(Parser, Debug)]
#[command(name = "sky_duel")]
#[command(about = "Two-player terminal dogfight with crates, an enemy raider and a life pickup")]
pub struct Args {
    /// Directory holding background.txt
    #[arg(long, default_value = "data")]
    pub assets: PathBuf,

    /// Where M saves and L loads the players' positions
    #[arg(long, default_value = "data/save.txt")]
    pub save_file: PathBuf,

    /// Seed for the AI die (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Reseed the AI die from the wall clock every frame
    #[arg(long)]
    pub reseed_every_frame: bool,

    /// Target frames per second
    #[arg(long, default_value_t = 30)]
    pub fps: u32,

    /// Log destination (the terminal is in raw mode while playing)
    #[arg(long, default_value = "sky_duel.log")]
    pub log_file: PathBuf,
}

#[derive(Clone, Debug)]
pub struct GameConfig {
    pub assets_dir: PathBuf,
    pub save_file: PathBuf,
    pub seed: Option<u64>,
    pub seeding: Seeding,
    pub frame: Duration,
    pub log_file: PathBuf,
}

impl From<Args> for GameConfig {
    fn from(args: Args) -> Self {
        GameConfig {
            assets_dir: args.assets,
            save_file: args.save_file,
            seed: args.seed,
            seeding: if args.reseed_every_frame {
                Seeding::EveryFrame
            } else {
                Seeding::Once
            },
            frame: Duration::from_secs_f64(1.0 / args.fps.max(1) as f64),
            log_file: args.log_file,
        }
    }
}
