use std::path::PathBuf;

use ar_forecast::SweepConfig;
use clap::Parser;

/// Sweep AR orders over a synthetic price path and forecast with the best one.
#[derive(Parser, Debug)]
#[command(
    name = "ar_sweep",
    version,
    about = "AR order sweep and forecast on synthetic GBM prices"
)]
pub struct Cli {
    /// Path to TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the artifact directory from config.
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Override the RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Override the smallest AR order swept.
    #[arg(long)]
    pub min_order: Option<usize>,

    /// Override the largest AR order swept.
    #[arg(long)]
    pub max_order: Option<usize>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Apply command-line overrides on top of a loaded config
    pub fn apply_overrides(&self, config: &mut SweepConfig) {
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(min) = self.min_order {
            config.orders.min = min;
        }
        if let Some(max) = self.max_order {
            config.orders.max = max;
        }
    }
}
