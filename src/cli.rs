use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config;
use crate::error::Result;
use crate::models::{DelayRange, DemoConfig, LatencyPreset, ModelId};

#[derive(Parser, Debug)]
#[command(
    name = "helix-sim",
    about = "Offline simulator for the HelixFlow chat demo and pricing calculator"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run one simulated chat exchange
    Chat(ChatArgs),
    /// Estimate the monthly cost for a request volume
    Price(PriceArgs),
    /// List the simulated models
    Models {
        #[arg(long, value_enum, default_value = "human")]
        format: FormatArg,
    },
    /// Show the example prompts
    Prompts,
}

#[derive(Args, Debug)]
pub struct ChatArgs {
    #[arg(long)]
    pub message: String,
    #[arg(long, help = "Model identifier; unrecognized values use the fallback replies")]
    pub model: Option<ModelId>,
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long, value_enum)]
    pub latency: Option<LatencyArg>,
    #[arg(
        long,
        help = "Seed the reply selection and usage metrics; omit for random output"
    )]
    pub seed: Option<u64>,
    #[arg(long)]
    pub no_delay: bool,
    #[arg(long)]
    pub stream: bool,
    #[arg(long, value_enum, default_value = "human")]
    pub format: FormatArg,
}

#[derive(Args, Debug)]
pub struct PriceArgs {
    #[arg(long)]
    pub requests: u64,
    #[arg(long, value_enum, default_value = "human")]
    pub format: FormatArg,
}

#[derive(ValueEnum, Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormatArg {
    Human,
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum LatencyArg {
    Wide,
    Narrow,
}

impl From<LatencyArg> for LatencyPreset {
    fn from(value: LatencyArg) -> Self {
        match value {
            LatencyArg::Wide => LatencyPreset::Wide,
            LatencyArg::Narrow => LatencyPreset::Narrow,
        }
    }
}

// Explicit flags win over the config file.
pub fn build_demo_config(args: &ChatArgs) -> Result<DemoConfig> {
    let mut config = match &args.config {
        Some(path) => config::load_config(path)?,
        None => DemoConfig::default(),
    };

    if let Some(model) = &args.model {
        config.model = model.clone();
    }
    if let Some(latency) = args.latency {
        config.latency = latency.into();
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if args.no_delay {
        config.delay_ms = Some(DelayRange::none());
    }

    Ok(config)
}
