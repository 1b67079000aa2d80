mod commands;
mod stop;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sweepalign_core::{AlignConfig, Config, MatchMode, NoMatchPolicy, SweepConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::stop::StopSignal;

#[derive(Parser)]
#[command(name = "sweepalign")]
#[command(about = "Rotational alignment of 360-degree range sweeps")]
struct Args {
    /// Configuration file (TOML)
    #[arg(short, long, global = true, default_value = "sweepalign.toml")]
    config: PathBuf,

    /// Override the match mode
    #[arg(long, global = true, env = "SWEEPALIGN_MODE")]
    mode: Option<MatchMode>,

    /// Override what a failed match does to the published offset
    #[arg(long, global = true)]
    on_no_match: Option<NoMatchPolicy>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Find the rotation of a profile relative to a reference
    Align {
        /// Reference profile (.bin frame or JSON)
        #[arg(short, long)]
        reference: PathBuf,
        /// Profile to align (.bin frame or JSON)
        #[arg(short, long)]
        profile: PathBuf,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Decode a raw 1080-byte sweep frame into a JSON profile
    Decode {
        input: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Store a sweep as the alignment reference
    Reference {
        input: PathBuf,
        #[arg(short, long)]
        output: PathBuf,
        #[arg(short, long, default_value = "default")]
        label: String,
    },
    /// Replay a capture of raw sweep frames through the alignment worker
    Replay {
        capture: PathBuf,
        /// Reference to align against (defaults to the first sweep)
        #[arg(short, long)]
        reference: Option<PathBuf>,
        /// Delay between sweeps in milliseconds
        #[arg(short, long, default_value_t = 0)]
        interval_ms: u64,
        /// Per-heading settle delay in milliseconds (overrides [sweep] settle_ms)
        #[arg(long)]
        settle_ms: Option<u64>,
        /// Print one JSON report per sweep
        #[arg(long)]
        json: bool,
    },
    /// Align a synthetic sweep against a rotated copy of itself
    Simulate {
        #[arg(short, long)]
        shift: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Number of samples to perturb in the rotated copy
        #[arg(short, long, default_value_t = 0)]
        noise: usize,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let directive = match args.verbose {
        0 => "sweepalign=info",
        1 => "sweepalign=debug",
        _ => "sweepalign=trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive.parse()?))
        .init();

    let config = load_config(&args.config);
    let sweep_config = config.sweep;
    let align_config = apply_overrides(config.align, args.mode, args.on_no_match);

    match args.command {
        Command::Align {
            reference,
            profile,
            json,
        } => {
            commands::align::run(&reference, &profile, align_config, json)?;
        }
        Command::Decode { input, output } => {
            commands::decode::run(&input, output.as_deref())?;
        }
        Command::Reference {
            input,
            output,
            label,
        } => {
            commands::reference::run(&input, &output, &label)?;
        }
        Command::Replay {
            capture,
            reference,
            interval_ms,
            settle_ms,
            json,
        } => {
            let stop = Arc::new(StopSignal::new());
            let handler_signal = Arc::clone(&stop);
            ctrlc::set_handler(move || {
                info!("Interrupt received, stopping replay...");
                handler_signal.stop();
            })?;

            commands::replay::run(
                &capture,
                reference.as_deref(),
                align_config,
                &with_settle_override(sweep_config, settle_ms),
                Duration::from_millis(interval_ms),
                json,
                stop,
            )?;
        }
        Command::Simulate { shift, seed, noise } => {
            let options = commands::simulate::SimulateOptions { shift, seed, noise };
            commands::simulate::run(&options, align_config)?;
        }
    }

    Ok(())
}

fn load_config(path: &Path) -> Config {
    match Config::load(path) {
        Ok(config) => {
            info!("Loaded config from {:?}", path);
            config
        }
        Err(e) if e.is_not_found() => Config::default(),
        Err(e) => {
            warn!("Failed to load config: {}, using defaults", e);
            Config::default()
        }
    }
}

fn apply_overrides(
    mut config: AlignConfig,
    mode: Option<MatchMode>,
    on_no_match: Option<NoMatchPolicy>,
) -> AlignConfig {
    if let Some(mode) = mode {
        config.mode = mode;
    }
    if let Some(policy) = on_no_match {
        config.on_no_match = policy;
    }
    config
}

fn with_settle_override(mut config: SweepConfig, settle_ms: Option<u64>) -> SweepConfig {
    if let Some(settle_ms) = settle_ms {
        config.settle_ms = settle_ms;
    }
    config
}
