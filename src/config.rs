use clap::Parser;
use std::path::PathBuf;
use thiserror::Error;

use crate::pipewire::cli::{DEFAULT_PW_DUMP, DEFAULT_PW_LINK};
use crate::pipewire::PwCli;

/// The Snapcast sink node in PipeWire. It is expected to already exist.
pub const DEFAULT_TARGET_SINK: &str = "Snapcast";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {option}: {reason}")]
    InvalidValue { option: String, reason: String },
}

/// Pipe all desktop audio through Snapcast until SIGINT/SIGTERM.
///
/// The Snapcast sink must already exist, e.g. created by a systemd oneshot
/// unit running `pactl load-module module-pipe-sink
/// file=/run/snapserver/dispatch sink_name=Snapcast format=s16le rate=48000`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// PipeWire node name of the Snapcast sink
    #[arg(long, env = "SNAPCAST_LINK_TARGET_SINK", default_value = DEFAULT_TARGET_SINK)]
    pub target_sink: String,

    /// Program used to dump the PipeWire graph
    #[arg(long, env = "SNAPCAST_LINK_PW_DUMP", default_value = DEFAULT_PW_DUMP)]
    pub pw_dump: PathBuf,

    /// Program used to create and remove port links
    #[arg(long, env = "SNAPCAST_LINK_PW_LINK", default_value = DEFAULT_PW_LINK)]
    pub pw_link: PathBuf,
}

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkConfig {
    pub target_sink: String,
    pub pw_dump: PathBuf,
    pub pw_link: PathBuf,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            target_sink: DEFAULT_TARGET_SINK.to_string(),
            pw_dump: PathBuf::from(DEFAULT_PW_DUMP),
            pw_link: PathBuf::from(DEFAULT_PW_LINK),
        }
    }
}

impl LinkConfig {
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        let target_sink = args.target_sink.trim().to_string();
        if target_sink.is_empty() {
            return Err(ConfigError::InvalidValue {
                option: "--target-sink".to_string(),
                reason: "sink name cannot be empty".to_string(),
            });
        }

        Ok(Self {
            target_sink,
            pw_dump: args.pw_dump,
            pw_link: args.pw_link,
        })
    }

    /// Command line backend using the configured programs
    pub fn backend(&self) -> PwCli {
        PwCli::new(&self.pw_dump, &self.pw_link)
    }
}

/// Load configuration from the environment and the command line.
///
/// Errors are returned, not logged; the binary reports them once.
pub fn load_config() -> Result<LinkConfig, ConfigError> {
    let args = Args::parse();
    log::debug!("Parsed arguments: {:?}", args);

    let config = LinkConfig::from_args(args)?;
    log::info!("Linking default sink to {}", config.target_sink);
    Ok(config)
}
