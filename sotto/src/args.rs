use std::path::PathBuf;

use clap::Parser;

/// Sotto speech-to-text service
#[derive(Debug, Parser)]
#[command(name = "sotto", about = "Whisper-backed speech-to-text over HTTP")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "sotto.toml", env = "SOTTO_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "SOTTO_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
