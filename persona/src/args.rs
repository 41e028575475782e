use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Persona question answering service
#[derive(Debug, Parser)]
#[command(name = "persona", about = "Answers questions in a fixed persona's voice")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "persona.toml", env = "PERSONA_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "PERSONA_LISTEN")]
    pub listen: Option<SocketAddr>,

    /// Load environment variables from this file instead of `./.env`
    #[arg(long)]
    pub env_file: Option<PathBuf>,
}
