use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "art-exhibition")]
#[command(about = "Browse an in-memory art exhibition catalog")]
pub struct CliConfig {
    /// Load galleries and artworks from a TOML catalog instead of the sample data
    #[arg(long)]
    pub catalog: Option<String>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Emit log lines as JSON
    #[arg(long)]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum Command {
    /// List all galleries
    Galleries,
    /// List all artworks
    Artworks,
    /// List the artworks in one gallery
    Gallery { id: i32 },
    /// Show one artwork
    Artwork { id: i32 },
    /// Look up a user by name
    Login { username: String },
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.catalog {
            validate_path("catalog", path)?;
        }
        Ok(())
    }
}
