//! CLI command implementations.

pub mod config;
pub mod list;
pub mod render;

use clap::{Args, Subcommand};

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Category filter (all, luxury, evening, casual, premium).
    #[arg(short, long)]
    pub category: Option<String>,

    /// Sort key (featured, price-low, price-high, rating, name).
    #[arg(short, long)]
    pub sort: Option<String>,

    /// Layout (grid or list).
    #[arg(long)]
    pub view: Option<String>,
}

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Page path, with an optional query string (e.g. "/?sort=rating").
    #[arg(default_value = "/")]
    pub path: String,

    /// Theme to render with (light or dark).
    #[arg(short, long)]
    pub theme: Option<String>,

    /// Write the HTML to this file instead of stdout.
    #[arg(short, long)]
    pub out: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Write a default elegance.toml
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
}
