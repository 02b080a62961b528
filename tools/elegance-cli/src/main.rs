//! Elegance CLI - Command line tool for the perfume storefront.
//!
//! Commands:
//! - `elegance list` - Print the catalog listing for a filter and sort
//! - `elegance render` - Render a storefront page to HTML
//! - `elegance config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use elegance_observability::{init_logging, LogLevel, LoggingConfig};

use commands::{ConfigArgs, ListArgs, RenderArgs};
use config::StorefrontConfig;

/// Elegance CLI - Browse and render the perfume storefront
#[derive(Parser)]
#[command(name = "elegance")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the catalog listing
    List(ListArgs),

    /// Render a storefront page to HTML
    Render(RenderArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);

    // Catalog defaults may log fallback warnings while parsing; install
    // the subscriber first.
    let (cwd, config_path) = context::locate_config(cli.config.as_deref())?;
    let mut logging = match config_path {
        Some(ref path) => StorefrontConfig::load_logging(path)?,
        None => LoggingConfig::default(),
    };
    if cli.verbose {
        logging = logging.with_level(LogLevel::Debug);
    }
    init_logging(&logging);

    let ctx = context::Context::load(cwd, config_path, output)?;

    if let Some(ref path) = ctx.config_path {
        ctx.output.debug(&format!("Using config: {}", path.display()));
    }

    let result = match cli.command {
        Commands::List(args) => commands::list::run(args, &ctx),
        Commands::Render(args) => commands::render::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
