use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::layout::LayoutArgs;

#[derive(Parser)]
#[command(name = "stackboard")]
#[command(about = "Stackboard CLI - function-stack diagrams for the 16 types", long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the 16 types and their function stacks
    Types,
    /// Print the stack for a type as JSON
    Stack {
        /// Type code, e.g. INFP
        code: String,
        /// standard or jumper
        #[arg(long, default_value = "standard")]
        variant: String,
    },
    /// Compute a board layout as JSON
    Layout(LayoutArgs),
    /// Manage the layout configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
        /// Use this file instead of the default location
        #[arg(long, global = true)]
        config: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write the default configuration if no file exists
    Init,
    /// Print the effective configuration
    Show,
    /// Print the configuration file path
    Path,
}

fn init_logging(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Types => commands::types::run()?,
        Commands::Stack { code, variant } => commands::stack::run(&code, &variant)?,
        Commands::Layout(args) => commands::layout::run(&args)?,
        Commands::Config { action, config } => match action {
            ConfigAction::Init => commands::config::init(config)?,
            ConfigAction::Show => commands::config::show(config)?,
            ConfigAction::Path => commands::config::path(config)?,
        },
    }

    Ok(())
}
