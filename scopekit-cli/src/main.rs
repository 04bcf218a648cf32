//! Scopekit CLI
//!
//! Command-line interface for inspecting, encoding and comparing SLP scope
//! lists.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod ui;

#[derive(Parser)]
#[command(name = "scopekit")]
#[command(about = "Scopekit CLI - Inspect and compare SLP scope lists", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON scope configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    /// Local scope list in wire form (can also be set via SCOPEKIT_SCOPES env var)
    #[arg(long, global = true)]
    scopes: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a scope list and show its canonical members
    Parse {
        /// Escaped, comma separated scope list
        list: String,
    },

    /// Build a scope list from raw scope names
    Encode {
        /// Raw scope names (may contain reserved characters)
        #[arg(required = true)]
        tokens: Vec<String>,
    },

    /// Show the canonical form of a scope name
    Canonicalize {
        /// Raw scope name
        token: String,
    },

    /// Compare two scope lists
    Compare {
        /// Left scope list
        left: String,

        /// Right scope list
        right: String,
    },

    /// Check whether a remote scope list matches the local configuration
    Match {
        /// Remote scope list
        remote: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("scopekit=debug,scopekit_lib=trace")
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("scopekit=info,scopekit_lib=warn")
            .with_writer(std::io::stderr)
            .init();
    }

    match cli.command {
        Commands::Parse { list } => {
            commands::parse::run(&list, cli.verbose)?;
        }
        Commands::Encode { tokens } => {
            commands::encode::run(&tokens, cli.verbose)?;
        }
        Commands::Canonicalize { token } => {
            commands::encode::canonicalize(&token);
        }
        Commands::Compare { left, right } => {
            commands::compare::run(&left, &right, cli.verbose)?;
        }
        Commands::Match { remote } => {
            let config = commands::load_config(cli.config.as_deref(), cli.scopes.as_deref())?;
            commands::matching::run(&config, &remote, cli.verbose)?;
        }
    }

    Ok(())
}
