//! Shred - overwrite files in place with random data
//!
//! # Usage
//!
//! ```bash
//! # Overwrite a file three times (the default)
//! shred wipe secrets.txt
//!
//! # Seven passes, 64K chunks, then delete the file
//! shred wipe secrets.txt --passes 7 --chunk-size 64K --remove
//!
//! # Show the active configuration
//! shred config
//! ```

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use console::style;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod progress;

/// Shred - overwrite files in place with random data
#[derive(Parser)]
#[command(name = "shred")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Suppress ALL output (implies --quiet and --yes)
    #[arg(long, global = true)]
    silent: bool,

    /// Use a specific configuration file
    #[arg(long, global = true, value_name = "FILE", env = "SHRED_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Overwrite a file with random data
    Wipe {
        /// File to overwrite
        file: PathBuf,

        /// Number of overwrite passes
        #[arg(short = 'n', long)]
        passes: Option<u32>,

        /// Bytes per write (e.g., 1K, 64K, 1M)
        #[arg(short, long)]
        chunk_size: Option<String>,

        /// Read random bytes from this file or device instead of the system generator
        #[arg(long, value_name = "PATH")]
        random_source: Option<String>,

        /// Remove the file after overwriting
        #[arg(short = 'u', long)]
        remove: bool,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show or initialize the configuration file
    Config {
        /// Create a configuration file with default values
        #[arg(long)]
        init: bool,

        /// Print the configuration file path
        #[arg(long)]
        path: bool,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    // Set up panic handler for nicer error messages
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("{} {}", style("Error:").red().bold(), panic_info);
    }));

    if let Err(e) = run() {
        eprintln!("{} {}", style("Error:").red().bold(), e);

        // Show cause chain when backtraces are requested
        if std::env::var("RUST_BACKTRACE").is_ok() {
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("  {} {}", style("Caused by:").yellow(), cause);
                source = cause.source();
            }
        }

        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // --silent implies --quiet (no logs at all, not even errors to tracing)
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else if cli.quiet || cli.silent {
        EnvFilter::new("off")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let silent = cli.silent;

    match cli.command {
        Commands::Wipe {
            file,
            passes,
            chunk_size,
            random_source,
            remove,
            yes,
        } => commands::wipe::execute(commands::wipe::WipeArgs {
            file,
            passes,
            chunk_size,
            random_source,
            remove,
            skip_confirm: yes || silent, // --silent implies --yes
            quiet: cli.quiet,
            silent,
            config_file: cli.config,
        }),
        Commands::Config { init, path, json } => {
            commands::config::execute(commands::config::ConfigArgs {
                init,
                path,
                json,
                silent,
                config_file: cli.config,
            })
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    }
}
