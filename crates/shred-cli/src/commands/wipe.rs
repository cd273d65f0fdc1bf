//! Wipe command - overwrites a file with random data
//!
//! This is the main functionality of shred. It handles:
//! - Merging command-line flags over persistent settings
//! - Target validation
//! - User confirmation
//! - Running the overwrite engine with progress display
//! - Optional removal of the file afterwards

use anyhow::{bail, Context, Result};
use console::style;
use dialoguer::Confirm;
use std::path::PathBuf;

use shred_core::{
    format_duration, parse_size, remove_target, resolve, RandomSource, Settings, ShredConfig,
    ShredEvent, Shredder,
};

use crate::progress::{create_shred_progress_bar, format_size};

/// Arguments for the wipe command
pub struct WipeArgs {
    pub file: PathBuf,
    pub passes: Option<u32>,
    pub chunk_size: Option<String>,
    pub random_source: Option<String>,
    pub remove: bool,
    pub skip_confirm: bool,
    pub quiet: bool,
    pub silent: bool,
    pub config_file: Option<PathBuf>,
}

/// Conditionally println based on silent mode
macro_rules! println_if {
    ($silent:expr) => {
        if !$silent {
            println!();
        }
    };
    ($silent:expr, $($arg:tt)*) => {
        if !$silent {
            println!($($arg)*);
        }
    };
}

/// Execute the wipe command
pub fn execute(args: WipeArgs) -> Result<()> {
    let settings = Settings::load_from_path(args.config_file.clone().or_else(Settings::config_path));
    let config = build_config(&args, &settings)?;
    let silent = args.silent || args.quiet || settings.behavior.quiet;
    let skip_confirm = args.skip_confirm || settings.behavior.skip_confirmation;
    let remove = args.remove || settings.shred.remove;

    // Step 1: Validate target
    println_if!(
        silent,
        "{} {}",
        style("Target:").bold(),
        style(args.file.display()).cyan()
    );

    let target = resolve(&args.file)
        .with_context(|| format!("Failed to open target: {}", args.file.display()))?;

    println_if!(
        silent,
        "  {} {} ({} passes, {} chunks, {} random source)",
        style("✓").green(),
        format_size(target.length),
        config.passes,
        format_size(config.chunk_size as u64),
        config.random_source
    );

    // Step 2: Confirmation
    if !skip_confirm {
        let action = if remove {
            "Overwrite and remove"
        } else {
            "Overwrite"
        };
        let proceed = Confirm::new()
            .with_prompt(format!(
                "{} {}? Its contents cannot be recovered",
                action,
                target.path.display()
            ))
            .default(false)
            .interact()?;

        if !proceed {
            println!("{}", style("Aborted.").yellow());
            return Ok(());
        }
    }

    // Step 3: Overwrite
    let name = target
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| target.path.display().to_string());
    let pb = create_shred_progress_bar(&name, silent);

    let mut handle = Shredder::with_config(config)
        .spawn_target(target.clone())
        .context("Failed to start shred")?;

    let mut outcome = None;
    while let Some(event) = handle.next_event() {
        match event {
            ShredEvent::Progress(percent) => pb.set_position(u64::from(percent)),
            ShredEvent::Finished(result) => outcome = Some(result),
        }
    }

    let report = match outcome {
        Some(Ok(report)) => {
            pb.finish_and_clear();
            report
        }
        Some(Err(e)) => {
            pb.abandon();
            return Err(e).with_context(|| format!("Failed to shred {}", target.path.display()));
        }
        None => {
            pb.abandon();
            bail!("Shred of {} ended without a result", target.path.display());
        }
    };

    println_if!(
        silent,
        "  {} {} passes, {} writes in {} ({})",
        style("✓").green(),
        report.passes,
        report.writes,
        format_duration(report.elapsed),
        report.speed_display()
    );

    // Step 4: Optional removal
    if remove {
        remove_target(&target.path)
            .with_context(|| format!("Overwrote {} but could not remove it", target.path.display()))?;
        println_if!(silent, "  {} Removed", style("✓").green());
    }

    println_if!(silent);
    println_if!(
        silent,
        "{}",
        style(format!("✓ Shredded {}", target.path.display()))
            .green()
            .bold()
    );

    Ok(())
}

/// Merge command-line overrides over the loaded settings
fn build_config(args: &WipeArgs, settings: &Settings) -> Result<ShredConfig> {
    let mut config = settings
        .shred
        .to_shred_config()
        .context("Invalid [shred] settings in configuration file")?;

    if let Some(passes) = args.passes {
        config = config.passes(passes);
    }

    if let Some(ref chunk_size) = args.chunk_size {
        let size =
            parse_size(chunk_size).with_context(|| format!("Invalid chunk size: {}", chunk_size))?;
        config = config.chunk_size(size);
    }

    if let Some(ref source) = args.random_source {
        config = config.random_source(source.parse::<RandomSource>().unwrap_or_default());
    }

    config.validate()?;
    Ok(config)
}
