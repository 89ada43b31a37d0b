use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use crate::errors::SdkError;
use crate::locator::{self, ModLocator};

/// Arguments for the locate command
#[derive(Args, Debug)]
pub struct LocateArgs {
    /// Package id to look up, e.g. "brrainz.harmony"
    pub package_id: String,

    /// Workshop content folder (falls back to RIMSDK_WORKSHOP_DIR)
    #[arg(long)]
    pub workshop_dir: Option<String>,

    /// Targeted game version, used to prefer matching version subfolders
    #[arg(long)]
    pub game_version: String,
}

/// Run the locate command: a one-shot query against the workshop content
/// folder, useful for checking what `generate` would resolve.
pub fn run(args: LocateArgs) -> Result<(), SdkError> {
    let content_root = args
        .workshop_dir
        .map(PathBuf::from)
        .or_else(locator::workshop_dir_from_env)
        .ok_or_else(|| {
            SdkError::MissingInput(
                "workshop content folder (--workshop-dir or RIMSDK_WORKSHOP_DIR)".to_string(),
            )
        })?;

    let loc = ModLocator::new(&content_root, &args.game_version);
    match loc.find(&args.package_id)? {
        Some(found) => {
            println!("{} Found {}", "✓".green().bold(), found.package_id.bold());
            println!("  {} Name: {}", "•".cyan(), found.name);
            println!("  {} File id: {}", "•".cyan(), found.file_id);
            if let Some(url) = &found.url {
                println!("  {} Url: {}", "•".cyan(), url);
            }
            println!(
                "  {} Installed at: {}",
                "•".cyan(),
                found.install_dir.display().to_string().dimmed()
            );
            Ok(())
        }
        None => Err(SdkError::PackageNotFound(args.package_id)),
    }
}
