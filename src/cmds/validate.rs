use clap::Args;
use colored::Colorize;
use std::path::Path;

use crate::errors::SdkError;
use crate::types::about::{ModMetaData, is_valid_package_id};

/// Arguments for the validate command
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to a generated About.xml
    pub file: String,
}

/// Run the validate command
pub fn run(args: ValidateArgs) -> Result<(), SdkError> {
    let meta = ModMetaData::load(Path::new(&args.file))?;
    let issues = descriptor_issues(&meta);

    if issues.is_empty() {
        println!("{} {} looks good.", "✓".green(), args.file);
        return Ok(());
    }

    println!(
        "{} Found {} issue(s) in {}:",
        "Summary:".yellow(),
        issues.len(),
        args.file
    );
    for issue in &issues {
        println!("  - {}", issue);
    }
    Err(SdkError::ValidationFailed(issues.len()))
}

/// Sanity problems in a descriptor, one message per finding.
pub fn descriptor_issues(meta: &ModMetaData) -> Vec<String> {
    let mut issues = Vec::new();

    if meta.package_id.is_empty() {
        issues.push("packageId is empty".to_string());
    } else if !is_valid_package_id(&meta.package_id) {
        issues.push(format!(
            "packageId '{}' is not a valid package id",
            meta.package_id
        ));
    }
    if meta.name.is_empty() {
        issues.push("name is empty".to_string());
    }
    match (&meta.author, &meta.authors) {
        (None, None) => issues.push("no author or authors entry".to_string()),
        (Some(_), Some(_)) => issues.push("both author and authors are set".to_string()),
        (None, Some(list)) if list.li.is_empty() => {
            issues.push("authors list is empty".to_string())
        }
        _ => {}
    }
    if meta.supported_versions.li.is_empty() {
        issues.push("supportedVersions is empty".to_string());
    }
    for dep in &meta.mod_dependencies.li {
        if dep.package_id.is_empty() {
            issues.push("a dependency entry has no packageId".to_string());
        }
        if dep.display_name.is_empty() {
            issues.push(format!("dependency '{}' has no displayName", dep.package_id));
        }
        if let Some(link) = &dep.steam_workshop_url {
            if !link.starts_with("steam://") {
                issues.push(format!(
                    "dependency '{}' has a malformed workshop link '{}'",
                    dep.package_id, link
                ));
            }
        }
    }
    issues
}
