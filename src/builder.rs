/// # Descriptor Builder
///
/// Assembles the About.xml descriptor for a mod project in a single pass:
/// gather inputs, resolve dependency metadata, shape the document, write it.
///
/// ## Steps
///
/// 1. Validate the package id and split the author list
/// 2. Trim the description to the format limit
/// 3. Collect supported versions (targeted version + output subfolders)
/// 4. Resolve workshop dependencies against the content folder
/// 5. Resolve sibling project references from their own descriptors
/// 6. Write `About/About.xml` under the output folder
///
/// Per-item resolution failures land in the [`BuildReport`] and the file is
/// still written; missing required inputs and I/O failures abort instead.
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::SdkError;
use crate::locator::ModLocator;
use crate::report::BuildReport;
use crate::types::about::{
    ABOUT_DIR, ABOUT_FILE, MAX_DESCRIPTION_LEN, ModDependencyItem, ModMetaData,
    PUBLISHED_FILE_ID_FILE, XmlList, is_valid_package_id, workshop_link,
};
use crate::version::GameVersion;

/// Everything a generation run needs, already merged from the project
/// manifest, CLI flags and environment.
#[derive(Debug, Clone)]
pub struct AboutInputs {
    pub name: String,
    pub package_id: String,
    /// Comma-separated author list.
    pub authors: String,
    pub description: String,
    pub game_version: String,
    /// Mod output folder; the descriptor goes to `About/About.xml` beneath it.
    pub output_dir: PathBuf,
    /// Workshop content folder, required only when `workshop_deps` is non-empty.
    pub workshop_dir: Option<PathBuf>,
    pub workshop_deps: Vec<String>,
    pub project_refs: Vec<PathBuf>,
    pub load_before: Vec<String>,
}

#[derive(Debug)]
pub struct BuildOutcome {
    pub descriptor: ModMetaData,
    pub report: BuildReport,
    pub about_path: PathBuf,
}

pub fn generate_about(inputs: &AboutInputs) -> Result<BuildOutcome, SdkError> {
    if inputs.name.trim().is_empty() {
        return Err(SdkError::MissingInput("mod name must not be empty".to_string()));
    }
    if !is_valid_package_id(&inputs.package_id) {
        return Err(SdkError::InvalidPackageId(inputs.package_id.clone()));
    }
    let mut authors = split_authors(&inputs.authors);
    if authors.is_empty() {
        return Err(SdkError::MissingInput(
            "at least one author is required".to_string(),
        ));
    }

    let mut about = ModMetaData {
        package_id: inputs.package_id.clone(),
        name: inputs.name.clone(),
        description: trim_description(&inputs.description),
        ..Default::default()
    };
    if authors.len() == 1 {
        about.author = Some(authors.remove(0));
    } else {
        about.authors = Some(XmlList::from(authors));
    }
    about.supported_versions = XmlList::from(collect_supported_versions(
        &inputs.game_version,
        &inputs.output_dir,
    )?);

    let mut report = BuildReport::new();
    resolve_workshop_dependencies(inputs, &mut about, &mut report)?;
    resolve_project_references(inputs, &mut about, &mut report);
    about.load_before = XmlList::from(inputs.load_before.clone());

    // written even on partial failure, so the output stays inspectable
    let about_path = inputs.output_dir.join(ABOUT_DIR).join(ABOUT_FILE);
    about.write(&about_path)?;

    Ok(BuildOutcome {
        descriptor: about,
        report,
        about_path,
    })
}

/// Split a comma-separated author list, dropping empty entries.
fn split_authors(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Cut the description to [`MAX_DESCRIPTION_LEN`] characters. Text at or
/// under the limit passes through untouched.
fn trim_description(raw: &str) -> String {
    if raw.chars().count() <= MAX_DESCRIPTION_LEN {
        raw.to_string()
    } else {
        raw.chars().take(MAX_DESCRIPTION_LEN).collect()
    }
}

/// The targeted version plus every output subfolder that parses as a
/// version, deduplicated and sorted ascending by version semantics.
fn collect_supported_versions(current: &str, output_dir: &Path) -> Result<Vec<String>, SdkError> {
    let mut versions = vec![current.to_string()];
    if output_dir.is_dir() {
        for entry in fs::read_dir(output_dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if GameVersion::is_version_str(name) && !versions.iter().any(|v| v == name) {
                    versions.push(name.to_string());
                }
            }
        }
    }
    versions.sort_by_cached_key(|v| v.parse::<GameVersion>().ok());
    Ok(versions)
}

fn resolve_workshop_dependencies(
    inputs: &AboutInputs,
    about: &mut ModMetaData,
    report: &mut BuildReport,
) -> Result<(), SdkError> {
    if inputs.workshop_deps.is_empty() {
        return Ok(());
    }
    let Some(content_root) = &inputs.workshop_dir else {
        return Err(SdkError::MissingInput(format!(
            "a workshop content folder is required to resolve {} workshop dependencies",
            inputs.workshop_deps.len()
        )));
    };

    let locator = ModLocator::new(content_root, &inputs.game_version);
    for dep_id in &inputs.workshop_deps {
        match locator.find(dep_id)? {
            Some(found) => {
                println!(
                    "  {} {} {}",
                    "+".green(),
                    dep_id,
                    format!("(workshop {})", found.file_id).dimmed()
                );
                about.add_dependency(ModDependencyItem {
                    package_id: found.package_id,
                    display_name: found.name,
                    steam_workshop_url: Some(workshop_link(&found.file_id.to_string())),
                    download_url: found.url,
                });
            }
            None => report.error(format!(
                "Could not find mod {}. Do you actually subscribe to the mod on Steam? \
                 If yes, is the workshop content folder configured correctly? \
                 Right now it's pointing to '{}'.",
                dep_id,
                content_root.display()
            )),
        }
    }
    Ok(())
}

fn resolve_project_references(
    inputs: &AboutInputs,
    about: &mut ModMetaData,
    report: &mut BuildReport,
) {
    for project_dir in &inputs.project_refs {
        let about_path = project_dir.join(ABOUT_DIR).join(ABOUT_FILE);
        // not every referenced project is a mod package (library-only projects)
        if !about_path.is_file() {
            continue;
        }
        let sibling = match ModMetaData::load(&about_path) {
            Ok(meta) => meta,
            Err(e) => {
                report.error(format!(
                    "Failed to read sibling descriptor '{}': {}",
                    about_path.display(),
                    e
                ));
                continue;
            }
        };
        let file_id = read_published_file_id(project_dir);
        println!(
            "  {} {} {}",
            "+".green(),
            sibling.package_id,
            "(project reference)".dimmed()
        );
        about.add_dependency(ModDependencyItem {
            package_id: sibling.package_id,
            display_name: sibling.name,
            steam_workshop_url: Some(workshop_link(&file_id)),
            download_url: sibling.url,
        });
    }
}

/// The sibling's published workshop id, from the side file next to its
/// descriptor. Defaults to "-1" when the file is missing or empty.
fn read_published_file_id(project_dir: &Path) -> String {
    let path = project_dir.join(ABOUT_DIR).join(PUBLISHED_FILE_ID_FILE);
    match fs::read_to_string(&path) {
        Ok(content) if !content.trim().is_empty() => content.trim().to_string(),
        _ => "-1".to_string(),
    }
}
