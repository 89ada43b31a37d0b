/// # Generate Command
///
/// Generate `About/About.xml` for a mod project from its `mod.toml`.
///
/// ## Functionality
///
/// - Reads the project manifest from `mod.toml` (CLI flags override fields)
/// - Resolves workshop dependencies against the local content folder
/// - Resolves sibling project references from their generated descriptors
/// - Writes the descriptor beneath the mod output folder
///
/// ## Example
///
/// ```bash
/// # Generate for the current project
/// rimsdk generate
///
/// # Generate for a specific project, overriding the output folder
/// rimsdk generate ./my-mod --output dist/MyMod
/// ```
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::builder::{self, AboutInputs};
use crate::errors::SdkError;
use crate::locator;
use crate::types::mod_toml::ModToml;

/// Arguments for the generate command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Path to the mod project (default: current directory)
    #[arg(default_value = ".")]
    pub path: String,

    /// Mod display name (overrides mod.toml)
    #[arg(long)]
    pub name: Option<String>,

    /// Package id, e.g. "author.mymod" (overrides mod.toml)
    #[arg(long)]
    pub package_id: Option<String>,

    /// Comma-separated author list (overrides mod.toml)
    #[arg(long)]
    pub authors: Option<String>,

    /// Mod description (overrides mod.toml)
    #[arg(long)]
    pub description: Option<String>,

    /// Targeted game version (overrides mod.toml)
    #[arg(long)]
    pub game_version: Option<String>,

    /// Mod output folder; About/About.xml is written beneath it (default: dist)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Workshop content folder used to resolve workshop dependencies
    #[arg(long)]
    pub workshop_dir: Option<String>,

    /// Additional workshop dependency package id (repeatable)
    #[arg(long = "dep")]
    pub deps: Vec<String>,

    /// Additional sibling project folder (repeatable)
    #[arg(long = "project-ref")]
    pub project_refs: Vec<String>,

    /// Additional load-before package id (repeatable)
    #[arg(long = "load-before")]
    pub load_before: Vec<String>,
}

/// Run the generate command
pub fn run(args: GenerateArgs) -> Result<(), SdkError> {
    let project_path = Path::new(&args.path);
    // Resolve the project root to an absolute path when possible so relative
    // paths in mod.toml are interpreted relative to the project directory.
    let project_root = match project_path.canonicalize() {
        Ok(p) => p,
        Err(_) => project_path.to_path_buf(),
    };

    let manifest = ModToml::load_from_dir(project_path)?;
    let inputs = merge_inputs(&manifest, &args, &project_root);

    println!("{}", "Generating About.xml...".bold().cyan());
    println!();
    println!(
        "  {} Mod: {}",
        "•".cyan(),
        format!("{} ({})", inputs.name, inputs.package_id).bold()
    );
    println!(
        "  {} Output: {}",
        "•".cyan(),
        inputs.output_dir.display().to_string().dimmed()
    );
    println!();

    let outcome = builder::generate_about(&inputs)?;

    println!();
    if outcome.report.has_errors() {
        eprintln!(
            "{} Wrote {} with {} unresolved problem(s)",
            "✗".red().bold(),
            outcome.about_path.display(),
            outcome.report.error_count()
        );
        return Err(SdkError::GenerationFailed(outcome.report.error_count()));
    }
    println!(
        "{} Wrote {}",
        "✓".green().bold(),
        outcome.about_path.display().to_string().green()
    );
    Ok(())
}

fn resolve_against_project(project_root: &Path, p: PathBuf) -> PathBuf {
    if p.is_absolute() {
        p
    } else {
        project_root.join(p)
    }
}

/// Manifest fields, CLI overrides and environment folded into one input set.
fn merge_inputs(manifest: &ModToml, args: &GenerateArgs, project_root: &Path) -> AboutInputs {
    let m = &manifest.r#mod;
    let paths = manifest.paths.clone().unwrap_or_default();
    let deps = manifest.dependencies.clone().unwrap_or_default();

    let output_dir = args
        .output
        .clone()
        .or(paths.output_dir)
        .unwrap_or_else(|| "dist".to_string());

    let workshop_dir = args
        .workshop_dir
        .clone()
        .map(PathBuf::from)
        .or_else(|| paths.workshop_dir.map(PathBuf::from))
        .or_else(locator::workshop_dir_from_env)
        .map(|p| resolve_against_project(project_root, p));

    let mut workshop_deps = deps.workshop.unwrap_or_default();
    workshop_deps.extend(args.deps.iter().cloned());

    let mut project_refs: Vec<PathBuf> = deps
        .projects
        .unwrap_or_default()
        .into_iter()
        .map(PathBuf::from)
        .collect();
    project_refs.extend(args.project_refs.iter().map(PathBuf::from));
    let project_refs = project_refs
        .into_iter()
        .map(|p| resolve_against_project(project_root, p))
        .collect();

    let mut load_before = deps.load_before.unwrap_or_default();
    load_before.extend(args.load_before.iter().cloned());

    AboutInputs {
        name: args.name.clone().unwrap_or_else(|| m.name.clone()),
        package_id: args.package_id.clone().unwrap_or_else(|| m.id.clone()),
        authors: args.authors.clone().unwrap_or_else(|| m.authors.clone()),
        description: args
            .description
            .clone()
            .unwrap_or_else(|| m.description.clone()),
        game_version: args
            .game_version
            .clone()
            .unwrap_or_else(|| m.game_version.clone()),
        output_dir: resolve_against_project(project_root, PathBuf::from(output_dir)),
        workshop_dir,
        workshop_deps,
        project_refs,
        load_before,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::mod_toml::{DependenciesSection, ModSection, PathsSection};

    fn manifest() -> ModToml {
        ModToml {
            r#mod: ModSection {
                id: "author.foo".to_string(),
                name: "Foo".to_string(),
                authors: "Alice".to_string(),
                description: "desc".to_string(),
                game_version: "1.4".to_string(),
            },
            paths: Some(PathsSection {
                output_dir: Some("out/Foo".to_string()),
                workshop_dir: None,
            }),
            dependencies: Some(DependenciesSection {
                workshop: Some(vec!["a.b".to_string()]),
                projects: Some(vec!["../Sibling".to_string()]),
                load_before: None,
            }),
        }
    }

    fn no_override(path: &str) -> GenerateArgs {
        GenerateArgs {
            path: path.to_string(),
            name: None,
            package_id: None,
            authors: None,
            description: None,
            game_version: None,
            output: None,
            workshop_dir: None,
            deps: Vec::new(),
            project_refs: Vec::new(),
            load_before: Vec::new(),
        }
    }

    #[test]
    fn test_merge_uses_manifest_values() {
        let root = Path::new("/proj");
        let inputs = merge_inputs(&manifest(), &no_override("."), root);
        assert_eq!(inputs.name, "Foo");
        assert_eq!(inputs.package_id, "author.foo");
        assert_eq!(inputs.output_dir, Path::new("/proj/out/Foo"));
        assert_eq!(inputs.project_refs, [Path::new("/proj/../Sibling")]);
        assert_eq!(inputs.workshop_deps, ["a.b"]);
    }

    #[test]
    fn test_cli_overrides_and_appends() {
        let root = Path::new("/proj");
        let mut args = no_override(".");
        args.name = Some("Renamed".to_string());
        args.output = Some("/abs/out".to_string());
        args.deps = vec!["c.d".to_string()];
        args.load_before = vec!["z.mod".to_string()];

        let inputs = merge_inputs(&manifest(), &args, root);
        assert_eq!(inputs.name, "Renamed");
        assert_eq!(inputs.output_dir, Path::new("/abs/out"));
        assert_eq!(inputs.workshop_deps, ["a.b", "c.d"]);
        assert_eq!(inputs.load_before, ["z.mod"]);
    }
}
