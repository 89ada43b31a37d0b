use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ManifestError;

pub const MOD_TOML: &str = "mod.toml";

/// `mod.toml`: the project manifest driving About.xml generation.
///
/// Every field can be overridden by a CLI flag on `rimsdk generate`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ModToml {
    pub r#mod: ModSection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<PathsSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<DependenciesSection>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ModSection {
    pub id: String,
    pub name: String,
    /// Comma-separated author list.
    pub authors: String,
    pub description: String,
    /// The game version this build targets, e.g. "1.4".
    pub game_version: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct PathsSection {
    /// Mod output folder; About/About.xml is written beneath it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<String>,
    /// Local workshop content folder used to resolve workshop dependencies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workshop_dir: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct DependenciesSection {
    /// Package ids resolved against the workshop content folder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workshop: Option<Vec<String>>,
    /// Sibling project folders whose own descriptors are read back.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<String>>,
    /// Package ids appended verbatim to the load-before list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_before: Option<Vec<String>>,
}

impl ModToml {
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    pub fn load_from_dir(dir: &Path) -> Result<Self, ManifestError> {
        let path = dir.join(MOD_TOML);
        if !path.is_file() {
            return Err(ManifestError::NotFound(dir.display().to_string()));
        }
        let content = std::fs::read_to_string(&path)?;
        Ok(Self::from_toml(&content)?)
    }

    pub fn write_to_dir(&self, dir: &Path) -> Result<(), ManifestError> {
        std::fs::create_dir_all(dir)?;
        std::fs::write(dir.join(MOD_TOML), self.to_toml()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"
[mod]
id = "author.foo"
name = "Foo"
authors = "Alice,Bob"
description = "A test mod"
game_version = "1.4"

[paths]
output_dir = "dist/Foo"
workshop_dir = "/steam/workshop/content/294100"

[dependencies]
workshop = ["brrainz.harmony"]
projects = ["../OtherMod"]
load_before = ["third.mod"]
"#;

    #[test]
    fn test_parse_full() {
        let manifest = ModToml::from_toml(FULL).unwrap();
        assert_eq!(manifest.r#mod.id, "author.foo");
        assert_eq!(manifest.r#mod.authors, "Alice,Bob");
        assert_eq!(manifest.r#mod.game_version, "1.4");

        let paths = manifest.paths.as_ref().unwrap();
        assert_eq!(paths.output_dir.as_deref(), Some("dist/Foo"));

        let deps = manifest.dependencies.as_ref().unwrap();
        assert_eq!(
            deps.workshop.as_deref(),
            Some(["brrainz.harmony".to_string()].as_slice())
        );
        assert_eq!(
            deps.load_before.as_deref(),
            Some(["third.mod".to_string()].as_slice())
        );
    }

    #[test]
    fn test_parse_minimal() {
        let manifest = ModToml::from_toml(
            r#"
[mod]
id = "author.bar"
name = "Bar"
authors = "Alice"
description = ""
game_version = "1.5"
"#,
        )
        .unwrap();
        assert!(manifest.paths.is_none());
        assert!(manifest.dependencies.is_none());
    }

    #[test]
    fn test_round_trip() {
        let manifest = ModToml::from_toml(FULL).unwrap();
        let rendered = manifest.to_toml().unwrap();
        let back = ModToml::from_toml(&rendered).unwrap();
        assert_eq!(back, manifest);
    }

    #[test]
    fn test_load_from_dir_missing() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = ModToml::load_from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, ManifestError::NotFound(_)));
    }

    #[test]
    fn test_write_and_load_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let manifest = ModToml::from_toml(FULL).unwrap();
        manifest.write_to_dir(dir.path()).unwrap();
        let back = ModToml::load_from_dir(dir.path()).unwrap();
        assert_eq!(back, manifest);
    }
}
