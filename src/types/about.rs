use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::SdkError;
use crate::xml;

/// Root element name of a descriptor document.
pub const ROOT_ELEMENT: &str = "ModMetaData";

/// Descriptor location, relative to a mod (or sibling project) folder.
pub const ABOUT_DIR: &str = "About";
pub const ABOUT_FILE: &str = "About.xml";

/// Side file holding the numeric workshop id of a published sibling project.
pub const PUBLISHED_FILE_ID_FILE: &str = "PublishedFileId.txt";

/// Longest description the target format accepts. Longer text is cut to
/// exactly this many characters; the cut may land mid-word.
pub const MAX_DESCRIPTION_LEN: usize = 8000;

/// Deep-link template for a workshop item page.
const WORKSHOP_LINK_TEMPLATE: &str = "steam://url/CommunityFilePage/{fileId}";

/// Package ids look like "author.modname": dotted segments of letters and
/// digits, at least two segments.
pub const PACKAGE_ID_PATTERN: &str = r"^[A-Za-z][A-Za-z0-9]*(\.[A-Za-z0-9]+)+$";

pub fn is_valid_package_id(id: &str) -> bool {
    let re = Regex::new(PACKAGE_ID_PATTERN).unwrap();
    re.is_match(id)
}

/// Build a storefront deep link for a workshop file id.
pub fn workshop_link(file_id: &str) -> String {
    WORKSHOP_LINK_TEMPLATE.replace("{fileId}", file_id)
}

/// A game-style XML list: repeated `<li>` children under a wrapper element.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct XmlList {
    #[serde(default)]
    pub li: Vec<String>,
}

impl From<Vec<String>> for XmlList {
    fn from(li: Vec<String>) -> Self {
        Self { li }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct DependencyList {
    #[serde(default)]
    pub li: Vec<ModDependencyItem>,
}

/// One mod this descriptor depends on, either a workshop mod or a sibling
/// project's published package.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ModDependencyItem {
    pub package_id: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steam_workshop_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
}

/// The About.xml descriptor document.
///
/// Field order is serialization order. Exactly one of `author` and `authors`
/// is set by the builder, depending on how many authors were declared.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ModMetaData {
    pub package_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authors: Option<XmlList>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub supported_versions: XmlList,
    pub mod_dependencies: DependencyList,
    pub load_before: XmlList,
}

impl ModMetaData {
    pub fn load(path: &Path) -> Result<Self, SdkError> {
        xml::read_file(path)
    }

    /// Write the descriptor as a generated document, creating parent
    /// directories and overwriting any existing file.
    pub fn write(&self, path: &Path) -> Result<(), SdkError> {
        xml::write_file(path, self, ROOT_ELEMENT)
    }

    pub fn add_dependency(&mut self, dep: ModDependencyItem) {
        self.mod_dependencies.li.push(dep);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ModMetaData {
        ModMetaData {
            package_id: "author.foo".to_string(),
            name: "Foo".to_string(),
            author: None,
            authors: Some(XmlList::from(vec![
                "Alice".to_string(),
                "Bob".to_string(),
            ])),
            description: "A test mod".to_string(),
            url: Some("https://example.com/foo".to_string()),
            supported_versions: XmlList::from(vec!["1.4".to_string()]),
            mod_dependencies: DependencyList {
                li: vec![ModDependencyItem {
                    package_id: "other.mod".to_string(),
                    display_name: "Other".to_string(),
                    steam_workshop_url: Some(workshop_link("123")),
                    download_url: None,
                }],
            },
            load_before: XmlList::from(vec!["third.mod".to_string()]),
        }
    }

    #[test]
    fn test_round_trip() {
        let meta = sample();
        let doc = crate::xml::to_document(&meta, ROOT_ELEMENT).unwrap();
        let back: ModMetaData = crate::xml::from_xml(&doc).unwrap();
        assert_eq!(back, meta);
    }

    #[test]
    fn test_multi_author_shape() {
        let doc = crate::xml::to_xml(&sample(), ROOT_ELEMENT).unwrap();
        assert!(doc.contains("<authors>"));
        assert!(doc.contains("<li>Alice</li>"));
        assert!(doc.contains("<li>Bob</li>"));
        assert!(!doc.contains("<author>"));
    }

    #[test]
    fn test_single_author_shape() {
        let mut meta = sample();
        meta.authors = None;
        meta.author = Some("Alice".to_string());
        let doc = crate::xml::to_xml(&meta, ROOT_ELEMENT).unwrap();
        assert!(doc.contains("<author>Alice</author>"));
        assert!(!doc.contains("<authors>"));
    }

    #[test]
    fn test_element_names_match_format() {
        let doc = crate::xml::to_xml(&sample(), ROOT_ELEMENT).unwrap();
        for element in [
            "<ModMetaData>",
            "<packageId>",
            "<supportedVersions>",
            "<modDependencies>",
            "<displayName>",
            "<steamWorkshopUrl>",
            "<loadBefore>",
        ] {
            assert!(doc.contains(element), "missing {} in:\n{}", element, doc);
        }
    }

    #[test]
    fn test_write_and_load() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("About").join("About.xml");

        let meta = sample();
        meta.write(&path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("<?xml"));
        assert!(content.contains(crate::xml::GENERATED_COMMENT));

        // overwriting an existing file is fine
        let mut second = sample();
        second.name = "Foo 2".to_string();
        second.write(&path).unwrap();

        let back = ModMetaData::load(&path).unwrap();
        assert_eq!(back, second);
    }

    #[test]
    fn test_workshop_link() {
        assert_eq!(
            workshop_link("2009463077"),
            "steam://url/CommunityFilePage/2009463077"
        );
        assert_eq!(workshop_link("-1"), "steam://url/CommunityFilePage/-1");
    }

    #[test]
    fn test_package_id_validation() {
        assert!(is_valid_package_id("author.foo"));
        assert!(is_valid_package_id("a.b.c"));
        assert!(is_valid_package_id("Author2.Mod3"));
        assert!(!is_valid_package_id(""));
        assert!(!is_valid_package_id("nodots"));
        assert!(!is_valid_package_id(".leading"));
        assert!(!is_valid_package_id("trailing."));
        assert!(!is_valid_package_id("has space.mod"));
    }
}
