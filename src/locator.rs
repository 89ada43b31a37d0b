/// # Workshop Mod Locator
///
/// Maps a package id to the metadata of a locally installed workshop mod by
/// scanning a content folder (one subdirectory per installed item, named by
/// its numeric file id).
///
/// ## Match policy
///
/// Entries are scanned in lexicographic directory-name order and the first
/// match wins, so a lookup is deterministic even when several installed items
/// declare the same package id. Package ids compare case-insensitively.
///
/// ## Manifest discovery
///
/// Per entry, the descriptor is searched at `About/About.xml`, then at
/// `<game_version>/About/About.xml`, then at the first `*/About/About.xml`
/// found by a sorted, depth-limited walk (covers version-subfolder layouts).
/// Entries with a missing or unparseable descriptor are skipped; a lookup
/// only fails on I/O errors reading the content folder itself.
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::errors::SdkError;
use crate::types::about::{ABOUT_DIR, ABOUT_FILE, ModMetaData};

/// Environment override for the workshop content folder.
pub const WORKSHOP_DIR_ENV: &str = "RIMSDK_WORKSHOP_DIR";

pub fn workshop_dir_from_env() -> Option<PathBuf> {
    std::env::var_os(WORKSHOP_DIR_ENV).map(PathBuf::from)
}

/// Resolved metadata of an installed workshop mod.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkshopMod {
    pub package_id: String,
    pub name: String,
    /// Numeric workshop file id, `-1` when the entry directory is not numeric.
    pub file_id: i64,
    pub url: Option<String>,
    pub install_dir: PathBuf,
}

pub struct ModLocator {
    content_root: PathBuf,
    game_version: String,
}

impl ModLocator {
    pub fn new(content_root: impl Into<PathBuf>, game_version: impl Into<String>) -> Self {
        Self {
            content_root: content_root.into(),
            game_version: game_version.into(),
        }
    }

    pub fn content_root(&self) -> &Path {
        &self.content_root
    }

    /// Look up an installed mod by package id. Returns `Ok(None)` when the
    /// content folder is missing or holds no match.
    pub fn find(&self, package_id: &str) -> Result<Option<WorkshopMod>, SdkError> {
        if !self.content_root.is_dir() {
            return Ok(None);
        }

        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.content_root)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                entries.push(entry.path());
            }
        }
        entries.sort();

        for dir in entries {
            let Some(manifest) = self.manifest_path(&dir) else {
                continue;
            };
            // a broken descriptor in an unrelated entry must not kill the scan
            let Ok(meta) = ModMetaData::load(&manifest) else {
                continue;
            };
            if meta.package_id.eq_ignore_ascii_case(package_id) {
                let file_id = dir
                    .file_name()
                    .and_then(OsStr::to_str)
                    .and_then(|n| n.parse::<i64>().ok())
                    .unwrap_or(-1);
                return Ok(Some(WorkshopMod {
                    package_id: meta.package_id,
                    name: meta.name,
                    file_id,
                    url: meta.url,
                    install_dir: dir,
                }));
            }
        }

        Ok(None)
    }

    fn manifest_path(&self, dir: &Path) -> Option<PathBuf> {
        let direct = dir.join(ABOUT_DIR).join(ABOUT_FILE);
        if direct.is_file() {
            return Some(direct);
        }
        let versioned = dir
            .join(&self.game_version)
            .join(ABOUT_DIR)
            .join(ABOUT_FILE);
        if versioned.is_file() {
            return Some(versioned);
        }
        WalkDir::new(dir)
            .min_depth(3)
            .max_depth(3)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .find(|e| {
                e.file_type().is_file()
                    && e.file_name() == OsStr::new(ABOUT_FILE)
                    && e.path()
                        .parent()
                        .and_then(Path::file_name)
                        .is_some_and(|n| n == OsStr::new(ABOUT_DIR))
            })
            .map(|e| e.into_path())
    }
}
