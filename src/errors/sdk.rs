use thiserror::Error;

/// Sdk-wide error type to avoid `Box<dyn Error>` in public APIs.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML parse error: {0}")]
    XmlDe(#[from] quick_xml::DeError),

    #[error("XML serialize error: {0}")]
    XmlSer(#[from] quick_xml::SeError),

    #[error("mod.toml error: {0}")]
    Manifest(#[from] crate::errors::ManifestError),

    #[error("Missing required input: {0}")]
    MissingInput(String),

    #[error("Invalid package id: {0}")]
    InvalidPackageId(String),

    #[error("Invalid game version: {0}")]
    InvalidVersion(String),

    #[error("Package not found: {0}")]
    PackageNotFound(String),

    #[error("About.xml generation finished with {0} error(s)")]
    GenerationFailed(usize),

    #[error("Descriptor validation found {0} issue(s)")]
    ValidationFailed(usize),
}
