// Central error aggregation module. This file defines the global `SdkError`
// and re-exports commonly used error types under `crate::errors::*`.
pub mod manifest;
pub mod sdk;

pub use manifest::ManifestError;

pub use sdk::SdkError;
pub type Result<T> = std::result::Result<T, SdkError>;
