pub mod codes;

use std::path::PathBuf;
use thiserror::Error;

pub use codes::ErrorCategory;

#[derive(Error, Debug)]
pub enum Error {
    // === User input ===
    #[error("Pack root cannot be empty. Use --pack-root or set CMSIS_PACK_ROOT")]
    EmptyRoot,

    #[error("Index URL must use https://, got \"{url}\"")]
    UnsafeIndexPath { url: String },

    #[error("\"{name}\" is neither a pack file nor a pack id (Vendor.Name[.x.y.z])")]
    BadPackName { name: String },

    // === Expected absence ===
    #[error("Pack root {} does not exist. Run `packget init` to create it", path.display())]
    RootNotFound { path: PathBuf },

    #[error("Directory {} is missing from the pack root", path.display())]
    DirectoryMissing { path: PathBuf },

    #[error("Pack \"{pack}\" is not installed")]
    NotInstalled { pack: String },

    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Manifest not found: {}", path.display())]
    ManifestNotFound { path: PathBuf },

    #[error("Version {version} of \"{pack}\" is not listed in its manifest")]
    VersionNotFoundInManifest { pack: String, version: String },

    #[error("Could not find a download URL for \"{pack}\"")]
    UrlCannotBeFound { pack: String },

    #[error("No local manifest is registered as \"{key}\"")]
    PdscEntryNotFound { key: String },

    #[error("Nothing to purge for \"{pack}\"")]
    PackNotPurgeable { pack: String },

    #[error("Pack \"{pack}\" does not contain its manifest {file}")]
    PdscFileNotFoundInPack { pack: String, file: String },

    // === Internal consistency ===
    #[error("Unknown behavior: {detail}")]
    InternalConsistency { detail: String },

    #[error("Unknown pack name format: \"{name}\"")]
    UnknownPackNameFormat { name: String },

    // === Already done ===
    #[error("Pack \"{pack}\" is already installed here: {}", path.display())]
    AlreadyInstalled { pack: String, path: PathBuf },

    #[error("Public index {} already exists. Use --force to overwrite it", path.display())]
    CannotOverwrite { path: PathBuf },

    #[error("Manifest \"{key}\" is already registered")]
    PdscEntryExists { key: String },

    #[error("License agreement of \"{pack}\" was not accepted")]
    LicenseNotAccepted { pack: String },

    // === I/O and transport ===
    #[error("Could not fetch manifest from {url}: {reason}")]
    ManifestFetchFailed { url: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error in {}: {detail}", path.display())]
    Parse { path: PathBuf, detail: String },

    #[error("Archive error: {0}")]
    Archive(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Broad class of this error, used for exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::EmptyRoot | Error::UnsafeIndexPath { .. } | Error::BadPackName { .. } => {
                ErrorCategory::UserInput
            }

            Error::RootNotFound { .. }
            | Error::DirectoryMissing { .. }
            | Error::NotInstalled { .. }
            | Error::FileNotFound { .. }
            | Error::ManifestNotFound { .. }
            | Error::VersionNotFoundInManifest { .. }
            | Error::UrlCannotBeFound { .. }
            | Error::PdscEntryNotFound { .. }
            | Error::PackNotPurgeable { .. }
            | Error::PdscFileNotFoundInPack { .. } => ErrorCategory::ExpectedAbsence,

            Error::InternalConsistency { .. } | Error::UnknownPackNameFormat { .. } => {
                ErrorCategory::Internal
            }

            Error::AlreadyInstalled { .. }
            | Error::CannotOverwrite { .. }
            | Error::PdscEntryExists { .. }
            | Error::LicenseNotAccepted { .. } => ErrorCategory::AlreadyDone,

            Error::ManifestFetchFailed { .. }
            | Error::Io(_)
            | Error::Network(_)
            | Error::Parse { .. }
            | Error::Archive(_)
            | Error::Config(_) => ErrorCategory::Io,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        self.category().exit_code()
    }
}
