use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IconkeepError {
    #[error("Could not find app bundle for {0:?}")]
    NotFound(String),

    #[error("{0:?} exists but is not inside an .app bundle")]
    InvalidBundle(String),

    #[error("Missing Info.plist at {}", .0.display())]
    MissingMetadata(PathBuf),

    #[error("Malformed Info.plist at {}: {reason}", .path.display())]
    MalformedMetadata { path: PathBuf, reason: String },

    #[error("Could not locate an .icns icon file in {}", .0.display())]
    IconNotFound(PathBuf),

    #[error("No backup manifest found (looked in: {0})")]
    NoManifest(String),

    #[error("Malformed backup manifest at {}: {reason}", .path.display())]
    MalformedManifest { path: PathBuf, reason: String },

    #[error("Backup icon not found at {}", .0.display())]
    MissingBackupFile(PathBuf),

    #[error("Missing app list at {}", .0.display())]
    MissingConfig(PathBuf),

    #[error("No apps listed in {}", .0.display())]
    EmptyConfig(PathBuf),

    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(String),
}
