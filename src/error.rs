use std::path::PathBuf;
use thiserror::Error;

/// Core library errors
#[derive(Error, Debug)]
pub enum PackagerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    BadRequest(String),

    #[error("'{0}' is not a valid container name.")]
    ContainerNotFound(String),

    #[error("{message}")]
    Runtime {
        message: String,
        #[source]
        source: bollard::errors::Error,
    },

    #[error("Transfer of '{path}' failed: {reason}")]
    TransferFailed { path: String, reason: String },

    #[error(
        "Could not package application. Please ensure the project is one of the supported types:\n\t- {}",
        .supported.join("\n\t- ")
    )]
    UnsupportedProjectType { supported: Vec<&'static str> },

    #[error("Could not locate the build artifact: {0}")]
    ArtifactNotFound(String),

    #[error("Build command `{command}` failed: {status}")]
    BuildFailed { command: String, status: String },

    #[error("Could not install dependencies.")]
    DependencyInstallFailed { command: String, status: String },

    #[error("IO error at path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PackagerError {
    /// HTTP status code this error is reported with.
    pub fn status_code(&self) -> u16 {
        match self {
            PackagerError::BadRequest(_) | PackagerError::ContainerNotFound(_) => 400,
            _ => 500,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PackagerError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, PackagerError>;
