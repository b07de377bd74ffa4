use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppImgError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Directory creation failed at {path}: {reason}")]
    DirectoryCreation { path: PathBuf, reason: String },

    #[error("Failed to read directory {path}: {reason}")]
    DirectoryRead { path: PathBuf, reason: String },

    #[error("Failed to remove directory {path}: {reason}")]
    DirectoryRemoval { path: PathBuf, reason: String },

    #[error("Failed to check for existing file {path}: {reason}")]
    FileCheck { path: PathBuf, reason: String },

    #[error("Failed to write file {path}: {reason}")]
    FileWrite { path: PathBuf, reason: String },

    #[error("Unable to resolve the {folder} folder on this system")]
    UnresolvableFolder { folder: String },

    #[error("No valid answer given for prompt: {prompt}")]
    PromptCancelled { prompt: String },

    #[error("Terminal prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid command line arguments: {details}")]
    CliArgumentValidation { details: String },

    #[error("Unexpected error: {0}")]
    Unexpected(#[from] eyre::Report),
}
