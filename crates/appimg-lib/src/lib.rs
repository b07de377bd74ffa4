pub mod assets;
pub mod cleanup;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod folders;
pub mod profile;
pub mod prompt;
pub mod queue;

pub use config::Config;
pub use error::AppImgError;
