use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_PROFILE_BASE_URL: &str = "https://steamcommunity.com";
pub const DEFAULT_CDN_BASE_URL: &str = "https://steamcdn-a.akamaihd.net/steam/apps/";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/80.0.3987.149 Safari/537.36";
pub const DEFAULT_THROTTLE_DELAY_MS: u64 = 250;
pub const DEFAULT_FOLDER_NAME: &str = "AppImageDownloader";

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    /// Community site root used to build canonical profile URLs
    pub profile_base_url: String,
    /// Base URL that `{app id}/{file name}` is appended to for every asset
    pub cdn_base_url: String,
    pub user_agent: String,
    pub throttle_delay_ms: u64,
    /// Subfolder created inside the Downloads folder
    pub folder_name: String,
    /// Overrides the Downloads folder lookup entirely
    pub output_dir: Option<PathBuf>,
    /// Unbounded when unset
    pub max_prompt_attempts: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile_base_url: DEFAULT_PROFILE_BASE_URL.to_string(),
            cdn_base_url: DEFAULT_CDN_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            throttle_delay_ms: DEFAULT_THROTTLE_DELAY_MS,
            folder_name: DEFAULT_FOLDER_NAME.to_string(),
            output_dir: None,
            max_prompt_attempts: None,
        }
    }
}
