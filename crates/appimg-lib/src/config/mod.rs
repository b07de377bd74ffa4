mod loader;
mod model;

pub use loader::{ENV_PREFIX, load_config};
pub use model::{
    Config, DEFAULT_CDN_BASE_URL, DEFAULT_FOLDER_NAME, DEFAULT_PROFILE_BASE_URL,
    DEFAULT_THROTTLE_DELAY_MS, DEFAULT_USER_AGENT,
};
