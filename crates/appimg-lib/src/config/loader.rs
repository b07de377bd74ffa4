use super::Config;
use crate::error::AppImgError;
use config::{Config as ConfigBuilder, Environment, File};

pub const ENV_PREFIX: &str = "APPIMG";

/// Layers the built-in defaults, an optional config file and `APPIMG_*`
/// environment variables, in that order.
pub fn load_config(config_path: Option<&str>) -> Result<Config, AppImgError> {
    let mut builder =
        ConfigBuilder::builder().add_source(ConfigBuilder::try_from(&Config::default())?);

    if let Some(config_path) = config_path {
        tracing::debug!("Reading configuration file {}", config_path);
        builder = builder.add_source(File::with_name(config_path));
    }

    let config_builder = builder
        .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
        .build()?;

    config_builder.try_deserialize().map_err(Into::into)
}
