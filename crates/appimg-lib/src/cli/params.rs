use crate::assets::{AssetCatalog, ImageSelection};
use crate::download::DownloadOptions;
use crate::profile::ProfileUrl;
use std::path::PathBuf;

/// Everything a run needs, after flags, configuration and prompts have been
/// reconciled.
#[derive(Debug, Clone)]
pub struct RunParams {
    pub profile: ProfileUrl,
    pub selection: ImageSelection,
    pub catalog: AssetCatalog,
    pub download_dir: PathBuf,
    pub download_options: DownloadOptions,
    pub user_agent: String,
    /// `None` asks once the downloads are done.
    pub open_folder: Option<bool>,
}
