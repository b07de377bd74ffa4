mod download;
mod types;

pub use download::{Downloader, build_http_client};
pub use types::{DownloadOptions, ItemOutcome};
