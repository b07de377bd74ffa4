use crate::cleanup::remove_empty_dirs;
use crate::cli::params::RunParams;
use crate::download::{Downloader, ItemOutcome, build_http_client};
use crate::error::AppImgError;
use crate::profile::fetch_app_ids;
use crate::prompt::Prompter;
use crate::queue::DownloadQueue;
use std::path::Path;
use tracing::{info, warn};

const RETRY_PROMPT: &str = "Would you like to try again?";
const OPEN_FOLDER_PROMPT: &str = "Operation complete! Would you like to view the downloads folder?";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Completed {
        outcomes: Vec<ItemOutcome>,
        folders_removed: usize,
    },
    /// The games page had no app ids and retrying was declined.
    EmptyProfile,
}

pub async fn run_download(
    params: RunParams,
    prompter: &mut dyn Prompter,
) -> Result<RunOutcome, AppImgError> {
    let client = build_http_client(&params.user_agent)?;

    let app_ids = loop {
        let app_ids = fetch_app_ids(&client, &params.profile).await?;
        if !app_ids.is_empty() {
            break app_ids;
        }

        warn!(
            "The games page of that profile appears to be empty. \
             This usually happens if Steam is having problems or the profile is private."
        );
        if !prompter.confirm(RETRY_PROMPT, false)? {
            return Ok(RunOutcome::EmptyProfile);
        }
    };

    info!("Loading {} game IDs...", app_ids.len());
    info!("Adding downloads to queue...");
    let queue = DownloadQueue::build(
        &app_ids,
        params.selection,
        &params.catalog,
        &params.download_dir,
    )?;

    info!("Starting download of {} items...", queue.len());
    let outcomes = Downloader::new(client, params.download_options)
        .download_queue(&queue)
        .await?;

    info!("Finished download queue, cleaning up...");
    let folders_removed = remove_empty_dirs(&params.download_dir)?;
    if folders_removed > 0 {
        info!(
            "Finished cleanup, removed {} empty folder(s).",
            folders_removed
        );
    } else {
        info!("Finished cleanup");
    }

    let open_folder = match params.open_folder {
        Some(open_folder) => open_folder,
        None => prompter.confirm(OPEN_FOLDER_PROMPT, true)?,
    };
    if open_folder {
        reveal_folder(&params.download_dir);
    }

    Ok(RunOutcome::Completed {
        outcomes,
        folders_removed,
    })
}

fn reveal_folder(path: &Path) {
    if let Err(e) = open::that(path) {
        warn!("Could not open {}: {}", path.display(), e);
    }
}
