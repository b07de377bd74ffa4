use crate::assets::{AssetCatalog, parse_selection};
use crate::cli::args::RunArgs;
use crate::cli::params::RunParams;
use crate::config::load_config;
use crate::download::DownloadOptions;
use crate::error::AppImgError;
use crate::folders::{FolderResolver, resolve_download_folder};
use crate::profile::ProfileResolver;
use crate::prompt::{Prompter, ask_until_valid};
use std::path::PathBuf;
use std::time::Duration;

const PROFILE_PROMPT: &str = "SteamID64/Profile URL";
const IMAGE_TYPE_PROMPT: &str = "Image type (enter A for all types)";
const THROTTLE_PROMPT: &str = "Would you like to throttle downloads? This adds a small delay between each download to help avoid Steam's rate limits";

/// Fills in every run parameter: command line first, then configuration,
/// then the prompter for whatever is still missing. Creates the download
/// folder.
pub fn resolve_command(
    command: RunArgs,
    prompter: &mut dyn Prompter,
    folders: &dyn FolderResolver,
) -> Result<RunParams, AppImgError> {
    let app_config = load_config(command.config_path.as_deref())?;

    let output_dir = command
        .output_dir
        .map(PathBuf::from)
        .or_else(|| app_config.output_dir.clone());
    let download_dir = resolve_download_folder(folders, output_dir, &app_config.folder_name)?;
    std::fs::create_dir_all(&download_dir).map_err(|e| AppImgError::DirectoryCreation {
        path: download_dir.clone(),
        reason: e.to_string(),
    })?;

    tracing::info!(
        "This tool will download all web assets for all games on the provided Steam profile."
    );
    tracing::info!(
        "These files will be downloaded into {}",
        download_dir.display()
    );

    let resolver = ProfileResolver::new(&app_config.profile_base_url)?;
    let profile = match command.profile {
        Some(profile) => {
            resolver
                .resolve(&profile)
                .map_err(|e| AppImgError::CliArgumentValidation {
                    details: e.to_string(),
                })?
        }
        None if command.non_interactive => {
            return Err(AppImgError::CliArgumentValidation {
                details: "--profile is required with --non-interactive.".to_string(),
            });
        }
        None => ask_until_valid(
            prompter,
            PROFILE_PROMPT,
            app_config.max_prompt_attempts,
            |input| resolver.resolve(input),
        )?,
    };
    tracing::debug!(%profile, "Resolved profile");

    let catalog = AssetCatalog::with_base_url(&app_config.cdn_base_url);
    let selection = match command.image_type {
        Some(image_type) => parse_selection(&image_type, catalog.len()).map_err(|e| {
            AppImgError::CliArgumentValidation {
                details: e.to_string(),
            }
        })?,
        None if command.non_interactive => {
            return Err(AppImgError::CliArgumentValidation {
                details: "--image-type is required with --non-interactive.".to_string(),
            });
        }
        None => {
            tracing::info!("Which type of images do you want to download for your games?");
            for line in catalog.menu().lines() {
                tracing::info!("{}", line);
            }
            tracing::info!("Note that some games will not have some image types.");
            ask_until_valid(
                prompter,
                IMAGE_TYPE_PROMPT,
                app_config.max_prompt_attempts,
                |input| parse_selection(input, catalog.len()),
            )?
        }
    };

    let throttle = match command.throttle {
        Some(throttle) => throttle,
        None => prompter.confirm(THROTTLE_PROMPT, true)?,
    };
    let download_options = if throttle {
        DownloadOptions::throttled(Duration::from_millis(app_config.throttle_delay_ms))
    } else {
        DownloadOptions::unthrottled()
    };

    let open_folder = match command.open_folder {
        Some(open_folder) => Some(open_folder),
        None if command.non_interactive => Some(false),
        None => None,
    };

    Ok(RunParams {
        profile,
        selection,
        catalog,
        download_dir,
        download_options,
        user_agent: app_config.user_agent,
        open_folder,
    })
}
