use crate::error::AppImgError;
use std::fmt;
use std::path::PathBuf;

/// User folders the shell knows about by identity rather than by path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownFolder {
    Desktop,
    Documents,
    Downloads,
    Music,
    Pictures,
    Videos,
}

impl KnownFolder {
    /// Folder name used under the home directory when the platform has no
    /// answer of its own.
    pub fn home_relative_name(self) -> &'static str {
        match self {
            KnownFolder::Desktop => "Desktop",
            KnownFolder::Documents => "Documents",
            KnownFolder::Downloads => "Downloads",
            KnownFolder::Music => "Music",
            KnownFolder::Pictures => "Pictures",
            KnownFolder::Videos => "Videos",
        }
    }
}

impl fmt::Display for KnownFolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.home_relative_name())
    }
}

pub trait FolderResolver {
    fn resolve(&self, folder: KnownFolder) -> Result<PathBuf, AppImgError>;
}

/// Asks the platform (known folder API on Windows, XDG user dirs on Linux,
/// standard directories on macOS) and falls back to `$HOME/<name>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemFolders;

impl FolderResolver for SystemFolders {
    fn resolve(&self, folder: KnownFolder) -> Result<PathBuf, AppImgError> {
        let platform = match folder {
            KnownFolder::Desktop => dirs::desktop_dir(),
            KnownFolder::Documents => dirs::document_dir(),
            KnownFolder::Downloads => dirs::download_dir(),
            KnownFolder::Music => dirs::audio_dir(),
            KnownFolder::Pictures => dirs::picture_dir(),
            KnownFolder::Videos => dirs::video_dir(),
        };

        platform
            .or_else(|| {
                tracing::debug!(%folder, "Platform has no known folder, falling back to home directory");
                dirs::home_dir().map(|home| home.join(folder.home_relative_name()))
            })
            .ok_or_else(|| AppImgError::UnresolvableFolder {
                folder: folder.to_string(),
            })
    }
}

/// Always answers with a fixed path; used when the output folder is configured.
#[derive(Debug, Clone)]
pub struct FixedFolder(pub PathBuf);

impl FolderResolver for FixedFolder {
    fn resolve(&self, _folder: KnownFolder) -> Result<PathBuf, AppImgError> {
        Ok(self.0.clone())
    }
}

/// Resolves the root download folder: `output_dir` wins, otherwise
/// `<Downloads>/<folder_name>`.
pub fn resolve_download_folder(
    resolver: &dyn FolderResolver,
    output_dir: Option<PathBuf>,
    folder_name: &str,
) -> Result<PathBuf, AppImgError> {
    match output_dir {
        Some(output_dir) => Ok(output_dir),
        None => Ok(resolver.resolve(KnownFolder::Downloads)?.join(folder_name)),
    }
}
