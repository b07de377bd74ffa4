use crate::assets::{AssetCatalog, AssetDescriptor, ImageSelection};
use crate::error::AppImgError;
use itertools::Itertools;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueEntry {
    pub url: String,
    pub destination: PathBuf,
}

/// Flat list of downloads for one run. Entries never change once built.
#[derive(Debug, Clone, Default)]
pub struct DownloadQueue {
    entries: Vec<QueueEntry>,
}

impl DownloadQueue {
    /// Asset type is the outer loop and app id the inner one, so all ids are
    /// queued for the first asset type before moving on to the next. Creates
    /// `{root}/{app id}` for every queued app.
    pub fn build(
        app_ids: &[u64],
        selection: ImageSelection,
        catalog: &AssetCatalog,
        root: &Path,
    ) -> Result<Self, AppImgError> {
        let descriptors: Vec<&AssetDescriptor> = match selection {
            ImageSelection::All => catalog.iter().collect(),
            ImageSelection::Index(index) => {
                vec![catalog.get(index).ok_or_else(|| {
                    eyre::eyre!("Image type {} is not in the asset catalog", index)
                })?]
            }
        };

        let mut entries = Vec::with_capacity(descriptors.len() * app_ids.len());
        for (descriptor, app_id) in descriptors.into_iter().cartesian_product(app_ids) {
            let app_dir = root.join(app_id.to_string());
            std::fs::create_dir_all(&app_dir).map_err(|e| AppImgError::DirectoryCreation {
                path: app_dir.clone(),
                reason: e.to_string(),
            })?;

            entries.push(QueueEntry {
                url: descriptor.url_for(*app_id),
                destination: app_dir.join(descriptor.file_name),
            });
        }

        tracing::debug!(entries = entries.len(), %selection, "Built download queue");
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[QueueEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QueueEntry> {
        self.entries.iter()
    }
}

impl From<Vec<QueueEntry>> for DownloadQueue {
    fn from(entries: Vec<QueueEntry>) -> Self {
        Self { entries }
    }
}

impl<'a> IntoIterator for &'a DownloadQueue {
    type Item = &'a QueueEntry;
    type IntoIter = std::slice::Iter<'a, QueueEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::ASSET_FILE_NAMES;

    #[test]
    fn test_select_all_groups_by_asset_type() {
        let root = tempfile::tempdir().unwrap();
        let catalog = AssetCatalog::default();
        let ids = [440, 570, 730];

        let queue = DownloadQueue::build(&ids, ImageSelection::All, &catalog, root.path()).unwrap();

        assert_eq!(queue.len(), 6 * ids.len());
        for (chunk, file_name) in queue.entries().chunks(ids.len()).zip(ASSET_FILE_NAMES) {
            for (entry, id) in chunk.iter().zip(ids) {
                assert_eq!(
                    entry.url,
                    format!("https://steamcdn-a.akamaihd.net/steam/apps/{id}/{file_name}")
                );
                assert_eq!(
                    entry.destination,
                    root.path().join(id.to_string()).join(file_name)
                );
            }
        }
    }

    #[test]
    fn test_select_index_uses_single_descriptor() {
        let root = tempfile::tempdir().unwrap();
        let catalog = AssetCatalog::default();
        let ids = [10, 20];

        let queue =
            DownloadQueue::build(&ids, ImageSelection::Index(2), &catalog, root.path()).unwrap();

        assert_eq!(queue.len(), 2);
        assert!(
            queue
                .iter()
                .all(|entry| entry.destination.ends_with("library_hero.jpg"))
        );
        assert_eq!(queue.entries()[0].destination, root.path().join("10/library_hero.jpg"));
        assert_eq!(queue.entries()[1].destination, root.path().join("20/library_hero.jpg"));
    }

    #[test]
    fn test_duplicate_ids_are_queued_twice() {
        let root = tempfile::tempdir().unwrap();

        let queue = DownloadQueue::build(
            &[440, 440],
            ImageSelection::Index(0),
            &AssetCatalog::default(),
            root.path(),
        )
        .unwrap();

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.entries()[0], queue.entries()[1]);
    }

    #[test]
    fn test_build_creates_app_directories() {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir(root.path().join("440")).unwrap();

        DownloadQueue::build(
            &[440, 570],
            ImageSelection::All,
            &AssetCatalog::default(),
            root.path(),
        )
        .unwrap();

        assert!(root.path().join("440").is_dir());
        assert!(root.path().join("570").is_dir());
    }

    #[test]
    fn test_empty_ids_give_empty_queue() {
        let root = tempfile::tempdir().unwrap();

        let queue =
            DownloadQueue::build(&[], ImageSelection::All, &AssetCatalog::default(), root.path())
                .unwrap();

        assert!(queue.is_empty());
    }

    #[test]
    fn test_directory_creation_failure_reports_path() {
        let root = tempfile::tempdir().unwrap();
        let blocker = root.path().join("not-a-dir");
        std::fs::write(&blocker, b"file").unwrap();

        let result = DownloadQueue::build(
            &[440],
            ImageSelection::All,
            &AssetCatalog::default(),
            &blocker,
        );

        assert!(matches!(
            result,
            Err(AppImgError::DirectoryCreation { path, .. }) if path == blocker.join("440")
        ));
    }

    #[test]
    fn test_unknown_index_is_rejected() {
        let root = tempfile::tempdir().unwrap();

        let result = DownloadQueue::build(
            &[440],
            ImageSelection::Index(6),
            &AssetCatalog::default(),
            root.path(),
        );

        assert!(matches!(result, Err(AppImgError::Unexpected(_))));
    }
}
