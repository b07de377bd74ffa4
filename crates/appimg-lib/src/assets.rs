use crate::config::DEFAULT_CDN_BASE_URL;
use std::fmt;
use thiserror::Error;

/// Image variants published for every app, in menu order.
pub const ASSET_FILE_NAMES: [&str; 6] = [
    "logo.png",
    "header.jpg",
    "library_hero.jpg",
    "library_hero_blur.jpg",
    "library_600x900.jpg",
    "library_600x900_2x.jpg",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetDescriptor {
    pub file_name: &'static str,
    pub base_url: String,
}

impl AssetDescriptor {
    pub fn url_for(&self, app_id: u64) -> String {
        format!("{}{}/{}", self.base_url, app_id, self.file_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetCatalog {
    descriptors: Vec<AssetDescriptor>,
}

impl AssetCatalog {
    pub fn with_base_url(base_url: &str) -> Self {
        let base_url = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };

        Self {
            descriptors: ASSET_FILE_NAMES
                .into_iter()
                .map(|file_name| AssetDescriptor {
                    file_name,
                    base_url: base_url.clone(),
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&AssetDescriptor> {
        self.descriptors.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AssetDescriptor> {
        self.descriptors.iter()
    }

    /// One `index = file name` line per descriptor.
    pub fn menu(&self) -> String {
        self.descriptors
            .iter()
            .enumerate()
            .map(|(index, descriptor)| format!("{index} = {}", descriptor.file_name))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for AssetCatalog {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_CDN_BASE_URL)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSelection {
    All,
    Index(usize),
}

impl fmt::Display for ImageSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSelection::All => f.write_str("all image types"),
            ImageSelection::Index(index) => write!(f, "image type {index}"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Image type {index} is invalid, choose 0 to {max}")]
    OutOfRange { index: i64, max: usize },

    #[error("Image type must be a number unless you wish to download all types, if so then enter A")]
    NotANumber { input: String },
}

pub const SELECT_ALL_SENTINEL: &str = "a";

pub fn parse_selection(input: &str, catalog_len: usize) -> Result<ImageSelection, SelectionError> {
    let input = input.trim().to_lowercase();

    if input == SELECT_ALL_SENTINEL {
        return Ok(ImageSelection::All);
    }

    let index = input
        .parse::<i64>()
        .map_err(|_| SelectionError::NotANumber {
            input: input.clone(),
        })?;

    match usize::try_from(index) {
        Ok(index) if index < catalog_len => Ok(ImageSelection::Index(index)),
        _ => Err(SelectionError::OutOfRange {
            index,
            max: catalog_len.saturating_sub(1),
        }),
    }
}
