use super::types::{DownloadOptions, ItemOutcome};
use crate::error::AppImgError;
use crate::queue::{DownloadQueue, QueueEntry};
use tracing::{info, warn};

pub fn build_http_client(user_agent: &str) -> Result<reqwest::Client, AppImgError> {
    reqwest::Client::builder()
        .user_agent(user_agent)
        .build()
        .map_err(Into::into)
}

/// Fetches queue entries one at a time, in order.
#[derive(Clone, Debug)]
pub struct Downloader {
    client: reqwest::Client,
    options: DownloadOptions,
}

impl Downloader {
    pub fn new(client: reqwest::Client, options: DownloadOptions) -> Self {
        Self { client, options }
    }

    /// Returns one outcome per entry, in queue order. Failed requests are
    /// logged and the queue moves on; only a file system error on the
    /// destination aborts.
    pub async fn download_queue(
        &self,
        queue: &DownloadQueue,
    ) -> Result<Vec<ItemOutcome>, AppImgError> {
        let total = queue.len();
        let mut outcomes = Vec::with_capacity(total);

        for (index, entry) in queue.iter().enumerate() {
            let position = index + 1;

            let exists = tokio::fs::try_exists(&entry.destination)
                .await
                .map_err(|e| AppImgError::FileCheck {
                    path: entry.destination.clone(),
                    reason: e.to_string(),
                })?;
            let outcome = if exists {
                ItemOutcome::Skipped
            } else {
                self.download_entry(entry).await?
            };

            match &outcome {
                ItemOutcome::Downloaded { .. } => {
                    info!("[{}/{}] Downloaded {}", position, total, entry.url)
                }
                ItemOutcome::HttpStatus { status } => warn!(
                    "[{}/{}] Failed to download {} - {}",
                    position, total, entry.url, status
                ),
                ItemOutcome::Failed {
                    status: Some(status),
                    reason,
                } => warn!(
                    "[{}/{}] Failed to download {} - {} ({})",
                    position, total, entry.url, status, reason
                ),
                ItemOutcome::Failed {
                    status: None,
                    reason,
                } => warn!(
                    "[{}/{}] Failed to download {} - {}",
                    position, total, entry.url, reason
                ),
                ItemOutcome::Skipped => info!(
                    "[{}/{}] Skipping {} as it already exists",
                    position, total, entry.url
                ),
            }

            if let Some(delay) = self.options.throttle_after(&outcome) {
                tokio::time::sleep(delay).await;
            }

            outcomes.push(outcome);
        }

        Ok(outcomes)
    }

    async fn download_entry(&self, entry: &QueueEntry) -> Result<ItemOutcome, AppImgError> {
        tracing::trace!(url = %entry.url, output = %entry.destination.display(), "Downloading");

        let response = match self.client.get(&entry.url).send().await {
            Ok(response) => response,
            Err(e) => {
                return Ok(ItemOutcome::Failed {
                    status: None,
                    reason: e.to_string(),
                });
            }
        };

        let status = response.status();
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                return Ok(ItemOutcome::Failed {
                    status: Some(status.as_u16()),
                    reason: e.to_string(),
                });
            }
        };

        if !status.is_success() {
            return Ok(ItemOutcome::HttpStatus {
                status: status.as_u16(),
            });
        }

        tokio::fs::write(&entry.destination, &body)
            .await
            .map_err(|e| AppImgError::FileWrite {
                path: entry.destination.clone(),
                reason: e.to_string(),
            })?;

        Ok(ItemOutcome::Downloaded {
            status: status.as_u16(),
        })
    }
}
