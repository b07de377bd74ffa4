use crate::config::DEFAULT_THROTTLE_DELAY_MS;
use std::time::Duration;

/// What happened to one queue entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItemOutcome {
    /// Success status; the body was written to the destination.
    Downloaded { status: u16 },
    /// Non-success status; nothing was written.
    HttpStatus { status: u16 },
    /// The destination already existed, no request was made.
    Skipped,
    /// The request failed before a complete response was read. `status` is
    /// set when the headers arrived but the body did not.
    Failed {
        status: Option<u16>,
        reason: String,
    },
}

impl ItemOutcome {
    pub fn was_attempted(&self) -> bool {
        !matches!(self, ItemOutcome::Skipped)
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ItemOutcome::Downloaded { status } | ItemOutcome::HttpStatus { status } => Some(*status),
            ItemOutcome::Failed { status, .. } => *status,
            ItemOutcome::Skipped => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DownloadOptions {
    /// Delay after every attempted entry; `None` disables throttling.
    pub throttle: Option<Duration>,
}

impl DownloadOptions {
    pub fn throttled(delay: Duration) -> Self {
        Self {
            throttle: Some(delay),
        }
    }

    pub fn unthrottled() -> Self {
        Self { throttle: None }
    }

    pub fn throttle_after(&self, outcome: &ItemOutcome) -> Option<Duration> {
        self.throttle.filter(|_| outcome.was_attempted())
    }
}

impl Default for DownloadOptions {
    fn default() -> Self {
        Self::throttled(Duration::from_millis(DEFAULT_THROTTLE_DELAY_MS))
    }
}
