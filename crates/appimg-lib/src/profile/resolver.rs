use crate::error::AppImgError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use thiserror::Error;
use url::Url;

/// SteamID64 (17 digits, fixed individual-account prefix) or SteamID3 (`[U:1:N]`).
static STEAM_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:7656119[0-9]{10}|\[U:[0-1]:[0-9]{1,10}\])$").unwrap()
});

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("'{input}' is not a SteamID64, SteamID3 or profile URL")]
    Unrecognized { input: String },
}

/// Canonical profile URL without a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUrl(String);

impl ProfileUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn games_url(&self) -> String {
        format!("{}/games?tab=all", self.0)
    }
}

impl fmt::Display for ProfileUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone)]
pub struct ProfileResolver {
    base_url: String,
    scheme: String,
    profile_url_re: Regex,
}

impl ProfileResolver {
    pub fn new(profile_base_url: &str) -> Result<Self, AppImgError> {
        let invalid = |reason: &str| AppImgError::InvalidUrl {
            url: profile_base_url.to_string(),
            reason: reason.to_string(),
        };

        let url = Url::parse(profile_base_url).map_err(|e| invalid(&e.to_string()))?;
        let host = url.host_str().ok_or_else(|| invalid("no host"))?;
        let authority = match url.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        };

        let profile_url_re = Regex::new(&format!(
            r"^(?:https?://)?{}/(?:profiles|id)/[A-Za-z0-9_\-]+/?$",
            regex::escape(&authority)
        ))
        .map_err(|e| invalid(&e.to_string()))?;

        Ok(Self {
            base_url: profile_base_url.trim_end_matches('/').to_string(),
            scheme: url.scheme().to_string(),
            profile_url_re,
        })
    }

    pub fn resolve(&self, input: &str) -> Result<ProfileUrl, ProfileError> {
        let input = input.trim();

        if STEAM_ID_RE.is_match(input) {
            return Ok(ProfileUrl(format!("{}/profiles/{}", self.base_url, input)));
        }

        if self.profile_url_re.is_match(input) {
            let url = input.strip_suffix('/').unwrap_or(input);
            let url = if url.starts_with("http://") || url.starts_with("https://") {
                url.to_string()
            } else {
                format!("{}://{}", self.scheme, url)
            };
            return Ok(ProfileUrl(url));
        }

        Err(ProfileError::Unrecognized {
            input: input.to_string(),
        })
    }
}
