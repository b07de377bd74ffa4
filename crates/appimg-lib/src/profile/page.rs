use super::ProfileUrl;
use crate::error::AppImgError;
use once_cell::sync::Lazy;
use regex::Regex;

/// App links inside the JSON blob embedded in the games page, where `/` is
/// escaped as `\/`.
static APP_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"apps\\/(\d+)").unwrap());

pub async fn fetch_games_page(
    client: &reqwest::Client,
    profile: &ProfileUrl,
) -> Result<String, AppImgError> {
    let url = profile.games_url();
    tracing::info!("Requesting profile games page {}", url);

    let page = client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    tracing::debug!(bytes = page.len(), "Fetched games page");
    Ok(page)
}

/// Every app id in order of appearance. Duplicates are kept.
pub fn extract_app_ids(page: &str) -> Vec<u64> {
    APP_ID_RE
        .captures_iter(page)
        .filter_map(|captures| {
            let digits = &captures[1];
            match digits.parse::<u64>() {
                Ok(id) => Some(id),
                Err(e) => {
                    tracing::warn!(app_id = digits, "Skipping unparseable app id: {}", e);
                    None
                }
            }
        })
        .collect()
}

pub async fn fetch_app_ids(
    client: &reqwest::Client,
    profile: &ProfileUrl,
) -> Result<Vec<u64>, AppImgError> {
    let page = fetch_games_page(client, profile).await?;
    Ok(extract_app_ids(&page))
}
