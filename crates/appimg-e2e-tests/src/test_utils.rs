use appimg_lib::config::Config;
use eyre::Result;
use std::path::{Path, PathBuf};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_STEAM_ID: &str = "76561197960287930";

/// Points both the profile site and the CDN at the mock server.
pub fn create_test_config(server: &MockServer, output_dir: &Path) -> Config {
    Config {
        profile_base_url: server.uri(),
        cdn_base_url: format!("{}/apps/", server.uri()),
        throttle_delay_ms: 0,
        output_dir: Some(output_dir.to_path_buf()),
        max_prompt_attempts: Some(3),
        ..Config::default()
    }
}

/// Writes `config` as JSON into `dir` and returns the file path.
pub fn write_test_config(dir: &Path, config: &Config) -> Result<PathBuf> {
    let config_path = dir.join("config.json");
    std::fs::write(&config_path, serde_json::to_string_pretty(config)?)?;
    Ok(config_path)
}

/// Games page in the shape Steam embeds it: app links with escaped slashes.
pub fn games_page(app_ids: &[u64]) -> String {
    let games = app_ids
        .iter()
        .map(|id| {
            format!(r#"{{"appid":{id},"logo":"https:\/\/cdn.example\/steam\/apps\/{id}\/capsule_184x69.jpg"}}"#)
        })
        .collect::<Vec<_>>()
        .join(",");
    format!("<html><script>var rgGames = [{games}];</script></html>")
}

pub async fn mount_games_page(server: &MockServer, profile_path: &str, app_ids: &[u64]) {
    Mock::given(method("GET"))
        .and(path(format!("{profile_path}/games")))
        .and(query_param("tab", "all"))
        .respond_with(ResponseTemplate::new(200).set_body_string(games_page(app_ids)))
        .mount(server)
        .await;
}

/// Serves `body` for one asset and expects exactly `expected_requests` hits.
pub async fn mount_asset(
    server: &MockServer,
    app_id: u64,
    file_name: &str,
    body: &[u8],
    expected_requests: u64,
) {
    Mock::given(method("GET"))
        .and(path(format!("/apps/{app_id}/{file_name}")))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body.to_vec()))
        .expect(expected_requests)
        .mount(server)
        .await;
}

/// Anything not mounted explicitly is missing on the CDN.
pub async fn mount_missing_assets(server: &MockServer) {
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .with_priority(u8::MAX)
        .mount(server)
        .await;
}

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter("appimg_lib=debug,appimg_e2e_tests=debug")
        .with_test_writer()
        .try_init()
        .ok();
}
