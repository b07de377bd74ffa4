use appimg_e2e_tests::{
    TEST_STEAM_ID, create_test_config, init_tracing, mount_asset, mount_games_page,
    mount_missing_assets, write_test_config,
};
use appimg_lib::cli::{RunArgs, RunOutcome, resolve_command, run_download};
use appimg_lib::download::ItemOutcome;
use appimg_lib::folders::FixedFolder;
use appimg_lib::prompt::ScriptedPrompter;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;
use wiremock::MockServer;

fn run_args(config_path: &std::path::Path, image_type: &str) -> RunArgs {
    RunArgs {
        config_path: Some(config_path.to_string_lossy().into_owned()),
        profile: Some(TEST_STEAM_ID.to_string()),
        image_type: Some(image_type.to_string()),
        throttle: Some(false),
        open_folder: Some(false),
        non_interactive: true,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_all_image_types_end_to_end() {
    init_tracing();

    let server = MockServer::start().await;
    let temp = TempDir::new().unwrap();
    let output = temp.child("out");

    mount_games_page(&server, &format!("/profiles/{TEST_STEAM_ID}"), &[10, 20]).await;
    mount_asset(&server, 10, "logo.png", b"logo-10", 1).await;
    mount_asset(&server, 10, "library_600x900.jpg", b"cover-10", 1).await;
    mount_missing_assets(&server).await;

    let config = create_test_config(&server, output.path());
    let config_path = write_test_config(temp.path(), &config).unwrap();

    let mut prompter = ScriptedPrompter::non_interactive();
    let params = resolve_command(
        run_args(&config_path, "a"),
        &mut prompter,
        &FixedFolder(temp.path().to_path_buf()),
    )
    .expect("Parameters should resolve");
    let outcome = run_download(params, &mut prompter)
        .await
        .expect("Run should succeed");

    let (outcomes, folders_removed) = match outcome {
        RunOutcome::Completed {
            outcomes,
            folders_removed,
        } => (outcomes, folders_removed),
        other => panic!("Expected a completed run, got {other:?}"),
    };

    assert_eq!(outcomes.len(), 12, "Two apps times six image types");
    assert_eq!(
        outcomes
            .iter()
            .filter(|outcome| matches!(outcome, ItemOutcome::Downloaded { .. }))
            .count(),
        2
    );
    assert!(
        outcomes
            .iter()
            .all(|outcome| outcome.status().is_some()),
        "Every entry should have been requested: {outcomes:?}"
    );
    assert_eq!(outcomes[0], ItemOutcome::Downloaded { status: 200 });
    assert_eq!(outcomes[1], ItemOutcome::HttpStatus { status: 404 });

    output.child("10/logo.png").assert("logo-10");
    output.child("10/library_600x900.jpg").assert("cover-10");
    output
        .child("10/header.jpg")
        .assert(predicate::path::missing());
    output.child("20").assert(predicate::path::missing());
    assert_eq!(folders_removed, 1);
    assert!(prompter.asked().is_empty());
}

#[tokio::test]
async fn test_second_run_skips_existing_files() {
    init_tracing();

    let server = MockServer::start().await;
    let temp = TempDir::new().unwrap();
    let output = temp.child("out");

    mount_games_page(&server, &format!("/profiles/{TEST_STEAM_ID}"), &[10, 10]).await;
    mount_asset(&server, 10, "header.jpg", b"header-10", 1).await;

    let config = create_test_config(&server, output.path());
    let config_path = write_test_config(temp.path(), &config).unwrap();
    let folders = FixedFolder(temp.path().to_path_buf());

    let mut outcomes = Vec::new();
    for _ in 0..2 {
        let mut prompter = ScriptedPrompter::non_interactive();
        let params = resolve_command(run_args(&config_path, "1"), &mut prompter, &folders)
            .expect("Parameters should resolve");
        match run_download(params, &mut prompter).await.unwrap() {
            RunOutcome::Completed { outcomes: run, .. } => outcomes.push(run),
            RunOutcome::EmptyProfile => panic!("Profile should not be empty"),
        }
    }

    // The duplicate id in the page is queued twice; the second entry already
    // finds the file written by the first.
    assert_eq!(
        outcomes[0],
        vec![ItemOutcome::Downloaded { status: 200 }, ItemOutcome::Skipped]
    );
    assert_eq!(outcomes[1], vec![ItemOutcome::Skipped, ItemOutcome::Skipped]);
    output.child("10/header.jpg").assert("header-10");
}

#[tokio::test]
async fn test_interactive_session_with_profile_url() {
    init_tracing();

    let server = MockServer::start().await;
    let temp = TempDir::new().unwrap();
    let output = temp.child("out");

    mount_games_page(&server, "/id/tester", &[730]).await;
    mount_asset(&server, 730, "library_hero.jpg", b"hero", 1).await;

    let config = create_test_config(&server, output.path());
    let config_path = write_test_config(temp.path(), &config).unwrap();
    let authority = server.uri().trim_start_matches("http://").to_string();

    let mut prompter = ScriptedPrompter::new([
        "https://example.com/id/tester".to_string(),
        format!("{authority}/id/tester/"),
        "all".to_string(),
        "2".to_string(),
        "n".to_string(),
        "n".to_string(),
    ]);
    let command = RunArgs {
        config_path: Some(config_path.to_string_lossy().into_owned()),
        ..Default::default()
    };

    let params = resolve_command(
        command,
        &mut prompter,
        &FixedFolder(temp.path().to_path_buf()),
    )
    .expect("Parameters should resolve");
    assert_eq!(
        params.profile.as_str(),
        format!("{}/id/tester", server.uri())
    );
    assert_eq!(params.download_options.throttle, None);

    let outcome = run_download(params, &mut prompter).await.unwrap();

    assert_eq!(
        outcome,
        RunOutcome::Completed {
            outcomes: vec![ItemOutcome::Downloaded { status: 200 }],
            folders_removed: 0,
        }
    );
    output.child("730/library_hero.jpg").assert("hero");
    assert_eq!(prompter.remaining(), 0);
}

#[tokio::test]
async fn test_empty_profile_non_interactive() {
    init_tracing();

    let server = MockServer::start().await;
    let temp = TempDir::new().unwrap();
    let output = temp.child("out");

    mount_games_page(&server, &format!("/profiles/{TEST_STEAM_ID}"), &[]).await;

    let config = create_test_config(&server, output.path());
    let config_path = write_test_config(temp.path(), &config).unwrap();

    let mut prompter = ScriptedPrompter::non_interactive();
    let params = resolve_command(
        run_args(&config_path, "0"),
        &mut prompter,
        &FixedFolder(temp.path().to_path_buf()),
    )
    .unwrap();
    let outcome = run_download(params, &mut prompter).await.unwrap();

    assert_eq!(outcome, RunOutcome::EmptyProfile);
    output.assert(predicate::path::is_dir());
    assert_eq!(std::fs::read_dir(output.path()).unwrap().count(), 0);
}
