//! End-to-end tests for `BehaveRunner` with a scripted host

use super::runner::BehaveRunner;
use super::test_support::{fake_behave_dir, HostEvent, PanelEvent, RecordingHost};
use crate::core::config::NOT_FOUND_NOTICE;
use crate::core::{CommandSettings, Error, RunOptions};

const ECHO_ARGS: &str = "#!/bin/sh\nfor arg in \"$@\"; do echo \"$arg\"; done\n";

fn runner_for(dir: &tempfile::TempDir, host: RecordingHost) -> BehaveRunner<RecordingHost> {
    BehaveRunner::builder()
        .search_path(dir.path().as_os_str())
        .build(host)
        .unwrap()
}

#[tokio::test]
async fn test_behave_streams_into_host_panel() {
    let dir = fake_behave_dir("#!/bin/sh\nprintf 'Scenario: A\\n'\nprintf 'Scenario: B\\n'\n");
    let project = tempfile::tempdir().unwrap();
    let host = RecordingHost::new().with_folders([project.path()]);
    let mut runner = runner_for(&dir, host);

    let output = runner
        .behave(Vec::<String>::new(), RunOptions::streaming())
        .await
        .unwrap();

    assert_eq!(output, "Scenario: A\nScenario: B\n");
    assert_eq!(runner.host().panel.clear_count(), 1);
    assert_eq!(
        runner.host().panel.events(),
        vec![
            PanelEvent::Clear,
            PanelEvent::Append("Scenario: A\n".to_string()),
            PanelEvent::Append("Scenario: B\n".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_behave_without_streaming_leaves_panel_alone() {
    let dir = fake_behave_dir("#!/bin/sh\nprintf 'Scenario: A\\n'\nprintf 'Scenario: B\\n'\n");
    let project = tempfile::tempdir().unwrap();
    let host = RecordingHost::new().with_folders([project.path()]);
    let mut runner = runner_for(&dir, host);

    let output = runner
        .behave(["--dry-run"], RunOptions::default())
        .await
        .unwrap();

    assert_eq!(output, "Scenario: A\nScenario: B\n");
    assert!(runner.host().panel.events().is_empty());
}

#[tokio::test]
async fn test_behave_with_status_reports_failures() {
    let dir = fake_behave_dir("#!/bin/sh\nprintf '1 scenario failed\\n'\nexit 1\n");
    let project = tempfile::tempdir().unwrap();
    let host = RecordingHost::new().with_folders([project.path()]);
    let mut runner = runner_for(&dir, host);

    let output = runner
        .behave_with_status(["--tags=@cart"], RunOptions::streaming())
        .await
        .unwrap();

    assert_eq!(output.stdout, "1 scenario failed\n");
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
}

#[tokio::test]
async fn test_empty_arguments_are_filtered() {
    let dir = fake_behave_dir(ECHO_ARGS);
    let project = tempfile::tempdir().unwrap();
    let host = RecordingHost::new().with_folders([project.path()]);
    let mut runner = runner_for(&dir, host);

    let output = runner
        .behave(["", "--format", "", "progress"], RunOptions::default())
        .await
        .unwrap();

    assert_eq!(output, "--format\nprogress\n");
}

#[tokio::test]
async fn test_configured_command_gets_args_appended() {
    let dir = fake_behave_dir(ECHO_ARGS);
    let script = dir.path().join("behave");
    let project = tempfile::tempdir().unwrap();
    let host = RecordingHost::new().with_folders([project.path()]);
    let mut runner = BehaveRunner::builder()
        .behave_command([script.to_string_lossy().to_string(), "--no-color".to_string()])
        .search_path("")
        .build(host)
        .unwrap();

    let output = runner
        .behave(["features/cart.feature"], RunOptions::default())
        .await
        .unwrap();

    assert_eq!(output, "--no-color\nfeatures/cart.feature\n");
}

#[tokio::test]
async fn test_missing_behave_notifies_host() {
    let empty = tempfile::tempdir().unwrap();
    let host = RecordingHost::new().with_folders(["/tmp"]);
    let mut runner = runner_for(&empty, host);

    let err = runner
        .behave(Vec::<String>::new(), RunOptions::streaming())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::ToolNotFound(_)));
    assert_eq!(runner.host().status_messages(), vec![NOT_FOUND_NOTICE]);
    assert!(runner.host().panel.events().is_empty());
}

#[tokio::test]
async fn test_unsaved_file_aborts_before_launch() {
    let dir = fake_behave_dir(ECHO_ARGS);
    let host = RecordingHost::new().confirming(false);
    let mut runner = runner_for(&dir, host);

    let err = runner
        .behave(Vec::<String>::new(), RunOptions::streaming())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::UnsavedFile));
    assert!(runner.host().events().contains(&HostEvent::PromptSave));
    assert!(runner.host().panel.events().is_empty());
}

#[tokio::test]
async fn test_falls_back_to_active_file_directory() {
    let dir = fake_behave_dir("#!/bin/sh\npwd\n");
    let project = tempfile::tempdir().unwrap();
    let feature = project.path().join("login.feature");
    let host = RecordingHost::new().with_active_file(&feature).confirming(false);
    let mut runner = runner_for(&dir, host);

    let output = runner
        .behave(Vec::<String>::new(), RunOptions::default())
        .await
        .unwrap();

    assert_eq!(
        std::fs::canonicalize(output.trim()).unwrap(),
        std::fs::canonicalize(project.path()).unwrap()
    );
}

#[tokio::test]
async fn test_command_line_resolves_without_launching() {
    let dir = fake_behave_dir(ECHO_ARGS);
    let mut runner = runner_for(&dir, RecordingHost::new());

    let line = runner.command_line(["-k", ""]).unwrap();

    assert_eq!(
        line.to_argv(),
        vec![
            dir.path().join("behave").to_string_lossy().to_string(),
            "-k".to_string()
        ]
    );
    assert!(runner.host().events().is_empty());
}

#[test]
fn test_builder_rejects_blank_program() {
    let result = BehaveRunner::builder()
        .settings(CommandSettings {
            behave_command: Some(vec![String::new()]),
            ..Default::default()
        })
        .build(RecordingHost::new());

    assert!(matches!(result, Err(Error::InvalidConfig(_))));
}

#[test]
fn test_search_dirs_joins_paths() {
    let first = tempfile::tempdir().unwrap();
    let second = fake_behave_dir(ECHO_ARGS);

    let mut runner = BehaveRunner::builder()
        .search_dirs([first.path(), second.path()])
        .unwrap()
        .build(RecordingHost::new())
        .unwrap();

    let line = runner.command_line(Vec::<String>::new()).unwrap();
    assert_eq!(
        line.program(),
        second.path().join("behave").to_string_lossy()
    );
}
