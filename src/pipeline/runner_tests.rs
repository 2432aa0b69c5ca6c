use super::*;
use std::fs;
use std::thread;
use std::time::Duration;
use tempfile::TempDir;

/// Poll until the runner reports or the attempts run out
fn wait_for_report(runner: &mut PipelineRunner, max_attempts: u32) -> Option<Report> {
    for _ in 0..max_attempts {
        if let Some(report) = runner.poll() {
            return Some(report);
        }
        thread::sleep(Duration::from_millis(10));
    }
    None
}

#[test]
fn test_runner_reports_stats_for_folder() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("m1.json"),
        r#"[{"batsman":"A","runs":30,"balls":20}]"#,
    )
    .unwrap();

    let mut runner = PipelineRunner::spawn(vec![dir.path().to_path_buf()], Settings::default());
    let report = wait_for_report(&mut runner, 500).expect("runner should finish");

    assert_eq!(report.table().unwrap().rows[0].runs, 30.0);
    assert!(!runner.is_running());
}

#[test]
fn test_runner_reports_invalid_path() {
    let mut runner = PipelineRunner::spawn(
        vec![PathBuf::from("/nonexistent/batstats/folder")],
        Settings::default(),
    );
    let report = wait_for_report(&mut runner, 500).expect("runner should finish");

    assert_eq!(report.error(), Some(&StatsError::NoValidData));
    assert!(matches!(
        report.diagnostics[0],
        StatsError::InvalidPath { .. }
    ));
}

#[test]
fn test_poll_returns_report_only_once() {
    let dir = TempDir::new().unwrap();
    let mut runner = PipelineRunner::spawn(vec![dir.path().to_path_buf()], Settings::default());

    assert!(wait_for_report(&mut runner, 500).is_some());
    assert!(runner.poll().is_none());
}

#[test]
fn test_runner_is_running_until_polled() {
    let dir = TempDir::new().unwrap();
    let runner = PipelineRunner::spawn(vec![dir.path().to_path_buf()], Settings::default());

    // The receiver is held until a poll picks up the report
    assert!(runner.is_running());
}
