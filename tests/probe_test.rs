use std::time::Duration;

use subcheck::config::SubcheckConfig;
use subcheck::probe::ToolProbe;

#[tokio::test]
async fn absent_tool_reports_unavailable_without_raising() {
    let probe = ToolProbe::new(
        "definitely-not-installed-anywhere",
        vec!["-version".to_string()],
        Duration::from_secs(1),
    );
    assert!(!probe.is_available().await);
}

#[cfg(unix)]
#[tokio::test]
async fn timed_out_query_reports_unavailable() {
    let probe = ToolProbe::new(
        "sleep",
        vec!["30".to_string()],
        Duration::from_millis(200),
    );
    let started = std::time::Instant::now();
    assert!(!probe.is_available().await);
    // The probe must give up at its timeout, not wait for the child.
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn config_builds_the_probe_the_scripts_used() {
    let probe = SubcheckConfig::default().tool_probe().unwrap();
    assert_eq!(probe.program(), "ffmpeg");
}
