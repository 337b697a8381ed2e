use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn skip_probe_run_passes_and_exits_zero() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("subcheck")?;

    cmd.arg("--skip-probe")
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ extractor-core exposes initialize_video_capture"))
        .stdout(predicate::str::contains("✓ frontend-controller exposes re_encode_video"))
        .stdout(predicate::str::contains("All checks passed."));

    Ok(())
}

#[test]
fn missing_tool_fails_with_exit_code_one() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("subcheck")?;

    cmd.args(["reencode", "--tool", "definitely-not-installed-anywhere"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("✗"))
        .stdout(predicate::str::contains("Some checks failed."));

    Ok(())
}

#[test]
fn workflow_suite_needs_no_external_tool() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("subcheck")?;

    cmd.arg("workflow")
        .assert()
        .success()
        .stdout(predicate::str::contains("re-encode recorded when file is loaded"))
        .stdout(predicate::str::contains("no second re-encode when processing starts"));

    Ok(())
}

#[test]
fn invalid_timeout_override_is_a_startup_error() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("subcheck")?;

    cmd.args(["--skip-probe", "--timeout", "not-a-duration"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid probe timeout"));

    Ok(())
}

#[test]
fn config_file_drives_the_probe() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let config_path = dir.path().join("subcheck.yaml");
    std::fs::write(
        &config_path,
        "tool:\n  program: definitely-not-installed-anywhere\n  timeout: 1s\n",
    )?;

    let mut cmd = Command::cargo_bin("subcheck")?;
    cmd.arg("reencode")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "definitely-not-installed-anywhere responds to version query",
        ));

    Ok(())
}

#[test]
fn help_lists_both_suites() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("subcheck")?;

    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("reencode"))
        .stdout(predicate::str::contains("workflow"));

    Ok(())
}
