use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tokio::time::timeout;

/// Default timeout for a version query against an external tool.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Availability probe for an external command-line tool.
///
/// The tool is invoked once with a version-query flag. Availability is a
/// plain boolean: a missing binary, a spawn failure, or a query that runs
/// past the timeout all count as "unavailable" rather than an error.
#[derive(Debug, Clone)]
pub struct ToolProbe {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl ToolProbe {
    pub fn new(program: impl Into<String>, args: Vec<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            args,
            timeout,
        }
    }

    /// The probe the subtitle pipeline cares about: `ffmpeg -version`.
    pub fn ffmpeg() -> Self {
        Self::new("ffmpeg", vec!["-version".to_string()], DEFAULT_PROBE_TIMEOUT)
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run the version query. True only if the process starts and exits
    /// with status 0 before the timeout. No retries, no output parsing.
    pub async fn is_available(&self) -> bool {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .stdin(Stdio::null())
            .kill_on_drop(true);

        let mut child = match cmd.spawn() {
            Ok(child) => child,
            Err(e) => {
                tracing::debug!(program = %self.program, error = %e, "probe spawn failed");
                return false;
            }
        };

        match timeout(self.timeout, child.wait()).await {
            Ok(Ok(status)) => status.success(),
            Ok(Err(e)) => {
                tracing::debug!(program = %self.program, error = %e, "probe wait failed");
                false
            }
            Err(_) => {
                tracing::debug!(program = %self.program, timeout = ?self.timeout,
                    "probe timed out");
                // kill_on_drop reaps the child when it falls out of scope.
                false
            }
        }
    }
}
