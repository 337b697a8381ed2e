use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SubcheckError};
use crate::probe::{ToolProbe, DEFAULT_PROBE_TIMEOUT};

/// Top-level configuration, loadable from a YAML file. Every field has a
/// working default so the tool runs with no config at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SubcheckConfig {
    pub tool: ToolConfig,
    /// Skip the availability probe entirely (structural checks only).
    pub skip_probe: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolConfig {
    pub program: String,
    pub args: Vec<String>,
    /// Humantime duration string, e.g. "10s".
    pub timeout: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            program: "ffmpeg".to_string(),
            args: vec!["-version".to_string()],
            timeout: "10s".to_string(),
        }
    }
}

impl Default for SubcheckConfig {
    fn default() -> Self {
        Self {
            tool: ToolConfig::default(),
            skip_probe: false,
        }
    }
}

impl SubcheckConfig {
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        match config_path {
            Some(path) => {
                let contents = std::fs::read_to_string(path)?;
                let config: SubcheckConfig = serde_yaml::from_str(&contents)?;
                config.validate()?;
                Ok(config)
            }
            None => Ok(SubcheckConfig::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.tool.program.trim().is_empty() {
            return Err(SubcheckError::Config(
                "tool.program must not be empty".to_string(),
            ));
        }
        self.probe_timeout()?;
        Ok(())
    }

    pub fn probe_timeout(&self) -> Result<Duration> {
        if self.tool.timeout.trim().is_empty() {
            return Ok(DEFAULT_PROBE_TIMEOUT);
        }
        humantime::parse_duration(&self.tool.timeout)
            .map_err(|e| SubcheckError::Duration(self.tool.timeout.clone(), e))
    }

    pub fn tool_probe(&self) -> Result<ToolProbe> {
        Ok(ToolProbe::new(
            self.tool.program.clone(),
            self.tool.args.clone(),
            self.probe_timeout()?,
        ))
    }
}
