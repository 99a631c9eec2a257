use crate::config::traits::ConfigEntity;
use anyhow::{bail, Result};
use serde::Deserialize;
use std::time::Duration;

/// Where the probe request is sent.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TargetConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Placeholder value for the `sessionId` query parameter. Nothing is negotiated.
    #[serde(default = "default_session_id")]
    pub session_id: String,
    /// No timeout when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for TargetConfig {
    fn default() -> Self {
        TargetConfig {
            host: default_host(),
            port: default_port(),
            session_id: default_session_id(),
            timeout_secs: None,
        }
    }
}

impl ConfigEntity for TargetConfig {
    fn finalize(&mut self) -> Result<()> {
        self.host = self.host.trim().to_string();
        self.session_id = self.session_id.trim().to_string();

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            bail!("Target host is empty");
        }

        if self.port == 0 {
            bail!("Invalid target port: {}", self.port);
        }

        if self.session_id.is_empty() {
            bail!("Session id is empty");
        }

        if self.timeout_secs == Some(0) {
            bail!("Timeout must be greater than zero seconds");
        }

        Ok(())
    }
}

impl TargetConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_session_id() -> String {
    "cli-verify-session".to_string()
}
