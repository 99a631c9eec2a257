use crate::args::Args;
use crate::config::target::TargetConfig;
use crate::config::traits::ConfigEntity;
use anyhow::{bail, Context, Result};
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub mod target;
mod traits;

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub target: TargetConfig,
}

impl ConfigEntity for AppConfig {
    fn finalize(&mut self) -> Result<()> {
        self.target.finalize()?;

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        self.target.validate()?;

        Ok(())
    }
}

impl AppConfig {
    /// Command line flags win over whatever the file said.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(host) = &args.host {
            self.target.host = host.clone();
        }

        if let Some(port) = args.port {
            self.target.port = port;
        }
    }
}

/// Resolve the configuration from an optional file plus command line overrides.
///
/// Without a file the built-in defaults are used (`localhost:8000`, session
/// `cli-verify-session`, no timeout). A file that was asked for but is missing is an error.
pub fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(file_path) => read_config(file_path)?,
        None => {
            debug!("No config file given, using defaults");
            AppConfig::default()
        }
    };

    config.apply_args(args);

    // Finalize the configuration to normalise overridden values too.
    config.finalize()?;

    // Validate the configuration to ensure all values are correct.
    config.validate()?;

    Ok(config)
}

fn read_config(file_path: &str) -> Result<AppConfig> {
    // Check if the file exists.
    if !Path::new(file_path).exists() {
        bail!("File `{}` does not exist.", file_path);
    }

    let config_content = fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read `{}`", file_path))?;

    debug!("Loaded config file `{}`", file_path);

    parse_config(&config_content)
}

fn parse_config(content: &str) -> Result<AppConfig> {
    toml::from_str(content).context("Failed to parse config")
}
