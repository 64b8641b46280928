use crate::cli::error::{CliError, Result};
use crate::core::CommandSettings;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Configuration settings for the behave-toolkit CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Command used to launch behave; looked up on PATH when unset
    #[serde(default)]
    pub behave_command: Option<Vec<String>>,

    /// Answer every confirmation prompt with OK
    #[serde(default)]
    pub assume_yes: bool,

    /// Enable colored notices
    #[serde(default = "default_true")]
    pub color: bool,

    /// Stream output while behave runs
    #[serde(default = "default_true")]
    pub stream: bool,

    /// Extra environment variables for behave
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            behave_command: None,
            assume_yes: false,
            color: default_true(),
            stream: default_true(),
            env: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Load configuration from file, with fallback to defaults
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            // Create default config file
            let config = Self::default();
            config.save_to_file(path)?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CliError::configuration(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::configuration(format!("Failed to serialize config: {}", e)))
    }

    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let data_dir = crate::cli::ensure_data_dir()?;
        Ok(data_dir.join("config.toml"))
    }

    /// Merge with command-line arguments, giving priority to CLI args
    pub fn merge_with_cli_args(mut self, cli_args: &crate::cli::app::Cli) -> Self {
        // Flags can only switch these on or off, never back
        if cli_args.yes {
            self.assume_yes = true;
        }
        if cli_args.no_color {
            self.color = false;
        }
        self
    }

    /// The command settings handed to the runner
    pub fn command_settings(&self) -> CommandSettings {
        CommandSettings {
            behave_command: self.behave_command.clone(),
            view_command: None,
            environment: self.env.clone(),
        }
    }
}

fn default_true() -> bool {
    true
}
