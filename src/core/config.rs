use crate::core::error::{Error, Result};
use std::collections::BTreeMap;

/// Name of the executable searched for when no command is configured
pub const BEHAVE_PROGRAM: &str = "behave";

/// Prefix behave prints when its own configuration cannot be loaded
pub const CONFIG_ERROR_MARKER: &str = "ConfigError";

/// Page opened when the project has no folders
pub const GETTING_STARTED_URL: &str =
    "http://behavetoolkit.readthedocs.io/en/latest/gettingstarted.html";

/// Status notice shown when behave cannot be located
pub const NOT_FOUND_NOTICE: &str = "behave could not be found. Is it installed?";

/// Dialog shown before falling back to the active file's directory
pub const NO_PROJECT_FOLDER_MESSAGE: &str = "You either do not have a folder defined in your \
project, or you do not have a project open. Please open the folder that you would like to have \
Behave Toolkit working on. For now, we will use the folder of the current file.\n\nPlease hit \
OK to view the documentation on setting up your project.";

/// Dialog shown when the active file has no path yet
pub const SAVE_VIEW_MESSAGE: &str = "Please save the current view before continuing.";

/// How behave should be invoked
///
/// This is a plain value populated by whatever settings store the host uses.
/// The per-view override takes precedence over the global command when it is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandSettings {
    /// Global `behave_command` setting
    pub behave_command: Option<Vec<String>>,

    /// Override from the active document's settings
    pub view_command: Option<Vec<String>>,

    /// Extra environment variables for the child process
    pub environment: BTreeMap<String, String>,
}

impl CommandSettings {
    /// The configured command, honoring the per-view override
    ///
    /// An empty vector counts as unset so discovery still runs.
    pub fn configured_command(&self) -> Option<&[String]> {
        self.view_command
            .as_ref()
            .or(self.behave_command.as_ref())
            .map(Vec::as_slice)
            .filter(|command| !command.is_empty())
    }

    /// Validate the configured command vectors
    ///
    /// # Errors
    ///
    /// Returns an error if a configured command names an empty program
    pub fn validate(&self) -> Result<()> {
        for (name, command) in [
            ("behave_command", &self.behave_command),
            ("view behave_command", &self.view_command),
        ] {
            if let Some(program) = command.as_ref().and_then(|c| c.first()) {
                if program.trim().is_empty() {
                    return Err(Error::invalid_config(format!(
                        "{} must start with a program name",
                        name
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Per-invocation options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Stream output to the host's output panel while behave runs
    pub print_stream: bool,
}

impl RunOptions {
    /// Options with live streaming enabled
    pub fn streaming() -> Self {
        Self { print_stream: true }
    }
}
