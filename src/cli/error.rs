use thiserror::Error;

/// Error type for the behave-toolkit command-line front end
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Toolkit(#[from] crate::core::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("behave exited with status {}", .code.map_or_else(|| "unknown".to_string(), |c| c.to_string()))]
    BehaveFailed { code: Option<i32> },
}

impl CliError {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        Self::Configuration(msg.into())
    }

    /// Process exit code for this error
    ///
    /// A failed behave run passes its own code through so shells and CI see it.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::BehaveFailed { code: Some(code) } if *code != 0 => *code,
            _ => 1,
        }
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        use crate::core::Error as ToolkitError;

        match self {
            Self::Toolkit(ToolkitError::ToolNotFound(program)) => format!(
                "{} could not be found. Install it (pip install behave) or set behave_command \
                 in the file shown by 'behave-toolkit config path'.",
                program
            ),
            Self::Toolkit(ToolkitError::ToolConfig(output)) => format!(
                "behave could not load its configuration:\n{}",
                output.trim_end()
            ),
            Self::Toolkit(ToolkitError::UnsavedFile) => {
                "No project folder and no feature file given. Pass --project-dir or --file."
                    .to_string()
            }
            _ => self.to_string(),
        }
    }
}

/// Convenient result type for the CLI
pub type Result<T> = std::result::Result<T, CliError>;
