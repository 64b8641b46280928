use thiserror::Error as ThisError;

/// Errors produced while resolving, locating or launching behave
#[derive(ThisError, Debug)]
pub enum Error {
    /// No command was configured and the executable is not on the search path
    #[error("{0} could not be found. Is it installed?")]
    ToolNotFound(String),

    /// The tool started but reported a configuration problem on stdout
    #[error("An error occurred while launching behave.\n{0}")]
    ToolConfig(String),

    /// The working directory had to come from the active file, which was never saved
    #[error("The current view has not been saved, so no working directory could be derived from it")]
    UnsavedFile,

    /// The configured command vector is unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The operating system refused to start the program
    #[error("Failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Output streaming task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl Error {
    /// Create a spawn error for `program`
    pub fn spawn<S: Into<String>>(program: S, source: std::io::Error) -> Self {
        Self::Spawn {
            program: program.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// True for failures reported about the tool itself rather than the plumbing around it
    pub fn is_tool_error(&self) -> bool {
        matches!(self, Self::ToolNotFound(_) | Self::ToolConfig(_))
    }

    /// The captured output carried by a configuration error, if any
    pub fn tool_output(&self) -> Option<&str> {
        match self {
            Self::ToolConfig(output) => Some(output),
            _ => None,
        }
    }
}

/// Convenient result type for the toolkit
pub type Result<T> = std::result::Result<T, Error>;
