use crate::core::config::{BEHAVE_PROGRAM, NOT_FOUND_NOTICE};
use crate::core::{CommandLine, CommandSettings, Error, Result};
use crate::runtime::host::EditorHost;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Where to look for the behave executable when none is configured
#[derive(Debug, Clone, Default)]
pub enum SearchPath {
    /// The `PATH` of the current process
    #[default]
    Environment,
    /// An explicit, `PATH`-formatted list of directories
    Custom(OsString),
}

impl SearchPath {
    /// Locate `program`, returning its absolute path
    pub fn find(&self, program: &str) -> Option<PathBuf> {
        let found = match self {
            Self::Environment => which::which(program),
            Self::Custom(paths) => {
                let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
                which::which_in(program, Some(paths), cwd)
            }
        };
        found.ok()
    }
}

/// Produce the argv prefix used to invoke behave
///
/// A configured command (the per-view override first, then the global
/// setting) is returned verbatim. Otherwise `search_path` is searched for a
/// `behave` executable. When neither yields a command, a status notice is
/// shown on `host` and [`Error::ToolNotFound`] is returned.
pub fn resolve_command<H>(
    settings: &CommandSettings,
    search_path: &SearchPath,
    host: &mut H,
) -> Result<CommandLine>
where
    H: EditorHost + ?Sized,
{
    if let Some(line) = settings
        .configured_command()
        .and_then(|command| CommandLine::from_argv(command.iter().cloned()))
    {
        debug!("Using configured behave command: {}", line);
        return Ok(line);
    }

    match search_path.find(BEHAVE_PROGRAM) {
        Some(path) => {
            let line = CommandLine::new(path.to_string_lossy());
            debug!("Found behave on the search path: {}", line);
            Ok(line)
        }
        None => {
            warn!("{} is not configured and not on the search path", BEHAVE_PROGRAM);
            host.status_message(NOT_FOUND_NOTICE);
            Err(Error::ToolNotFound(BEHAVE_PROGRAM.to_string()))
        }
    }
}
