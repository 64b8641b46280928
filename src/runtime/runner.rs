use crate::core::{CommandLine, CommandSettings, Result, RunOptions};
use crate::runtime::host::EditorHost;
use crate::runtime::process::{launch_with_status, LaunchOutput, LaunchRequest};
use crate::runtime::resolver::{resolve_command, SearchPath};
use crate::runtime::workdir::select_working_dir;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::debug;

/// Runs behave on behalf of an editor host
///
/// The runner resolves the command, picks a working directory from the
/// host's project, and launches behave, optionally streaming its output into
/// the host's output panel.
///
/// # Examples
///
/// ```rust,no_run
/// # use behave_toolkit::{BehaveRunner, EditorHost, RunOptions};
/// # async fn run<H: EditorHost>(host: H) -> behave_toolkit::Result<()> {
/// let mut runner = BehaveRunner::builder()
///     .behave_command(["python3", "-m", "behave"])
///     .build(host)?;
///
/// let output = runner
///     .behave(["--dry-run", "features/login.feature"], RunOptions::streaming())
///     .await?;
/// println!("{}", output);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct BehaveRunner<H> {
    settings: CommandSettings,
    search_path: SearchPath,
    host: H,
}

impl BehaveRunner<()> {
    /// Create a new runner builder for fluent configuration
    ///
    /// The host is supplied last, to [`BehaveRunnerBuilder::build`].
    pub fn builder() -> BehaveRunnerBuilder {
        BehaveRunnerBuilder::new()
    }
}

impl<H: EditorHost> BehaveRunner<H> {
    /// Create a runner with the given settings, searching the process `PATH`
    pub fn new(settings: CommandSettings, host: H) -> Self {
        Self {
            settings,
            search_path: SearchPath::Environment,
            host,
        }
    }

    pub fn settings(&self) -> &CommandSettings {
        &self.settings
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    /// The full command line `behave` would run with `args`, without launching it
    pub fn command_line<I, S>(&mut self, args: I) -> Result<CommandLine>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let base = resolve_command(&self.settings, &self.search_path, &mut self.host)?;
        Ok(base.with_args(args))
    }

    /// Run behave with `args` and return its standard output
    ///
    /// Empty arguments are dropped. With `options.print_stream` the host's
    /// output panel is cleared and then fed each line while behave runs.
    ///
    /// # Errors
    ///
    /// Fails if behave cannot be located, no working directory can be
    /// chosen, the process cannot be started, or behave reports a
    /// configuration error.
    pub async fn behave<I, S>(&mut self, args: I, options: RunOptions) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.behave_with_status(args, options)
            .await
            .map(|output| output.stdout)
    }

    /// Like [`behave`](Self::behave), but also report behave's exit status
    pub async fn behave_with_status<I, S>(
        &mut self,
        args: I,
        options: RunOptions,
    ) -> Result<LaunchOutput>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let command = self.command_line(args)?;
        let working_dir = select_working_dir(&mut self.host)?;
        let platform = self.host.platform();
        debug!("Running {} (stream: {})", command, options.print_stream);

        let request = LaunchRequest {
            command: &command,
            working_dir: &working_dir,
            environment: &self.settings.environment,
            platform,
        };

        if options.print_stream {
            launch_with_status(request, Some(self.host.output_panel())).await
        } else {
            launch_with_status(request, None).await
        }
    }
}

/// Builder for creating `BehaveRunner` instances
///
/// # Examples
///
/// ```rust,no_run
/// # use behave_toolkit::{BehaveRunner, EditorHost};
/// # fn build<H: EditorHost>(host: H) -> behave_toolkit::Result<()> {
/// let runner = BehaveRunner::builder()
///     .behave_command(["behave", "--no-color"])
///     .env("PYTHONUNBUFFERED", "1")
///     .build(host)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct BehaveRunnerBuilder {
    settings: CommandSettings,
    search_path: SearchPath,
}

impl BehaveRunnerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a pre-built `CommandSettings` value
    pub fn settings(mut self, settings: CommandSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Set the global behave command
    pub fn behave_command<I, S>(mut self, command: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.settings.behave_command = Some(command.into_iter().map(Into::into).collect());
        self
    }

    /// Set the per-view override, which wins over the global command
    pub fn view_command<I, S>(mut self, command: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.settings.view_command = Some(command.into_iter().map(Into::into).collect());
        self
    }

    /// Add an environment variable for the behave process
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.settings.environment.insert(key.into(), value.into());
        self
    }

    /// Search these directories instead of `PATH` when locating behave
    pub fn search_path(mut self, paths: impl Into<OsString>) -> Self {
        self.search_path = SearchPath::Custom(paths.into());
        self
    }

    /// Search a list of directories instead of `PATH`
    pub fn search_dirs<I, P>(self, dirs: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let dirs: Vec<PathBuf> = dirs.into_iter().map(Into::into).collect();
        let joined = std::env::join_paths(dirs)
            .map_err(|e| crate::core::Error::invalid_config(e.to_string()))?;
        Ok(self.search_path(joined))
    }

    /// Build the runner
    ///
    /// # Errors
    ///
    /// Returns an error if the configured command is invalid
    pub fn build<H: EditorHost>(self, host: H) -> Result<BehaveRunner<H>> {
        self.settings.validate()?;
        Ok(BehaveRunner {
            settings: self.settings,
            search_path: self.search_path,
            host,
        })
    }
}
