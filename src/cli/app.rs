use crate::cli::config::Config;
use crate::cli::error::{CliError, Result};
use crate::cli::terminal::TerminalHost;
use crate::core::RunOptions;
use crate::runtime::BehaveRunner;
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::path::PathBuf;
use tracing::{debug, info};

/// Run the behave BDD runner from the right project folder
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress log output (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file to use instead of the default location
    #[arg(long, global = true, env = "BEHAVE_TOOLKIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Project folder; repeat to add several, the last one is used
    #[arg(long = "project-dir", global = true)]
    pub project_dirs: Vec<PathBuf>,

    /// Active feature file, used when no project folder is given
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Answer every confirmation with OK
    #[arg(short, long, global = true)]
    pub yes: bool,

    /// Disable colored notices
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run behave, streaming its output
    Run(RunCommand),

    /// Print the command line behave would be launched with
    Which(WhichCommand),

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug)]
pub struct RunCommand {
    /// Print the output only once behave has finished
    #[arg(long)]
    pub no_stream: bool,

    /// Arguments passed through to behave
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

#[derive(Args, Debug)]
pub struct WhichCommand {
    /// Arguments to append, as `run` would
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Print the config file location
    Path,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let config_path = match self.config.clone() {
            Some(path) => path,
            None => Config::default_path()?,
        };
        debug!("Using config file {}", config_path.display());

        match &self.command {
            Commands::Config { action } => return action.execute(&config_path, &self),
            Commands::Completion { shell } => {
                generate_completion(*shell);
                return Ok(());
            }
            _ => {}
        }

        let config = Config::load_from_file(&config_path)?.merge_with_cli_args(&self);
        let host = self.terminal_host(&config)?;
        let mut runner = BehaveRunner::builder()
            .settings(config.command_settings())
            .build(host)?;

        match self.command {
            Commands::Run(cmd) => {
                let options = RunOptions {
                    print_stream: config.stream && !cmd.no_stream,
                };
                let output = runner.behave_with_status(cmd.args, options).await?;
                if !options.print_stream {
                    print!("{}", output.stdout);
                }
                info!("behave finished, {} bytes of output", output.stdout.len());

                // Failing scenarios fail the shell command too
                if output.status.success() {
                    Ok(())
                } else {
                    Err(CliError::BehaveFailed {
                        code: output.status.code(),
                    })
                }
            }
            Commands::Which(cmd) => {
                let line = runner.command_line(cmd.args)?;
                println!("{}", line);
                Ok(())
            }
            Commands::Config { .. } | Commands::Completion { .. } => Ok(()),
        }
    }

    /// Host built from `--project-dir` and `--file`
    ///
    /// With neither flag the current directory is the project folder.
    pub fn terminal_host(&self, config: &Config) -> Result<TerminalHost> {
        let folders = if self.project_dirs.is_empty() && self.file.is_none() {
            vec![std::env::current_dir()?]
        } else {
            self.project_dirs.clone()
        };

        Ok(TerminalHost::new(folders, self.file.clone())
            .assume_yes(config.assume_yes)
            .color(config.color))
    }
}

impl ConfigAction {
    fn execute(&self, path: &std::path::Path, cli: &Cli) -> Result<()> {
        match self {
            Self::Show => {
                let config = Config::load_from_file(path)?.merge_with_cli_args(cli);
                print!("{}", config.to_toml()?);
            }
            Self::Path => println!("{}", path.display()),
            Self::Init { force } => {
                if path.exists() && !force {
                    println!("Config file already exists at {}", path.display());
                } else {
                    Config::default().save_to_file(path)?;
                    println!("Wrote default config to {}", path.display());
                }
            }
        }
        Ok(())
    }
}

/// Generate shell completion script
fn generate_completion(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut std::io::stdout());
}
