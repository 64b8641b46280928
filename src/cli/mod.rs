//! Command-line front end that runs behave from a terminal
//!
//! ## Usage
//!
//! ```bash
//! # Run behave in the current directory, streaming its output
//! behave-toolkit run -- --tags=@wip
//!
//! # Run against a specific project folder
//! behave-toolkit --project-dir ~/src/shop run -- features/cart.feature
//!
//! # Show which command would be launched
//! behave-toolkit which
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod terminal;

pub use app::Cli;
pub use error::{CliError, Result};
pub use terminal::{TerminalHost, TerminalPanel};

/// Default directory for storing the config file
pub fn default_data_dir() -> std::path::PathBuf {
    directories::ProjectDirs::from("", "", "behave-toolkit")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| std::path::PathBuf::from("."))
                .join(".behave-toolkit")
        })
}

/// Initialize the data directory if it doesn't exist
pub fn ensure_data_dir() -> Result<std::path::PathBuf> {
    let data_dir = default_data_dir();
    if !data_dir.exists() {
        std::fs::create_dir_all(&data_dir)?;
    }
    Ok(data_dir)
}
