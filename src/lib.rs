//! # behave-toolkit
//!
//! Locate the [behave](https://behave.readthedocs.io) BDD runner, run it from
//! the right project folder, and stream its output into an editor panel.
//!
//! The editor itself stays behind the [`EditorHost`] and [`OutputSink`]
//! traits, so the same runner powers an editor plugin, the `behave-toolkit`
//! command-line front end (feature `cli`), and tests.
//!
//! ```rust,no_run
//! # use behave_toolkit::{BehaveRunner, EditorHost, RunOptions};
//! # async fn example<H: EditorHost>(host: H) -> behave_toolkit::Result<()> {
//! let mut runner = BehaveRunner::builder().build(host)?;
//! let output = runner.behave(["--dry-run"], RunOptions::streaming()).await?;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod core;
pub mod runtime;

#[cfg(feature = "cli")]
#[cfg_attr(docsrs, doc(cfg(feature = "cli")))]
pub mod cli;

pub use crate::core::{CommandLine, CommandSettings, Error, Platform, Result, RunOptions};
pub use crate::runtime::{BehaveRunner, BehaveRunnerBuilder, EditorHost, OutputSink, SearchPath};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
