//! Core types shared by the resolver, selector and launcher

pub mod config;
pub mod error;
pub mod types;

pub use config::{CommandSettings, RunOptions};
pub use error::{Error, Result};
pub use types::{CommandLine, Platform};
