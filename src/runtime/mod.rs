//! Resolving, placing and launching behave processes

pub mod host;
pub mod process;
pub mod resolver;
pub mod runner;
pub mod stream;
pub mod workdir;

#[cfg(test)]
pub(crate) mod test_support;


#[cfg(all(test, unix))]
mod runner_test;

pub use host::{EditorHost, OutputSink, Platform};
pub use process::{check_output, launch, launch_with_status, LaunchOutput, LaunchRequest};
pub use resolver::{resolve_command, SearchPath};
pub use runner::{BehaveRunner, BehaveRunnerBuilder};
pub use stream::{forward_lines, stream_lines, LineReceiver};
pub use workdir::select_working_dir;
