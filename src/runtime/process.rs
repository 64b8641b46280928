use crate::core::config::CONFIG_ERROR_MARKER;
use crate::core::{CommandLine, Error, Platform, Result};
use crate::runtime::host::OutputSink;
use crate::runtime::stream::{forward_lines, normalize_newlines, stream_lines};
use std::collections::BTreeMap;
use std::future::Future;
use std::io;
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Everything needed to start one behave process
#[derive(Debug, Clone)]
pub struct LaunchRequest<'a> {
    pub command: &'a CommandLine,
    pub working_dir: &'a Path,
    pub environment: &'a BTreeMap<String, String>,
    pub platform: Platform,
}

/// What a finished behave process left behind
#[derive(Debug, Clone)]
pub struct LaunchOutput {
    /// Everything written to stdout, with universal newlines
    pub stdout: String,
    /// Exit status; non-zero when scenarios failed
    pub status: ExitStatus,
}

/// Run a command to completion and return everything it wrote to stdout
///
/// With a `sink`, the sink is cleared once and then receives each line as it
/// is produced; the returned text is the same either way. stderr and stdin
/// are inherited. A non-zero exit status is not treated as a failure since
/// behave uses it to report failing scenarios.
///
/// # Errors
///
/// - [`Error::Spawn`] if the program could not be started
/// - [`Error::ToolConfig`] if the output starts with `ConfigError`
/// - [`Error::Io`] or [`Error::Task`] if reading the output failed
pub async fn launch(
    request: LaunchRequest<'_>,
    sink: Option<&mut dyn OutputSink>,
) -> Result<String> {
    launch_with_status(request, sink)
        .await
        .map(|output| output.stdout)
}

/// Like [`launch`], but also report the exit status
pub async fn launch_with_status(
    request: LaunchRequest<'_>,
    sink: Option<&mut dyn OutputSink>,
) -> Result<LaunchOutput> {
    let mut cmd = Command::new(request.command.program());
    cmd.args(request.command.args())
        .current_dir(request.working_dir)
        .envs(request.environment)
        .stdout(Stdio::piped());
    hide_console_window(&mut cmd, request.platform);

    info!(
        "Launching {} in {}",
        request.command,
        request.working_dir.display()
    );

    let mut child = cmd
        .spawn()
        .map_err(|e| Error::spawn(request.command.program(), e))?;

    let (stdout, status) = match sink {
        Some(sink) => {
            sink.clear();
            let stdout = child.stdout.take().ok_or_else(|| {
                io::Error::new(io::ErrorKind::Other, "child stdout was not captured")
            })?;

            let (lines, streamer) = stream_lines(stdout);
            let captured = forward_lines(lines, sink).await;
            let status = reap_after_stream(streamer, child.wait()).await?;
            (captured, status)
        }
        None => {
            let output = child.wait_with_output().await?;
            let stdout = normalize_newlines(&String::from_utf8_lossy(&output.stdout));
            (stdout, output.status)
        }
    };
    debug!("behave exited with {}", status);

    Ok(LaunchOutput {
        stdout: check_output(stdout)?,
        status,
    })
}

/// Wait for the child, then surface any failure of the output reader
pub(crate) async fn reap_after_stream<W>(
    streamer: JoinHandle<io::Result<()>>,
    wait: W,
) -> Result<ExitStatus>
where
    W: Future<Output = io::Result<ExitStatus>>,
{
    let streamed = streamer.await;
    let status = wait.await?;
    streamed??;
    Ok(status)
}

/// Reject output that reports a behave configuration error
pub fn check_output(output: String) -> Result<String> {
    if output.starts_with(CONFIG_ERROR_MARKER) {
        warn!("behave reported a configuration error");
        return Err(Error::ToolConfig(output));
    }
    Ok(output)
}

/// Keep Windows from opening a console window for the child
#[cfg_attr(not(windows), allow(unused_variables))]
fn hide_console_window(cmd: &mut Command, platform: Platform) {
    if !platform.is_windows() {
        return;
    }

    #[cfg(windows)]
    {
        const CREATE_NO_WINDOW: u32 = 0x0800_0000;
        cmd.creation_flags(CREATE_NO_WINDOW);
    }
}
