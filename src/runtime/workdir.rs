use crate::core::config::{GETTING_STARTED_URL, NO_PROJECT_FOLDER_MESSAGE, SAVE_VIEW_MESSAGE};
use crate::core::{Error, Result};
use crate::runtime::host::EditorHost;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use url::Url;

/// Choose the directory behave runs in
///
/// The last project folder wins: users tend to append the folder they want to
/// test to an existing project rather than prepend it. Without project folders
/// the user is told why, offered the setup docs, and the directory holding the
/// active file is used instead.
///
/// # Errors
///
/// Returns [`Error::UnsavedFile`] if the fallback is needed and the active
/// document still has no path after the user was asked to save it.
pub fn select_working_dir<H>(host: &mut H) -> Result<PathBuf>
where
    H: EditorHost + ?Sized,
{
    if let Some(folder) = host.project_folders().pop() {
        debug!("Running behave in project folder {}", folder.display());
        return Ok(folder);
    }

    if host.confirm(NO_PROJECT_FOLDER_MESSAGE) {
        match Url::parse(GETTING_STARTED_URL) {
            Ok(url) => host.open_url(&url),
            Err(e) => warn!("Invalid documentation URL {}: {}", GETTING_STARTED_URL, e),
        }
    }

    let file = match host.active_file() {
        Some(file) => file,
        None => {
            host.confirm(SAVE_VIEW_MESSAGE);
            host.prompt_save();
            host.active_file().ok_or(Error::UnsavedFile)?
        }
    };

    let dir = parent_dir(&file);
    info!(
        "No project folder open, using the directory of {}: {}",
        file.display(),
        dir.display()
    );
    Ok(dir)
}

fn parent_dir(file: &Path) -> PathBuf {
    match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
