//! Capabilities the toolkit borrows from its host editor
//!
//! The runner never talks to an editor directly. Everything it needs from the
//! surrounding application (project folders, the active file, dialogs, the
//! output panel) goes through these traits, so the same core drives an editor
//! plugin, the terminal front end, or a test double.

use std::path::PathBuf;
use url::Url;

pub use crate::core::types::Platform;

/// A text surface that receives behave's output as it is produced
pub trait OutputSink {
    /// Remove everything currently displayed
    fn clear(&mut self);

    /// Append `text` exactly as given; no line ending is added
    fn append(&mut self, text: &str);
}

/// The editor-side collaborators consulted while running behave
pub trait EditorHost {
    /// Folders of the open project, in the order the editor reports them
    fn project_folders(&self) -> Vec<PathBuf>;

    /// Path of the active document, `None` if it was never saved
    fn active_file(&self) -> Option<PathBuf>;

    /// Show an OK/Cancel dialog, returning true when the user confirms
    fn confirm(&mut self, message: &str) -> bool;

    /// Open `url` in the system browser
    fn open_url(&mut self, url: &Url);

    /// Ask the user to save the active document
    fn prompt_save(&mut self);

    /// Show a transient notice in the status bar
    fn status_message(&mut self, message: &str);

    /// The panel that streamed output is written to
    fn output_panel(&mut self) -> &mut dyn OutputSink;

    fn platform(&self) -> Platform {
        Platform::current()
    }
}

impl<T: OutputSink + ?Sized> OutputSink for &mut T {
    fn clear(&mut self) {
        (**self).clear();
    }

    fn append(&mut self, text: &str) {
        (**self).append(text);
    }
}

impl OutputSink for String {
    fn clear(&mut self) {
        String::clear(self);
    }

    fn append(&mut self, text: &str) {
        self.push_str(text);
    }
}
