//! Recording host and panel doubles shared by the runtime tests

use crate::runtime::host::{EditorHost, OutputSink};
use std::path::PathBuf;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelEvent {
    Clear,
    Append(String),
}

/// Output panel that remembers every call made to it
#[derive(Debug, Default)]
pub struct RecordingPanel {
    events: Vec<PanelEvent>,
}

impl RecordingPanel {
    pub fn events(&self) -> Vec<PanelEvent> {
        self.events.clone()
    }

    pub fn appended(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|event| match event {
                PanelEvent::Append(text) => Some(text.clone()),
                PanelEvent::Clear => None,
            })
            .collect()
    }

    pub fn clear_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| **event == PanelEvent::Clear)
            .count()
    }
}

impl OutputSink for RecordingPanel {
    fn clear(&mut self) {
        self.events.push(PanelEvent::Clear);
    }

    fn append(&mut self, text: &str) {
        self.events.push(PanelEvent::Append(text.to_string()));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    Confirm(String),
    OpenUrl(String),
    PromptSave,
    Status(String),
}

/// Scripted editor host
#[derive(Debug)]
pub struct RecordingHost {
    folders: Vec<PathBuf>,
    active_file: Option<PathBuf>,
    save_as: Option<PathBuf>,
    confirm_answer: bool,
    events: Vec<HostEvent>,
    pub panel: RecordingPanel,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self {
            folders: Vec::new(),
            active_file: None,
            save_as: None,
            confirm_answer: false,
            events: Vec::new(),
            panel: RecordingPanel::default(),
        }
    }

    pub fn with_folders<I, P>(mut self, folders: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.folders = folders.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_active_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.active_file = Some(file.into());
        self
    }

    /// Path the document receives when the user is prompted to save
    pub fn saving_as(mut self, file: impl Into<PathBuf>) -> Self {
        self.save_as = Some(file.into());
        self
    }

    pub fn confirming(mut self, answer: bool) -> Self {
        self.confirm_answer = answer;
        self
    }

    /// Dialog, browser and save interactions, in order
    pub fn events(&self) -> Vec<HostEvent> {
        self.events
            .iter()
            .filter(|event| !matches!(event, HostEvent::Status(_)))
            .cloned()
            .collect()
    }

    pub fn status_messages(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|event| match event {
                HostEvent::Status(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }
}

impl EditorHost for RecordingHost {
    fn project_folders(&self) -> Vec<PathBuf> {
        self.folders.clone()
    }

    fn active_file(&self) -> Option<PathBuf> {
        self.active_file.clone()
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.events.push(HostEvent::Confirm(message.to_string()));
        self.confirm_answer
    }

    fn open_url(&mut self, url: &Url) {
        self.events.push(HostEvent::OpenUrl(url.as_str().to_string()));
    }

    fn prompt_save(&mut self) {
        self.events.push(HostEvent::PromptSave);
        if let Some(path) = self.save_as.take() {
            self.active_file = Some(path);
        }
    }

    fn status_message(&mut self, message: &str) {
        self.events.push(HostEvent::Status(message.to_string()));
    }

    fn output_panel(&mut self) -> &mut dyn OutputSink {
        &mut self.panel
    }
}

/// A temp dir holding an executable `behave` shell script with `body`
#[cfg(unix)]
pub fn fake_behave_dir(body: &str) -> tempfile::TempDir {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("behave");
    std::fs::write(&script, body).unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
    dir
}
