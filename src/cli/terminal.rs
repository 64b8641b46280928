//! Terminal implementations of the editor host traits

use crate::runtime::host::{EditorHost, OutputSink};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::debug;
use url::Url;

/// Writes streamed output straight to stdout
#[derive(Debug, Default)]
pub struct TerminalPanel {
    written: usize,
}

impl TerminalPanel {
    /// Bytes appended since the last clear
    pub fn written(&self) -> usize {
        self.written
    }
}

impl OutputSink for TerminalPanel {
    fn clear(&mut self) {
        // A terminal cannot be erased; start counting afresh
        self.written = 0;
    }

    fn append(&mut self, text: &str) {
        let mut stdout = io::stdout().lock();
        if stdout.write_all(text.as_bytes()).and_then(|_| stdout.flush()).is_err() {
            debug!("stdout closed, dropping streamed output");
        }
        self.written += text.len();
    }
}

/// Editor host backed by command-line flags and an interactive terminal
#[derive(Debug)]
pub struct TerminalHost {
    folders: Vec<PathBuf>,
    active_file: Option<PathBuf>,
    assume_yes: bool,
    color: bool,
    panel: TerminalPanel,
}

impl TerminalHost {
    pub fn new(folders: Vec<PathBuf>, active_file: Option<PathBuf>) -> Self {
        Self {
            folders,
            active_file,
            assume_yes: false,
            color: true,
            panel: TerminalPanel::default(),
        }
    }

    /// Answer every confirmation with OK instead of asking
    pub fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }

    pub fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn panel(&self) -> &TerminalPanel {
        &self.panel
    }

    fn notice(&self, message: &str) -> String {
        if self.color {
            message.yellow().to_string()
        } else {
            message.to_string()
        }
    }
}

/// Parse a y/n answer; anything but an explicit yes declines
pub fn parse_answer(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes" | "ok")
}

impl EditorHost for TerminalHost {
    fn project_folders(&self) -> Vec<PathBuf> {
        self.folders.clone()
    }

    fn active_file(&self) -> Option<PathBuf> {
        self.active_file.clone()
    }

    fn confirm(&mut self, message: &str) -> bool {
        eprintln!("{}", self.notice(message));
        if self.assume_yes {
            return true;
        }

        eprint!("[y/N] ");
        let _ = io::stderr().flush();
        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => parse_answer(&answer),
            Err(e) => {
                debug!("Could not read confirmation: {}", e);
                false
            }
        }
    }

    fn open_url(&mut self, url: &Url) {
        eprintln!("Documentation: {}", url);
    }

    fn prompt_save(&mut self) {
        eprintln!("Pass the feature file with --file to use its directory.");
    }

    fn status_message(&mut self, message: &str) {
        eprintln!("{}", self.notice(message));
    }

    fn output_panel(&mut self) -> &mut dyn OutputSink {
        &mut self.panel
    }
}
