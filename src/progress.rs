use console::{Term, style};
use indicatif::{ProgressBar, ProgressStyle};

use crate::constants::progress::{SPINNER_FRAMES, TICK_INTERVAL};

const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg} [{elapsed}]";

/// Spinner shown on stderr while Graphviz lays out and renders
pub struct ProgressReporter {
    term: Term,
    current: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            current: None,
        }
    }

    /// A reporter only when stderr is an interactive terminal
    pub fn for_terminal() -> Option<Self> {
        Term::stderr().is_term().then(Self::new)
    }

    fn create_spinner(&self, message: String) -> ProgressBar {
        let mut frames: Vec<&str> = SPINNER_FRAMES.to_vec();
        frames.push("✓");

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template(SPINNER_TEMPLATE)
                .expect("Spinner template should be valid")
                .tick_strings(&frames),
        );
        pb.set_message(message);
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    pub fn start_loading(&mut self) {
        self.current = Some(self.create_spinner("Loading Graphviz libraries...".to_string()));
    }

    pub fn start_render(&mut self, engine: &str, format: &str) {
        let message = format!(
            "Laying out with {} and rendering {}...",
            style(engine).cyan(),
            style(format).bold()
        );
        match &self.current {
            Some(pb) => pb.set_message(message),
            None => self.current = Some(self.create_spinner(message)),
        }
    }

    pub fn finish(&mut self) {
        if let Some(pb) = self.current.take() {
            pb.finish_and_clear();
        }
        let _ = self.term.clear_line();
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        self.finish();
    }
}
