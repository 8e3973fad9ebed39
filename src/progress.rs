use console::{Term, style};
use indicatif::{ProgressBar, ProgressStyle};

use crate::constants::progress::{SPINNER_FRAMES, TICK_INTERVAL};
use crate::utils::string::pluralize;

const PROGRESS_BAR_TEMPLATE: &str = "{spinner:.cyan} {msg} {bar:30.cyan/blue} {pos}/{len}";
const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";

/// Status reporting on stderr while packages are discovered and parsed
pub struct ProgressReporter {
    term: Term,
    current_bar: Option<ProgressBar>,
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
            current_bar: None,
        }
    }

    /// Reporter for interactive sessions only
    pub fn for_stderr(quiet: bool) -> Option<Self> {
        if !quiet && Term::stderr().is_term() {
            Some(Self::new())
        } else {
            None
        }
    }

    fn create_spinner(&self, message: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template(SPINNER_TEMPLATE)
                .expect("Spinner template should be valid")
                .tick_strings(SPINNER_FRAMES),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    pub fn start_discovery(&mut self) {
        let _ = self.term.clear_line();
        let spinner = self.create_spinner("Scanning for debian/control files...");
        self.current_bar = Some(spinner);
    }

    pub fn finish_discovery(&mut self, count: usize) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        let _ = self.term.clear_line();
        if count == 0 {
            eprintln!("\r{} No source packages found", style("✗").red());
        } else {
            eprintln!(
                "\r{} Found {} source {}",
                style("✓").green(),
                style(count).yellow().bold(),
                pluralize("package", count)
            );
        }
    }

    /// Bar advanced once per parsed control file
    pub fn start_parsing(&mut self, total: usize) -> ProgressBar {
        let pb = ProgressBar::new(total as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(PROGRESS_BAR_TEMPLATE)
                .expect("Progress bar template should be valid")
                .tick_strings(SPINNER_FRAMES)
                .progress_chars("█▉▊▋▌▍▎▏ "),
        );
        pb.set_message("Parsing control files");
        pb.enable_steady_tick(TICK_INTERVAL);
        self.current_bar = Some(pb.clone());
        pb
    }

    pub fn parsing_control(&self, id: &str) {
        if let Some(ref pb) = self.current_bar {
            pb.set_message(format!("Parsing {}", style(id).dim()));
        }
    }

    pub fn finish_parsing(&mut self) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        let _ = self.term.clear_line();
    }
}
