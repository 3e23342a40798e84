use std::io::IsTerminal;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar for per-repository fetches.
///
/// The progress bar is automatically disabled in quiet mode or when stderr is not a TTY.
pub struct FetchProgress {
    progress_bar: ProgressBar,
}

impl FetchProgress {
    /// Creates a new progress bar for `total` repositories.
    ///
    /// The progress bar outputs to stderr to avoid interfering with stdout output.
    #[must_use]
    pub fn new(total: u64, quiet: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::new_with_visibility(total, quiet, is_tty)
    }

    /// A progress bar that never draws.
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            progress_bar: ProgressBar::hidden(),
        }
    }

    fn new_with_visibility(total: u64, quiet: bool, is_tty: bool) -> Self {
        if quiet || !is_tty {
            return Self::hidden();
        }
        Self {
            progress_bar: Self::create_visible_progress_bar(total),
        }
    }

    fn create_visible_progress_bar(total: u64) -> ProgressBar {
        let pb = ProgressBar::new(total);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} Fetching [{bar:40.cyan/blue}] {pos}/{len} repos {msg}")
            .map_or_else(
                |_| ProgressStyle::default_bar(),
                |style| style.progress_chars("█▓░"),
            );
        pb.set_style(style);
        pb
    }

    /// Shows the repository currently being fetched.
    pub fn set_message(&self, message: &str) {
        self.progress_bar.set_message(message.to_string());
    }

    /// Increments the progress counter by 1.
    pub fn inc(&self) {
        self.progress_bar.inc(1);
    }

    /// Finishes the progress bar and clears it from the terminal.
    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }

    #[cfg(test)]
    fn position(&self) -> u64 {
        self.progress_bar.position()
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
