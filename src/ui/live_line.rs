use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// A single terminal line that can be redrawn in place.
///
/// Used for the reply the assistant is still typing. Clears itself when
/// dropped (RAII pattern).
pub struct LiveLine {
    progress_bar: ProgressBar,
}

impl LiveLine {
    #[allow(clippy::unwrap_used)]
    pub fn new() -> Self {
        let progress_bar = ProgressBar::new_spinner();
        // unwrap is safe: template string is a compile-time constant
        progress_bar.set_style(ProgressStyle::default_spinner().template("{prefix} {wide_msg}").unwrap());
        Self { progress_bar }
    }

    /// A line with a steadily ticking spinner in front of `message`.
    #[allow(clippy::unwrap_used)]
    pub fn spinner(message: &str) -> Self {
        let progress_bar = ProgressBar::new_spinner();
        progress_bar.set_style(
            ProgressStyle::default_spinner()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
                .template("{spinner} {msg}")
                .unwrap(),
        );
        progress_bar.set_message(message.to_string());
        progress_bar.enable_steady_tick(Duration::from_millis(80));
        Self { progress_bar }
    }

    /// Replaces the line's content.
    pub fn update(&self, prefix: &str, message: &str) {
        self.progress_bar.set_prefix(prefix.to_string());
        self.progress_bar.set_message(message.to_string());
        self.progress_bar.tick();
    }

    /// Removes the line from the terminal.
    pub fn clear(&self) {
        self.progress_bar.finish_and_clear();
    }
}

impl Default for LiveLine {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LiveLine {
    fn drop(&mut self) {
        self.progress_bar.finish_and_clear();
    }
}
