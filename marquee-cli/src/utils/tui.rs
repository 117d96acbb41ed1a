use indicatif::{ProgressBar, ProgressStyle};

/// Trailing-dots spinner shown around backend round trips.
pub fn create_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            // Last frame is the finished state; the bar is cleared anyway.
            .tick_strings(&["   ", ".  ", ".. ", "...", ""])
            .template("{msg}{spinner}")
            .unwrap(),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(250));
    spinner
}
