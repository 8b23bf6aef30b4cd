use std::io::IsTerminal;
use owo_colors::OwoColorize;

use crate::lookup::PullRequestLink;

/// Format the confirmation shown when a PR is opened in the browser
/// Format: "Opening PR #{number} in browser: {url}"
pub fn format_opening(link: &PullRequestLink, use_colors: bool) -> String {
    if use_colors {
        format!(
            "Opening PR {} in browser: {}",
            format!("#{}", link.number).bold(),
            link.url.underline()
        )
    } else {
        format!("Opening PR #{} in browser: {}", link.number, link.url)
    }
}

/// Format a failure for stderr
pub fn format_error(message: &str, use_colors: bool) -> String {
    if use_colors {
        format!("{} {}", "error:".red().bold(), message)
    } else {
        format!("error: {}", message)
    }
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Check if stderr is a TTY
pub fn should_color_errors() -> bool {
    std::io::stderr().is_terminal()
}
