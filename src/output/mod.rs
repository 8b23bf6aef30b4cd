pub mod formatter;

pub use formatter::{format_error, format_opening, should_color_errors, should_use_colors};
