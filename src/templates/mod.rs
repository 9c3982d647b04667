//! HTML templates and styling for the viewer widget.
//!
//! - `styles` - CSS constants
//! - `components` - Base page shell, widget form, and the fetch/swap script
//! - `viewer` - The two-iframe viewer region
//! - `error_panel` - The combined failure panel with the login link

mod components;
mod error_panel;
mod styles;
mod viewer;

pub use components::{base_html, widget_page};
pub use error_panel::render_error_panel;
pub use styles::STYLE;
pub use viewer::render_viewer_frames;

/// Minimal HTML escaping for text interpolated into templates.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_html_metacharacters() {
        assert_eq!(
            html_escape(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;"
        );
        assert_eq!(html_escape("plain"), "plain");
    }
}
