//! The combined failure panel.
//!
//! The probe cannot tell a missing image from a logged-out session from a
//! blocked request, so every failure (including invalid input) renders the
//! same three-reason panel with a login link. The output is a pure function
//! of the endpoints, so repeating a failing submission yields an identical
//! panel.

use crate::endpoints::ViewerEndpoints;

/// Render the error panel for the viewer region.
pub fn render_error_panel(endpoints: &ViewerEndpoints) -> String {
    format!(
        r#"<div class="error-panel">
            <ul>
                <li>Image with the specified ID was not found.</li>
                <li>You are not logged in to OMERO. Please log in using the button below.</li>
                <li>If you are already logged in, provide a valid Image ID and click &ldquo;View Image&rdquo;.</li>
            </ul>
        </div>
        <a class="btn" href="{login}" target="_blank" rel="noopener">Log in to OMERO</a>"#,
        login = endpoints.login_url(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_lists_three_reasons_and_no_iframe() {
        let ep = ViewerEndpoints::new("https://omero.example.org").unwrap();
        let html = render_error_panel(&ep);

        assert_eq!(html.matches("<li>").count(), 3);
        assert!(!html.contains("<iframe"));
    }

    #[test]
    fn panel_links_to_login_with_encoded_return_target() {
        let ep = ViewerEndpoints::new("https://omero.example.org").unwrap();
        let html = render_error_panel(&ep);

        assert!(html.contains(
            r#"href="https://omero.example.org/omero_plus/login/?url=%2Fomero_plus%2Freturn-to-external""#
        ));
    }

    #[test]
    fn rendering_twice_is_identical() {
        let ep = ViewerEndpoints::new("https://omero.example.org").unwrap();
        assert_eq!(render_error_panel(&ep), render_error_panel(&ep));
    }
}
