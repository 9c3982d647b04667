//! Page shell and widget form.
//!
//! The form submits a plain GET to `/view` so the widget works without
//! JavaScript. The embedded script upgrades it: submissions fetch the
//! result fragment and swap it into the viewer region in place. A
//! generation counter guards the swap — if a slow probe resolves after a
//! newer submission, its response is discarded instead of overwriting the
//! newer result.

use super::html_escape;
use super::styles::STYLE;

const WIDGET_SCRIPT: &str = r#"
let generation = 0;

const form = document.getElementById('omero-widget-form');
const input = document.getElementById('image-id');
const viewerArea = document.getElementById('omero-viewer-area');

form.addEventListener('submit', async (e) => {
    e.preventDefault();
    const gen = ++generation;
    const raw = input.value;

    try {
        const response = await fetch(
            '/fragment/view?image_id=' + encodeURIComponent(raw) + '&gen=' + gen
        );
        const served = Number(response.headers.get('x-widget-generation'));
        if (served !== generation) {
            // A newer submission is already in flight or rendered.
            return;
        }
        viewerArea.innerHTML = await response.text();
    } catch (err) {
        console.error('widget submission failed:', err);
    }
});
"#;

/// Base HTML shell shared by every widget page.
pub fn base_html(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{style}</style>
</head>
<body>
    <div class="container">
        {content}
    </div>
</body>
</html>"#,
        title = html_escape(title),
        style = STYLE,
        content = content,
    )
}

/// The full widget page: intro line, form, and the viewer region with
/// whatever `region` content the current submission produced (empty on
/// first load).
pub fn widget_page(region: &str) -> String {
    let content = format!(
        r#"<div class="widget-intro">Provide valid image id to view images from OMERO</div>
        <form class="widget-controls" id="omero-widget-form" action="/view" method="get">
            <label for="image-id">Image ID:</label>
            <input type="text" id="image-id" name="image_id" inputmode="numeric" placeholder="e.g., 11422">
            <button type="submit" class="btn">View Image</button>
        </form>
        <div id="omero-viewer-area">{region}</div>
        <script>{script}</script>"#,
        region = region,
        script = WIDGET_SCRIPT,
    );
    base_html("OMERO Viewer", &content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_has_form_and_empty_region() {
        let page = widget_page("");
        assert!(page.contains(r#"id="omero-widget-form""#));
        assert!(page.contains(r#"name="image_id""#));
        assert!(page.contains(r#"<div id="omero-viewer-area"></div>"#));
    }

    #[test]
    fn page_embeds_region_content() {
        let page = widget_page("<p>hello</p>");
        assert!(page.contains(r#"<div id="omero-viewer-area"><p>hello</p></div>"#));
    }

    #[test]
    fn title_is_escaped() {
        let page = base_html("<script>", "x");
        assert!(page.contains("<title>&lt;script&gt;</title>"));
    }
}
