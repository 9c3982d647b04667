//! The viewer region: two iframes pointing at the OMERO backend.
//!
//! Callers only render this after the thumbnail probe has succeeded;
//! there is no error handling here.

use crate::endpoints::ViewerEndpoints;
use crate::models::ImageId;

/// Render the short thumbnail frame and the tall full-viewer frame for a
/// probed-reachable image.
pub fn render_viewer_frames(endpoints: &ViewerEndpoints, id: ImageId) -> String {
    format!(
        r#"<div id="omero-thumbnail-area">
            <iframe class="thumbnail-frame" src="{thumb}"></iframe>
        </div>
        <div id="omero-iviewer-area">
            <iframe class="iviewer-frame" src="{viewer}"></iframe>
        </div>"#,
        thumb = endpoints.thumbnail_url(id),
        viewer = endpoints.iviewer_url(id),
    )
}
