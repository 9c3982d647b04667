//! Reachability probe for the thumbnail endpoint.
//!
//! The browser original loaded the URL into an `Image` element and trusted
//! `onload`/`onerror`: the probe succeeds only if the response actually is
//! an image. OMERO answers a logged-out thumbnail request with its HTML
//! login page (status 200), so checking the status alone would report
//! success where the browser reported failure. We keep the original
//! contract by checking image-ness: Content-Type first, magic bytes when
//! the header is missing or generic.
//!
//! Every probe is cache-busted so a previously cached positive or negative
//! result can't leak into a fresh submission.

use reqwest::header::CONTENT_TYPE;

use crate::endpoints::ViewerEndpoints;
use crate::models::ProbeError;

/// Probe whether `url` serves an image right now.
///
/// Resolves Ok(()) only for a successful response whose body is an image.
/// Network errors, timeouts, non-success statuses, and non-image bodies
/// (login pages, error HTML) are all `ProbeError`s; callers cannot and
/// should not distinguish them further.
pub async fn probe_thumbnail(client: &reqwest::Client, url: &str) -> Result<(), ProbeError> {
    let busted = ViewerEndpoints::cache_busted(url);
    let response = client.get(&busted).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ProbeError::BadStatus(status.as_u16()));
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_ascii_lowercase());

    match content_type.as_deref() {
        Some(ct) if is_image_content_type(ct) => Ok(()),
        Some(ct) if ct.starts_with("text/html") => Err(ProbeError::NotAnImage),
        // Missing or generic content type: fall back to sniffing the body.
        _ => {
            let body = response.bytes().await?;
            if sniffs_as_image(&body) {
                Ok(())
            } else {
                Err(ProbeError::NotAnImage)
            }
        }
    }
}

/// True for `image/*` media types, ignoring parameters.
pub fn is_image_content_type(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .map(|t| t.trim().starts_with("image/"))
        .unwrap_or(false)
}

/// Magic-byte check for the formats OMERO's thumbnailer can emit.
pub fn sniffs_as_image(body: &[u8]) -> bool {
    body.starts_with(b"\x89PNG\r\n\x1a\n")
        || body.starts_with(b"\xff\xd8\xff")
        || body.starts_with(b"GIF87a")
        || body.starts_with(b"GIF89a")
        || body.starts_with(b"BM")
        || (body.len() >= 12 && &body[..4] == b"RIFF" && &body[8..12] == b"WEBP")
}
