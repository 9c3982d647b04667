//! URL construction for the external OMERO backend.
//!
//! All remote URL shapes live here so a backend move means changing one
//! place. The three templates are external-service contracts:
//!
//! - thumbnail:   `{base}/webclient/render_thumbnail/{id}`
//! - full viewer: `{base}/iviewer/?images={id}`
//! - login:       `{base}/omero_plus/login/?url={encoded-return-target}`

use chrono::Utc;
use thiserror::Error;
use url::Url;

use crate::models::ImageId;

/// Default OMERO server base; override with the OMERO_BASE env var.
pub const DEFAULT_OMERO_BASE: &str = "https://nife-dev.cancer.gov";

/// Path the login page returns to after a successful login.
pub const LOGIN_RETURN_TARGET: &str = "/omero_plus/return-to-external";

/// Why a configured server base was rejected.
#[derive(Debug, Error)]
pub enum EndpointError {
    #[error("invalid base URL: {0}")]
    InvalidBase(#[from] url::ParseError),
    #[error("base URL must be http or https, got {0:?}")]
    UnsupportedScheme(String),
}

/// Builds every URL the widget needs from a single base.
#[derive(Debug, Clone)]
pub struct ViewerEndpoints {
    base: String,
}

impl ViewerEndpoints {
    /// Create endpoints for a given server base. The base is validated as
    /// an absolute http(s) URL; a trailing slash is stripped so the
    /// templates below always join cleanly.
    pub fn new(base: &str) -> Result<ViewerEndpoints, EndpointError> {
        let parsed = Url::parse(base)?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(EndpointError::UnsupportedScheme(parsed.scheme().to_string()));
        }
        Ok(ViewerEndpoints {
            base: base.trim_end_matches('/').to_string(),
        })
    }

    /// Endpoints from OMERO_BASE, falling back to the default server.
    pub fn from_env() -> Result<ViewerEndpoints, EndpointError> {
        let base = std::env::var("OMERO_BASE").unwrap_or_else(|_| DEFAULT_OMERO_BASE.to_string());
        ViewerEndpoints::new(&base)
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Webclient thumbnail endpoint for an image.
    pub fn thumbnail_url(&self, id: ImageId) -> String {
        format!("{}/webclient/render_thumbnail/{}", self.base, id)
    }

    /// Full iviewer endpoint for an image.
    pub fn iviewer_url(&self, id: ImageId) -> String {
        format!("{}/iviewer/?images={}", self.base, id)
    }

    /// Login page, redirecting back to the widget's return target.
    pub fn login_url(&self) -> String {
        format!(
            "{}/omero_plus/login/?url={}",
            self.base,
            urlencoding::encode(LOGIN_RETURN_TARGET)
        )
    }

    /// Append a cache-busting parameter so the probe never sees a stale
    /// cached result. Separator depends on whether a query already exists.
    pub fn cache_busted(url: &str) -> String {
        let sep = if url.contains('?') { '&' } else { '?' };
        format!("{}{}cb={}", url, sep, Utc::now().timestamp_millis())
    }
}
