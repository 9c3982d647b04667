//! OMERO viewer widget - library root.
//!
//! A small server-rendered widget around an external OMERO image server:
//! the user submits an image id, the server validates it, probes whether
//! the backend serves a thumbnail for it, and renders either a two-iframe
//! viewer region or an error panel with a login link.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

pub mod controller;
pub mod endpoints;
pub mod handlers;
pub mod models;
pub mod probe;
pub mod templates;

// ============================================================================
// Configuration
// ============================================================================

pub const BIND_ADDR: &str = "127.0.0.1:3000";

/// Outbound timeout for the thumbnail probe. The browser original had no
/// timeout at all and could sit in "probing" forever; here a hung backend
/// becomes an ordinary probe failure.
pub const PROBE_TIMEOUT_SECS: u64 = 10;

// ============================================================================
// Application State
// ============================================================================

pub struct AppState {
    pub endpoints: endpoints::ViewerEndpoints,
    pub http: reqwest::Client,
    latest_generation: AtomicU64,
}

impl AppState {
    /// State from the environment (OMERO_BASE or the default server).
    pub fn new() -> Self {
        let endpoints =
            endpoints::ViewerEndpoints::from_env().expect("OMERO_BASE is not a valid http(s) URL");
        Self::with_endpoints(endpoints)
    }

    /// State for an explicit server base.
    pub fn with_base(base: &str) -> Result<Self, endpoints::EndpointError> {
        Ok(Self::with_endpoints(endpoints::ViewerEndpoints::new(base)?))
    }

    fn with_endpoints(endpoints: endpoints::ViewerEndpoints) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(PROBE_TIMEOUT_SECS))
            .build()
            .expect("failed to build HTTP client");

        Self {
            endpoints,
            http,
            latest_generation: AtomicU64::new(0),
        }
    }

    /// Issue a fresh submission generation (used when a request carries
    /// none of its own).
    pub fn next_generation(&self) -> u64 {
        self.latest_generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Record an observed submission generation and return the latest one
    /// seen so far. A stale probe result shows up as `gen < latest`.
    pub fn observe_generation(&self, gen: u64) -> u64 {
        self.latest_generation.fetch_max(gen, Ordering::SeqCst).max(gen)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Router
// ============================================================================

/// Build the widget's routes. Hosts mount this explicitly; nothing in the
/// crate runs off ambient startup events.
pub fn router(state: std::sync::Arc<AppState>) -> axum::Router {
    use axum::routing::get;

    axum::Router::new()
        .route("/", get(handlers::index))
        .route("/view", get(handlers::view))
        .route("/fragment/view", get(handlers::view_fragment))
        .with_state(state)
}

// Re-export commonly used types
pub use controller::{submit, Submission};
pub use endpoints::{EndpointError, ViewerEndpoints, DEFAULT_OMERO_BASE, LOGIN_RETURN_TARGET};
pub use models::{FailureKind, ImageId, InputError, ProbeError, WidgetState};
pub use probe::probe_thumbnail;
pub use templates::{
    base_html, html_escape, render_error_panel, render_viewer_frames, widget_page, STYLE,
};
