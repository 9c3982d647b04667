//! OMERO viewer widget - a small web frontend for browsing images on an
//! external OMERO server.
//!
//! The application is organized into the following modules:
//!
//! - `models`: image identifiers, errors, and the submission state machine
//! - `endpoints`: URL templates for the external OMERO backend
//! - `probe`: the cache-busted thumbnail reachability probe
//! - `controller`: one submission through the state machine
//! - `templates`: HTML/CSS templates and rendering
//! - `handlers`: HTTP route handlers

use std::sync::Arc;

use omero_widget::{router, AppState, BIND_ADDR};

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() {
    env_logger::init();

    let state = Arc::new(AppState::new());
    let base = state.endpoints.base().to_string();

    let app = router(state);

    let listener = tokio::net::TcpListener::bind(BIND_ADDR)
        .await
        .expect("Failed to bind to port 3000");

    println!("OMERO viewer widget running at http://{}", BIND_ADDR);
    println!("OMERO server base: {}", base);

    axum::serve(listener, app).await.expect("Server error");
}
