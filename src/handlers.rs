//! HTTP route handlers for the widget.
//!
//! `index` serves the widget page, `view` is the no-JavaScript full-page
//! submission, and `view_fragment` backs the in-page fetch path. The
//! fragment response echoes the submission generation so the page script
//! can discard results that a newer submission has already superseded.

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse},
};
use serde::Deserialize;
use std::sync::Arc;

use crate::controller;
use crate::models::WidgetState;
use crate::probe;
use crate::templates::{render_error_panel, render_viewer_frames, widget_page};
use crate::AppState;

#[derive(Deserialize)]
pub struct ViewQuery {
    pub image_id: Option<String>,
    pub gen: Option<u64>,
}

// ============================================================================
// Index Handler
// ============================================================================

pub async fn index(State(_state): State<Arc<AppState>>) -> Html<String> {
    Html(widget_page(""))
}

// ============================================================================
// View Handlers
// ============================================================================

/// No-JS path: render the whole page with the result region filled in.
pub async fn view(
    Query(query): Query<ViewQuery>,
    State(state): State<Arc<AppState>>,
) -> Html<String> {
    let raw = query.image_id.unwrap_or_default();
    let region = run_submission(&state, &raw).await;
    Html(widget_page(&region))
}

/// Fetch path: render only the viewer region, tagged with the submission
/// generation for stale-result rejection on the client.
pub async fn view_fragment(
    Query(query): Query<ViewQuery>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let gen = query.gen.unwrap_or_else(|| state.next_generation());
    let latest = state.observe_generation(gen);
    if gen < latest {
        log::info!(
            "submission generation {} resolved after generation {}",
            gen,
            latest
        );
    }

    let raw = query.image_id.unwrap_or_default();
    let region = run_submission(&state, &raw).await;

    ([("x-widget-generation", gen.to_string())], Html(region))
}

/// Run one submission and render the terminal state into region HTML.
/// The viewer region is always replaced wholesale, never appended to.
async fn run_submission(state: &Arc<AppState>, raw: &str) -> String {
    let client = state.http.clone();
    let submission = controller::submit(raw, &state.endpoints, |url| async move {
        probe::probe_thumbnail(&client, &url).await
    })
    .await;

    match submission.state {
        WidgetState::Displaying(id) => render_viewer_frames(&state.endpoints, id),
        WidgetState::Error(_) => render_error_panel(&state.endpoints),
        // submit() always ends in a terminal state
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> Arc<AppState> {
        Arc::new(AppState::with_base("https://omero.example.org").unwrap())
    }

    #[tokio::test]
    async fn index_serves_the_widget_form() {
        let Html(page) = index(State(test_state())).await;
        assert!(page.contains(r#"id="omero-widget-form""#));
        assert!(page.contains(r#"<div id="omero-viewer-area"></div>"#));
    }

    // Invalid inputs never reach the probe, so these exercise the full
    // handler path without any network.

    #[tokio::test]
    async fn view_with_invalid_input_renders_the_error_panel() {
        let query = Query(ViewQuery {
            image_id: Some("abc".to_string()),
            gen: None,
        });
        let Html(page) = view(query, State(test_state())).await;

        assert!(page.contains("error-panel"));
        assert!(!page.contains("<iframe"));
        assert!(page.contains("omero_plus/login/?url="));
    }

    #[tokio::test]
    async fn view_with_missing_input_renders_the_error_panel() {
        let query = Query(ViewQuery {
            image_id: None,
            gen: None,
        });
        let Html(page) = view(query, State(test_state())).await;
        assert!(page.contains("error-panel"));
    }

    #[tokio::test]
    async fn repeated_failing_submissions_render_identical_regions() {
        let state = test_state();
        let first = run_submission(&state, "-5").await;
        let second = run_submission(&state, "-5").await;

        assert_eq!(first, second);
        assert_eq!(first.matches("error-panel").count(), 1);
    }

    #[tokio::test]
    async fn fragment_echoes_the_submitted_generation() {
        let query = Query(ViewQuery {
            image_id: Some("abc".to_string()),
            gen: Some(7),
        });
        let response = view_fragment(query, State(test_state())).await.into_response();

        // The in-page script drops stale results by comparing this header
        // against its latest submission, so the echo must be exact.
        assert_eq!(
            response.headers().get("x-widget-generation").unwrap(),
            "7"
        );
    }

    #[tokio::test]
    async fn generation_counter_is_monotonic() {
        let state = test_state();
        assert_eq!(state.observe_generation(3), 3);
        assert_eq!(state.observe_generation(5), 5);
        // A late, stale generation does not lower the watermark.
        assert_eq!(state.observe_generation(2), 5);
    }
}
