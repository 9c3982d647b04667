//! The form controller: one submission through the widget state machine.
//!
//! Validation and the probe decision live here, independent of axum and of
//! the real HTTP client. The probe is injected as an async closure so tests
//! can script outcomes and count calls; the handlers pass the real
//! `probe::probe_thumbnail`.

use std::future::Future;

use crate::endpoints::ViewerEndpoints;
use crate::models::{FailureKind, ImageId, ProbeError, WidgetState};

/// Outcome of one submission: the terminal state plus the states passed
/// through on the way, starting at Validating.
#[derive(Debug)]
pub struct Submission {
    pub state: WidgetState,
    pub trace: Vec<WidgetState>,
}

/// Run one submission cycle.
///
/// Invalid input short-circuits to Error without touching the probe.
/// Valid ids probe the thumbnail URL; probe success displays, probe
/// failure errors. Both failure kinds render identically downstream; the
/// distinguishing detail (raw text or failing id) goes to the log only.
pub async fn submit<F, Fut>(raw: &str, endpoints: &ViewerEndpoints, probe: F) -> Submission
where
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<(), ProbeError>>,
{
    let mut trace = vec![WidgetState::Validating];

    let id = match ImageId::parse(raw) {
        Ok(id) => id,
        Err(err) => {
            log::warn!("rejected image id input: {}", err);
            let state = WidgetState::Error(FailureKind::InvalidInput);
            trace.push(state);
            return Submission { state, trace };
        }
    };

    trace.push(WidgetState::Probing(id));

    let state = match probe(endpoints.thumbnail_url(id)).await {
        Ok(()) => {
            log::info!("thumbnail probe succeeded for image {}", id);
            WidgetState::Displaying(id)
        }
        Err(err) => {
            log::warn!("thumbnail probe failed for image {}: {}", id, err);
            WidgetState::Error(FailureKind::ProbeFailure)
        }
    };
    trace.push(state);

    Submission { state, trace }
}
