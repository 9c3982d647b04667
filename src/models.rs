//! Data types for the viewer widget.
//!
//! An `ImageId` is the only durable value in the system: a positive integer
//! parsed from user text. Everything else (probe outcomes, widget states)
//! is transient per-submission data.

use thiserror::Error;

// ============================================================================
// Image Identifier
// ============================================================================

/// A validated OMERO image identifier. Always a positive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageId(u64);

impl ImageId {
    /// Parse a raw text field value into an image id.
    ///
    /// Input is trimmed first. Empty, non-numeric, non-integer, and
    /// non-positive values are all rejected; only `1..` survives.
    pub fn parse(raw: &str) -> Result<ImageId, InputError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(InputError::Empty);
        }
        match trimmed.parse::<i64>() {
            Ok(n) if n > 0 => Ok(ImageId(n as u64)),
            Ok(_) => Err(InputError::NotPositive(trimmed.to_string())),
            Err(_) => Err(InputError::NotAnInteger(trimmed.to_string())),
        }
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ImageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Why a raw input failed validation. The raw text is kept for the
/// developer log; the UI only ever sees the combined error panel.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("image id is empty")]
    Empty,
    #[error("image id is not an integer: {0:?}")]
    NotAnInteger(String),
    #[error("image id must be positive: {0:?}")]
    NotPositive(String),
}

/// Why a reachability probe failed. The remote cannot tell us whether the
/// image is missing, the session is not logged in, or the request was
/// blocked, so these all collapse into the same user-facing panel.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("response status {0} is not an image")]
    BadStatus(u16),
    #[error("response is not an image (likely a login/HTML page or blocked)")]
    NotAnImage,
}

/// The two failure classes a submission can end in. Both render the same
/// panel; the distinction exists only for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    InvalidInput,
    ProbeFailure,
}

// ============================================================================
// Widget State Machine
// ============================================================================

/// States of one submission cycle.
///
/// Idle -> Validating -> Probing -> Displaying
///                    \-> Error   \-> Error
///
/// A resubmission always restarts at Validating; there is no transition
/// out of Displaying or Error other than a fresh submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    Idle,
    Validating,
    Probing(ImageId),
    Displaying(ImageId),
    Error(FailureKind),
}

impl WidgetState {
    /// Whether this is a terminal state for a submission cycle.
    pub fn is_terminal(&self) -> bool {
        matches!(self, WidgetState::Displaying(_) | WidgetState::Error(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_ids() {
        assert_eq!(ImageId::parse("11422").unwrap().value(), 11422);
        assert_eq!(ImageId::parse("  7  ").unwrap().value(), 7);
        assert_eq!(ImageId::parse("1").unwrap().value(), 1);
    }

    #[test]
    fn rejects_empty_and_whitespace() {
        assert_eq!(ImageId::parse(""), Err(InputError::Empty));
        assert_eq!(ImageId::parse("   "), Err(InputError::Empty));
        assert_eq!(ImageId::parse("\t\n"), Err(InputError::Empty));
    }

    #[test]
    fn rejects_non_integers() {
        assert!(matches!(
            ImageId::parse("abc"),
            Err(InputError::NotAnInteger(_))
        ));
        assert!(matches!(
            ImageId::parse("1.5"),
            Err(InputError::NotAnInteger(_))
        ));
        assert!(matches!(
            ImageId::parse("12a"),
            Err(InputError::NotAnInteger(_))
        ));
    }

    #[test]
    fn rejects_non_positive() {
        assert!(matches!(
            ImageId::parse("-5"),
            Err(InputError::NotPositive(_))
        ));
        assert!(matches!(ImageId::parse("0"), Err(InputError::NotPositive(_))));
    }

    #[test]
    fn keeps_raw_text_for_logging() {
        match ImageId::parse(" abc ") {
            Err(InputError::NotAnInteger(raw)) => assert_eq!(raw, "abc"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn terminal_states() {
        assert!(!WidgetState::Idle.is_terminal());
        assert!(!WidgetState::Validating.is_terminal());
        let id = ImageId::parse("3").unwrap();
        assert!(!WidgetState::Probing(id).is_terminal());
        assert!(WidgetState::Displaying(id).is_terminal());
        assert!(WidgetState::Error(FailureKind::InvalidInput).is_terminal());
    }
}
