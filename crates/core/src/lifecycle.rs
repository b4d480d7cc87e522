//! Tour publication lifecycle and public-visibility rules.
//!
//! Status moves forward along Draft -> Published -> Archived, always by an
//! explicit creator action. Privacy is an independent flag and may be
//! toggled at any time. A tour is servable on the public path only when it
//! is both Published and Public.

use crate::status::{StatusId, TourPrivacy, TourStatus};

/// Human-readable label for a tour status ID.
pub fn status_label(id: StatusId) -> &'static str {
    match TourStatus::from_id(id) {
        Some(TourStatus::Draft) => "Draft",
        Some(TourStatus::Published) => "Published",
        Some(TourStatus::Archived) => "Archived",
        None => "unknown",
    }
}

/// Human-readable label for a privacy ID.
pub fn privacy_label(id: StatusId) -> &'static str {
    match TourPrivacy::from_id(id) {
        Some(TourPrivacy::Public) => "public",
        Some(TourPrivacy::Private) => "private",
        None => "unknown",
    }
}

/// Validate a creator-requested status change.
///
/// Permitted transitions: Draft -> Published and Published -> Archived.
/// Re-asserting the current status is a no-op and always allowed.
pub fn validate_status_transition(from: StatusId, to: StatusId) -> Result<(), String> {
    let from_status =
        TourStatus::from_id(from).ok_or_else(|| format!("Unknown tour status id {from}"))?;
    let to_status =
        TourStatus::from_id(to).ok_or_else(|| format!("Unknown tour status id {to}"))?;

    if from_status == to_status {
        return Ok(());
    }

    match (from_status, to_status) {
        (TourStatus::Draft, TourStatus::Published) => Ok(()),
        (TourStatus::Published, TourStatus::Archived) => Ok(()),
        _ => Err(format!(
            "Invalid status transition from {} to {}",
            status_label(from),
            status_label(to)
        )),
    }
}

/// Validate a privacy value supplied by a client.
pub fn validate_privacy(privacy: StatusId) -> Result<(), String> {
    TourPrivacy::from_id(privacy)
        .map(|_| ())
        .ok_or_else(|| format!("Unknown privacy id {privacy}"))
}

/// The public-path gate: a tour is servable to an anonymous viewer iff it
/// is Published and Public. Draft, Archived, and Private tours are
/// indistinguishable from absent ones on that path.
pub fn is_publicly_viewable(status: StatusId, privacy: StatusId) -> bool {
    status == TourStatus::Published.id() && privacy == TourPrivacy::Public.id()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_transitions_allowed() {
        assert!(
            validate_status_transition(TourStatus::Draft.id(), TourStatus::Published.id()).is_ok()
        );
        assert!(
            validate_status_transition(TourStatus::Published.id(), TourStatus::Archived.id())
                .is_ok()
        );
    }

    #[test]
    fn test_same_status_is_noop() {
        for status in [TourStatus::Draft, TourStatus::Published, TourStatus::Archived] {
            assert!(validate_status_transition(status.id(), status.id()).is_ok());
        }
    }

    #[test]
    fn test_backward_transitions_rejected() {
        let result =
            validate_status_transition(TourStatus::Published.id(), TourStatus::Draft.id());
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid status transition"));

        assert!(
            validate_status_transition(TourStatus::Archived.id(), TourStatus::Published.id())
                .is_err()
        );
        assert!(
            validate_status_transition(TourStatus::Archived.id(), TourStatus::Draft.id()).is_err()
        );
    }

    #[test]
    fn test_draft_cannot_skip_to_archived() {
        assert!(
            validate_status_transition(TourStatus::Draft.id(), TourStatus::Archived.id()).is_err()
        );
    }

    #[test]
    fn test_unknown_status_rejected() {
        let result = validate_status_transition(99, TourStatus::Published.id());
        assert!(result.unwrap_err().contains("Unknown tour status id 99"));
        assert!(validate_status_transition(TourStatus::Draft.id(), 0).is_err());
    }

    #[test]
    fn test_public_gate_requires_published_and_public() {
        assert!(is_publicly_viewable(
            TourStatus::Published.id(),
            TourPrivacy::Public.id()
        ));
        assert!(!is_publicly_viewable(
            TourStatus::Draft.id(),
            TourPrivacy::Public.id()
        ));
        assert!(!is_publicly_viewable(
            TourStatus::Archived.id(),
            TourPrivacy::Public.id()
        ));
        assert!(!is_publicly_viewable(
            TourStatus::Published.id(),
            TourPrivacy::Private.id()
        ));
    }

    #[test]
    fn test_privacy_validation() {
        assert!(validate_privacy(TourPrivacy::Public.id()).is_ok());
        assert!(validate_privacy(TourPrivacy::Private.id()).is_ok());
        assert!(validate_privacy(7).is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(status_label(1), "Draft");
        assert_eq!(status_label(2), "Published");
        assert_eq!(status_label(3), "Archived");
        assert_eq!(status_label(42), "unknown");
        assert_eq!(privacy_label(1), "public");
        assert_eq!(privacy_label(2), "private");
    }
}
