//! Recording lifecycle rules and duration derivation.

use crate::status::{RecordingStatus, StatusId};
use crate::types::Timestamp;

/// Human-readable label for a recording status ID.
pub fn recording_status_label(id: StatusId) -> &'static str {
    match RecordingStatus::from_id(id) {
        Some(RecordingStatus::Recording) => "recording",
        Some(RecordingStatus::Processing) => "processing",
        Some(RecordingStatus::Completed) => "completed",
        Some(RecordingStatus::Failed) => "failed",
        None => "unknown",
    }
}

/// Validate a recording status change.
///
/// A recording moves Recording -> Processing -> Completed | Failed, where
/// Processing may be skipped. Completed and Failed are terminal.
/// Re-asserting the current status is a no-op.
pub fn validate_recording_transition(from: StatusId, to: StatusId) -> Result<(), String> {
    let from_status = RecordingStatus::from_id(from)
        .ok_or_else(|| format!("Unknown recording status id {from}"))?;
    let to_status =
        RecordingStatus::from_id(to).ok_or_else(|| format!("Unknown recording status id {to}"))?;

    if from_status == to_status {
        return Ok(());
    }

    let allowed = matches!(
        (from_status, to_status),
        (
            RecordingStatus::Recording,
            RecordingStatus::Processing | RecordingStatus::Completed | RecordingStatus::Failed
        ) | (
            RecordingStatus::Processing,
            RecordingStatus::Completed | RecordingStatus::Failed
        )
    );

    if allowed {
        Ok(())
    } else {
        Err(format!(
            "Invalid recording transition from {} to {}",
            recording_status_label(from),
            recording_status_label(to)
        ))
    }
}

/// Derived recording duration in seconds.
///
/// Defined only when the recording has completed; in-flight and failed
/// recordings have no duration.
pub fn duration_secs(created_at: Timestamp, completed_at: Option<Timestamp>) -> Option<f64> {
    completed_at.map(|done| (done - created_at).num_milliseconds() as f64 / 1000.0)
}
