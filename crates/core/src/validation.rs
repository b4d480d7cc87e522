//! Field-level validation for tour and step input.

/// Maximum length for tour and step titles.
pub const MAX_TITLE_LEN: usize = 200;

/// Maximum length for a saved-tour bookmark name.
pub const MAX_SAVED_NAME_LEN: usize = 255;

/// Validate a tour title: required, non-blank, bounded length.
pub fn validate_tour_title(title: &str) -> Result<(), String> {
    validate_title("Tour title", title)
}

/// Validate a step title: same rules as tour titles.
pub fn validate_step_title(title: &str) -> Result<(), String> {
    validate_title("Step title", title)
}

fn validate_title(field: &str, title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err(format!("{field} is required"));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(format!(
            "{field} must be at most {MAX_TITLE_LEN} characters"
        ));
    }
    Ok(())
}
