use std::collections::HashMap;

use crate::domain::{ProfileDraft, ProfileField};

/// Per-field validation messages. An entry exists only for fields currently
/// invalid; an empty map means the draft may be submitted.
pub type ValidationErrors = HashMap<ProfileField, String>;

/// Validates a draft against the submit rules.
///
/// Every rule is evaluated; there is no short-circuit. Rule order matters
/// for one key: the phone length check runs after the phone required check,
/// so its message overwrites the required message when both fire. That
/// precedence is deliberate and load-bearing.
pub fn validate(draft: &ProfileDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if draft.first_name.trim().is_empty() {
        errors.insert(ProfileField::FirstName, "First name is required".to_string());
    }
    if draft.last_name.trim().is_empty() {
        errors.insert(ProfileField::LastName, "Last name is required".to_string());
    }
    if draft.username.trim().is_empty() {
        errors.insert(ProfileField::Username, "Username is required".to_string());
    }
    if draft.phone.trim().is_empty() {
        errors.insert(ProfileField::Phone, "Phone number is required".to_string());
    }

    let email = draft.email.trim();
    if !email.is_empty() && !email.contains('@') {
        errors.insert(
            ProfileField::Email,
            "Please enter a valid email address".to_string(),
        );
    }
    if !draft.phone.is_empty() && draft.phone.chars().count() < 10 {
        errors.insert(
            ProfileField::Phone,
            "Phone number must be at least 10 digits".to_string(),
        );
    }

    errors
}
