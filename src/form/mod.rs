//! # Profile edit form
//!
//! Headless edit-dialog workflow for a user profile: copy the selected
//! record into a draft, accept per-field edits, validate on submit, and
//! dispatch a sanitized patch to the user store.
//!
//! The form owns no channels and renders nothing. Its owner feeds it store
//! state snapshots (via [`ProfileEditForm::sync_source`]) and hands it a
//! [`UserClient`] at submit time; everything else is plain synchronous
//! state.

pub mod validate;

pub use validate::{validate, ValidationErrors};

use tracing::{debug, info};

use crate::clients::UserClient;
use crate::domain::{ProfileDraft, ProfileField, UserProfile};
use crate::error::UserError;

/// Dialog lifecycle. `OpenEmpty` is the window between the open request and
/// the first observed source record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    Closed,
    OpenEmpty,
    OpenPopulated,
}

/// What a submit attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Patch dispatched, dialog closed, form reset.
    Submitted,
    /// Validation failed; errors are set and the dialog stays open.
    Invalid,
    /// Draft was clean but no source record has been observed; nothing was
    /// dispatched.
    NoSource,
}

#[derive(Debug)]
pub struct ProfileEditForm {
    draft: ProfileDraft,
    errors: ValidationErrors,
    dialog: DialogState,
    source: Option<UserProfile>,
}

impl Default for ProfileEditForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileEditForm {
    pub fn new() -> Self {
        Self {
            draft: ProfileDraft::default(),
            errors: ValidationErrors::new(),
            dialog: DialogState::Closed,
            source: None,
        }
    }

    pub fn dialog(&self) -> DialogState {
        self.dialog
    }

    pub fn is_open(&self) -> bool {
        self.dialog() != DialogState::Closed
    }

    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    /// Current validation message for a field, if any.
    pub fn error(&self, field: ProfileField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Requests the dialog open. The draft stays empty until a source record
    /// is observed through [`sync_source`](Self::sync_source).
    pub fn open(&mut self) {
        if !self.is_open() {
            debug!("Dialog opened");
            self.dialog = DialogState::OpenEmpty;
        }
    }

    /// Feeds the form the latest observed source record.
    ///
    /// Call this whenever a new store state snapshot arrives. While the
    /// dialog is open and a record is present, the draft is overwritten from
    /// the record; missing optional fields populate as empty strings. A
    /// record identical to the last-applied snapshot is a no-op, so in-flight
    /// edits survive redundant republishes. Returns whether the draft was
    /// repopulated.
    pub fn sync_source(&mut self, record: Option<&UserProfile>) -> bool {
        if !self.is_open() {
            return false;
        }
        let Some(record) = record else {
            return false;
        };
        if self.source.as_ref() == Some(record) {
            return false;
        }

        debug!(user_id = %record.id, "Populating draft from source record");
        self.draft = ProfileDraft::from_profile(record);
        self.source = Some(record.clone());
        self.dialog = DialogState::OpenPopulated;
        true
    }

    /// Writes one field of the draft. Any standing validation error for that
    /// field is cleared immediately, before re-validation ever runs; no other
    /// field is touched.
    pub fn set_field(&mut self, field: ProfileField, value: impl Into<String>) {
        self.draft.set_field(field, value);
        self.errors.remove(&field);
    }

    /// Validates the draft and, if clean, dispatches the sanitized patch.
    ///
    /// All rules run against the current draft snapshot; failures replace
    /// the error map and keep the dialog open. On a clean draft the patch is
    /// dispatched as `update_user(id, patch, role)` using the observed
    /// record's id and role, the dialog closes, and draft and errors reset.
    /// The dispatch is fire-and-forget: only the channel send is awaited.
    pub async fn submit(&mut self, client: &UserClient) -> Result<SubmitOutcome, UserError> {
        let errors = validate(&self.draft);
        if !errors.is_empty() {
            debug!(error_count = errors.len(), "Validation failed");
            self.errors = errors;
            return Ok(SubmitOutcome::Invalid);
        }

        let Some(source) = self.source.as_ref() else {
            debug!("Submit with no source record observed, nothing dispatched");
            return Ok(SubmitOutcome::NoSource);
        };

        let patch = self.draft.to_patch();
        info!(user_id = %source.id, "Dispatching profile update");
        client
            .update_user(source.id.clone(), patch, source.role.clone())
            .await?;

        self.close();
        Ok(SubmitOutcome::Submitted)
    }

    /// Closes the dialog without dispatching, discarding unsaved edits.
    /// Backdrop dismissal takes this same path.
    pub fn cancel(&mut self) {
        debug!("Dialog cancelled");
        self.close();
    }

    /// Label for the submit control while an update is in flight anywhere in
    /// the process.
    pub fn submit_label(is_fetching: bool) -> &'static str {
        if is_fetching {
            "Updating..."
        } else {
            "Update"
        }
    }

    fn close(&mut self) {
        self.dialog = DialogState::Closed;
        self.draft = ProfileDraft::default();
        self.errors.clear();
        self.source = None;
    }
}
