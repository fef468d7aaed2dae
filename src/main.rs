mod app_system;
mod clients;
mod domain;
mod error;
mod form;
mod messages;
mod store;

#[cfg(test)]
mod mock_framework;

use tracing::{info, warn, Instrument};

use crate::app_system::{setup_tracing, UserSystem};
use crate::domain::{ProfileField, UserProfile};
use crate::error::UserError;
use crate::form::{ProfileEditForm, SubmitOutcome};

#[tokio::main]
async fn main() -> Result<(), UserError> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting profile edit demo");

    let mut alice = UserProfile::new(
        "user_1",
        "Employee",
        "Alice",
        "Smith",
        "asmith",
        "5550001111",
    );
    alice.email = Some("alice@example.com".to_string());

    let system = UserSystem::new(vec![alice]);
    let mut state_rx = system.state.clone();

    // The parent controller picks the record and opens the dialog
    system.user_client.select_user("user_1".to_string()).await?;
    let snapshot = state_rx
        .wait_for(|s| s.current_user.is_some())
        .await
        .map_err(|e| UserError::StoreCommunicationError(e.to_string()))?
        .clone();

    let span = tracing::info_span!("edit_dialog");
    async {
        let mut form = ProfileEditForm::new();
        form.open();
        form.sync_source(snapshot.current_user.as_ref());
        for field in ProfileField::ALL {
            info!(?field, value = form.draft().field(field), "Populated");
        }
        info!(
            label = ProfileEditForm::submit_label(snapshot.is_fetching),
            "Dialog ready"
        );

        // A first pass the user abandons
        form.set_field(ProfileField::City, "Porto");
        form.cancel();
        info!("Edits discarded on cancel");

        // Second pass: reopen, trip validation, then fix and submit
        form.open();
        form.sync_source(snapshot.current_user.as_ref());
        form.set_field(ProfileField::Phone, "123");
        form.set_field(ProfileField::Email, "");

        let outcome = form.submit(&system.user_client).await?;
        if outcome == SubmitOutcome::Invalid {
            warn!(
                error_count = form.errors().len(),
                phone_error = form.error(ProfileField::Phone),
                "Submit rejected"
            );
        }

        form.set_field(ProfileField::Phone, "5559998888");
        form.set_field(ProfileField::City, "Lisbon");
        let outcome = form.submit(&system.user_client).await?;
        info!(?outcome, "Submit finished");
        Ok::<(), UserError>(())
    }
    .instrument(span)
    .await?;

    let refreshed = state_rx
        .wait_for(|s| {
            !s.is_fetching
                && s.current_user
                    .as_ref()
                    .map(|u| u.phone == "5559998888")
                    .unwrap_or(false)
        })
        .await
        .map_err(|e| UserError::StoreCommunicationError(e.to_string()))?
        .clone();
    info!(user = ?refreshed.current_user, "Store republished updated record");

    let stored = system
        .user_client
        .get_user("user_1".to_string())
        .await?
        .ok_or_else(|| UserError::NotFound("user_1".to_string()))?;
    info!(city = ?stored.city, email = ?stored.email, "Stored record after update");

    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
