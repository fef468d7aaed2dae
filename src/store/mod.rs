//! The user store: a single service task owning the user records, the
//! current selection, and the in-flight flag.
//!
//! State is published through a `watch` channel; consumers (the edit form's
//! owner) read snapshots and never mutate the store except through
//! [`UserRequest`] messages.

pub mod state;

pub use state::StoreState;

use std::collections::HashMap;

use tokio::sync::{mpsc, watch};
use tracing::{debug, error, info, instrument};

use crate::domain::{ProfilePatch, UserProfile};
use crate::error::UserError;
use crate::messages::{ServiceResponse, UserRequest};

pub struct UserStore {
    receiver: mpsc::Receiver<UserRequest>,
    users: HashMap<String, UserProfile>,
    state: watch::Sender<StoreState>,
}

impl UserStore {
    /// Creates the store with its request sender and state receiver.
    /// Seed records are available immediately; nothing is selected yet.
    pub fn new(
        buffer_size: usize,
        seed: Vec<UserProfile>,
    ) -> (Self, mpsc::Sender<UserRequest>, watch::Receiver<StoreState>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (state, state_rx) = watch::channel(StoreState::default());
        let users = seed.into_iter().map(|u| (u.id.clone(), u)).collect();
        (
            Self {
                receiver,
                users,
                state,
            },
            sender,
            state_rx,
        )
    }

    pub async fn run(mut self) {
        info!("UserStore started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                UserRequest::SelectUser { id } => self.handle_select_user(id),
                UserRequest::UpdateUser { id, patch, role } => {
                    self.handle_update_user(id, patch, role)
                }
                UserRequest::GetUser { id, respond_to } => self.handle_get_user(id, respond_to),
                UserRequest::Shutdown => {
                    info!("UserStore shutting down");
                    break;
                }
            }
        }

        info!("UserStore stopped");
    }

    /// Sets the current selection to a copy of the record, or clears it if
    /// the id is unknown.
    #[instrument(fields(user_id = %id), skip(self))]
    fn handle_select_user(&mut self, id: String) {
        debug!("Processing select_user request");

        let selected = self.users.get(&id).cloned();
        match &selected {
            Some(user) => info!(username = %user.username, "User selected"),
            None => error!("User not found for selection"),
        }
        self.state.send_modify(|s| s.current_user = selected);
    }

    /// Applies an update patch, toggling `is_fetching` around the write and
    /// refreshing the current selection when it is the updated record.
    #[instrument(fields(user_id = %id, role = %role), skip(self, patch))]
    fn handle_update_user(&mut self, id: String, patch: ProfilePatch, role: String) {
        debug!("Processing update_user request");
        self.state.send_modify(|s| s.is_fetching = true);

        let updated = match self.users.get_mut(&id) {
            Some(user) => {
                user.apply(patch);
                info!("User updated successfully");
                Some(user.clone())
            }
            None => {
                error!("User not found for update");
                None
            }
        };

        self.state.send_modify(|s| {
            if let Some(user) = updated {
                if s.current_user.as_ref().map(|u| u.id.as_str()) == Some(user.id.as_str()) {
                    s.current_user = Some(user);
                }
            }
            s.is_fetching = false;
        });
    }

    #[instrument(fields(user_id = %id), skip(self, respond_to))]
    fn handle_get_user(
        &self,
        id: String,
        respond_to: ServiceResponse<Option<UserProfile>, UserError>,
    ) {
        debug!("Processing get_user request");

        let user = self.users.get(&id).cloned();
        match &user {
            Some(user) => debug!(username = %user.username, "User found"),
            None => debug!("User not found"),
        }

        let _ = respond_to.send(Ok(user));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_user() -> UserProfile {
        let mut user = UserProfile::new("user_1", "Employee", "Alice", "Smith", "asmith", "5550001111");
        user.email = Some("alice@example.com".to_string());
        user
    }

    #[tokio::test]
    async fn update_refreshes_current_selection_and_clears_fetching() {
        let (store, sender, mut state_rx) = UserStore::new(8, vec![seed_user()]);
        tokio::spawn(store.run());

        sender
            .send(UserRequest::SelectUser {
                id: "user_1".to_string(),
            })
            .await
            .unwrap();

        let selected = state_rx
            .wait_for(|s| s.current_user.is_some())
            .await
            .unwrap()
            .clone();
        assert_eq!(selected.current_user.unwrap().first_name, "Alice");

        sender
            .send(UserRequest::UpdateUser {
                id: "user_1".to_string(),
                patch: ProfilePatch {
                    first_name: "Alicia".to_string(),
                    last_name: "Smith".to_string(),
                    username: "asmith".to_string(),
                    phone: "5559998888".to_string(),
                    email: None,
                    city: "Lisbon".to_string(),
                },
                role: "Employee".to_string(),
            })
            .await
            .unwrap();

        let state = state_rx
            .wait_for(|s| {
                !s.is_fetching
                    && s.current_user
                        .as_ref()
                        .map(|u| u.first_name == "Alicia")
                        .unwrap_or(false)
            })
            .await
            .unwrap()
            .clone();

        let current = state.current_user.unwrap();
        assert_eq!(current.phone, "5559998888");
        assert_eq!(current.city.as_deref(), Some("Lisbon"));
        // omitted email key leaves the stored value alone
        assert_eq!(current.email.as_deref(), Some("alice@example.com"));
    }

    #[tokio::test]
    async fn update_for_unknown_id_still_clears_fetching() {
        let (store, sender, state_rx) = UserStore::new(8, vec![]);
        tokio::spawn(store.run());

        sender
            .send(UserRequest::UpdateUser {
                id: "ghost".to_string(),
                patch: ProfilePatch {
                    first_name: "Nobody".to_string(),
                    last_name: "Here".to_string(),
                    username: "ghost".to_string(),
                    phone: "0000000000".to_string(),
                    email: None,
                    city: String::new(),
                },
                role: "Employee".to_string(),
            })
            .await
            .unwrap();

        // a round-trip get proves the update has been processed
        let (respond_to, response) = tokio::sync::oneshot::channel();
        sender
            .send(UserRequest::GetUser {
                id: "ghost".to_string(),
                respond_to,
            })
            .await
            .unwrap();
        assert!(matches!(response.await.unwrap(), Ok(None)));

        let state = state_rx.borrow().clone();
        assert!(!state.is_fetching);
        assert!(state.current_user.is_none());
    }
}
