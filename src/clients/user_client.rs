use tokio::sync::oneshot;
use tracing::{debug, instrument};

use crate::domain::{ProfilePatch, UserProfile};
use crate::error::UserError;
use crate::messages::UserRequest;

/// Client for the user store. Thin wrapper around the request channel; this
/// is the dispatch boundary the edit form talks through.
#[derive(Clone)]
pub struct UserClient {
    sender: tokio::sync::mpsc::Sender<UserRequest>,
}

impl UserClient {
    pub fn new(sender: tokio::sync::mpsc::Sender<UserRequest>) -> Self {
        Self { sender }
    }

    #[instrument(skip(self))]
    pub async fn select_user(&self, id: String) -> Result<(), UserError> {
        debug!("Sending request");
        self.sender
            .send(UserRequest::SelectUser { id })
            .await
            .map_err(|_| UserError::StoreCommunicationError("Store closed".to_string()))
    }

    /// Dispatches an update and returns as soon as the request is queued.
    /// The outcome is observed through the published store state, never
    /// through a reply channel.
    #[instrument(fields(user_id = %id, role = %role), skip(self, patch))]
    pub async fn update_user(
        &self,
        id: String,
        patch: ProfilePatch,
        role: String,
    ) -> Result<(), UserError> {
        debug!("Sending request");
        self.sender
            .send(UserRequest::UpdateUser { id, patch, role })
            .await
            .map_err(|_| UserError::StoreCommunicationError("Store closed".to_string()))
    }

    #[instrument(skip(self))]
    pub async fn get_user(&self, id: String) -> Result<Option<UserProfile>, UserError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(UserRequest::GetUser { id, respond_to })
            .await
            .map_err(|_| UserError::StoreCommunicationError("Store closed".to_string()))?;
        response
            .await
            .map_err(|_| UserError::StoreCommunicationError("Store dropped".to_string()))?
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), UserError> {
        debug!("Sending shutdown request");
        self.sender
            .send(UserRequest::Shutdown)
            .await
            .map_err(|_| UserError::StoreCommunicationError("Store closed".to_string()))
    }
}
