//! # Mock Framework
//!
//! Utilities for testing the form and client in isolation.
//!
//! Use [`mock_user_client`] to get a client and a receiver, then helpers
//! like [`expect_update`] to assert on the dispatched requests.

use tokio::sync::mpsc;

use crate::clients::UserClient;
use crate::domain::ProfilePatch;
use crate::messages::UserRequest;

/// Creates a client wired to a channel the test controls.
///
/// # Testing Strategy
/// The form only ever talks to the store through the client's channel, so
/// tests don't need a running store task: they inspect the messages arriving
/// on the receiver and assert they are correct. Requests with a reply
/// channel can be answered from the test to simulate store behavior
/// deterministically.
pub fn mock_user_client(buffer_size: usize) -> (UserClient, mpsc::Receiver<UserRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (UserClient::new(sender), receiver)
}

/// Helper to verify that the next message is an UpdateUser dispatch.
pub async fn expect_update(
    receiver: &mut mpsc::Receiver<UserRequest>,
) -> Option<(String, ProfilePatch, String)> {
    match receiver.recv().await {
        Some(UserRequest::UpdateUser { id, patch, role }) => Some((id, patch, role)),
        _ => None,
    }
}

/// Helper to verify that the next message is a SelectUser request.
pub async fn expect_select(receiver: &mut mpsc::Receiver<UserRequest>) -> Option<String> {
    match receiver.recv().await {
        Some(UserRequest::SelectUser { id }) => Some(id),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_client_surfaces_dispatched_updates() {
        let (client, mut receiver) = mock_user_client(4);

        let dispatch = tokio::spawn(async move {
            let patch = ProfilePatch {
                first_name: "Alice".to_string(),
                last_name: "Smith".to_string(),
                username: "asmith".to_string(),
                phone: "5550001111".to_string(),
                email: None,
                city: String::new(),
            };
            client
                .update_user("user_1".to_string(), patch, "Employee".to_string())
                .await
        });

        let (id, patch, role) = expect_update(&mut receiver)
            .await
            .expect("Expected UpdateUser dispatch");
        assert_eq!(id, "user_1");
        assert_eq!(patch.first_name, "Alice");
        assert_eq!(role, "Employee");

        dispatch.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn mock_client_surfaces_selects() {
        let (client, mut receiver) = mock_user_client(4);

        let select = tokio::spawn(async move { client.select_user("user_2".to_string()).await });

        let id = expect_select(&mut receiver)
            .await
            .expect("Expected SelectUser request");
        assert_eq!(id, "user_2");

        select.await.unwrap().unwrap();
    }
}
