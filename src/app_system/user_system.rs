use tokio::sync::watch;
use tracing::info;

use crate::clients::UserClient;
use crate::domain::UserProfile;
use crate::error::UserError;
use crate::store::{StoreState, UserStore};

/// Wires the user store to its consumers.
///
/// Starts the store task, hands out the dispatch client and the observable
/// state receiver, and owns the join handle for shutdown.
pub struct UserSystem {
    pub user_client: UserClient,
    pub state: watch::Receiver<StoreState>,
    handle: tokio::task::JoinHandle<()>,
}

impl UserSystem {
    pub fn new(seed: Vec<UserProfile>) -> Self {
        let (store, sender, state) = UserStore::new(32, seed);
        let user_client = UserClient::new(sender);
        let handle = tokio::spawn(store.run());

        Self {
            user_client,
            state,
            handle,
        }
    }

    pub async fn shutdown(self) -> Result<(), UserError> {
        info!("Shutting down system...");
        self.user_client.shutdown().await?;
        self.handle
            .await
            .map_err(|e| UserError::StoreCommunicationError(format!("Store task failed: {e:?}")))?;
        info!("System shutdown complete.");
        Ok(())
    }
}
