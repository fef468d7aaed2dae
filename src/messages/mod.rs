use tokio::sync::oneshot;

use crate::domain::{ProfilePatch, UserProfile};
use crate::error::UserError;

/// Generic type aliases for store communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Typed messages for the user store. Requests that need an answer carry a
/// oneshot channel; `UpdateUser` deliberately does not — the form dispatches
/// it fire-and-forget and observes the outcome through the published store
/// state instead.
#[derive(Debug)]
pub enum UserRequest {
    SelectUser {
        id: String,
    },
    UpdateUser {
        id: String,
        patch: ProfilePatch,
        role: String,
    },
    GetUser {
        id: String,
        respond_to: ServiceResponse<Option<UserProfile>, UserError>,
    },
    Shutdown,
}
