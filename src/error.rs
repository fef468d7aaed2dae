use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(String),
    #[error("Store communication error: {0}")]
    StoreCommunicationError(String),
}
