use thiserror::Error;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("User with id {0} not found")]
    NotFound(String),
    #[error("Access to this user is forbidden")]
    Forbidden,
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl UserError {
    /// Status code a request layer should answer with for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            UserError::NotFound(_) => 404,
            UserError::Forbidden => 403,
            UserError::ActorCommunication(_) => 500,
        }
    }
}
