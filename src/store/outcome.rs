use serde::{Deserialize, Serialize};
use crate::domain::User;

pub const UPDATE_MISS_MESSAGE: &str = "User not found";
pub const DELETE_MESSAGE: &str = "User deleted successfully";

/// Result of an update.
///
/// A missing id is reported as a regular value carrying `error_message`,
/// not as a `UserError`. Callers answering over HTTP still reply 200.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UpdateOutcome {
    Updated(User),
    Missing { error_message: String },
}

impl UpdateOutcome {
    pub fn missing() -> Self {
        UpdateOutcome::Missing {
            error_message: UPDATE_MISS_MESSAGE.to_string(),
        }
    }

    #[allow(dead_code)]
    pub fn user(&self) -> Option<&User> {
        match self {
            UpdateOutcome::Updated(user) => Some(user),
            UpdateOutcome::Missing { .. } => None,
        }
    }
}

/// Body returned after a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteConfirmation {
    pub message: String,
}

impl Default for DeleteConfirmation {
    fn default() -> Self {
        Self {
            message: DELETE_MESSAGE.to_string(),
        }
    }
}
