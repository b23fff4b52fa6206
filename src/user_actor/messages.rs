use tokio::sync::oneshot;
use crate::domain::{NewUser, User, UserPatch};
use crate::store::{DeleteConfirmation, UpdateOutcome, UserError};

pub type Response<T> = oneshot::Sender<Result<T, UserError>>;

/// Typed messages for the user actor. Each variant carries a oneshot channel
/// for the reply.
#[derive(Debug)]
pub enum UserRequest {
    List {
        respond_to: Response<Vec<User>>,
    },
    Get {
        id: String,
        respond_to: Response<User>,
    },
    CreateWithId {
        user: User,
        respond_to: Response<User>,
    },
    CreateAutoId {
        new_user: NewUser,
        respond_to: Response<User>,
    },
    Update {
        id: String,
        patch: UserPatch,
        respond_to: Response<UpdateOutcome>,
    },
    Delete {
        id: String,
        respond_to: Response<DeleteConfirmation>,
    },
    Shutdown,
    #[cfg(test)]
    Count {
        respond_to: Response<usize>,
    },
}
