use tokio::sync::mpsc;
use tracing::{debug, instrument};
use crate::domain::{NewUser, User, UserPatch};
use crate::store::{DeleteConfirmation, UpdateOutcome, UserError};
use crate::user_actor::UserRequest;

/// Client for the user actor. Cheap to clone; every clone talks to the same
/// store.
#[derive(Clone)]
pub struct UserClient {
    sender: mpsc::Sender<UserRequest>,
}

impl UserClient {
    pub fn new(sender: mpsc::Sender<UserRequest>) -> Self {
        Self { sender }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), UserError> {
        debug!("Sending shutdown request");
        self.sender
            .send(UserRequest::Shutdown)
            .await
            .map_err(|e| UserError::ActorCommunication(e.to_string()))
    }
}

client_method!(UserClient => fn list_users() -> Vec<User> as UserRequest::List);
client_method!(UserClient => fn get_user(id: String) -> User as UserRequest::Get);
client_method!(UserClient => fn create_user(user: User) -> User as UserRequest::CreateWithId);
client_method!(UserClient => fn create_user_without_id(new_user: NewUser) -> User as UserRequest::CreateAutoId);
client_method!(UserClient => fn update_user(id: String, patch: UserPatch) -> UpdateOutcome as UserRequest::Update);
client_method!(UserClient => fn delete_user(id: String) -> DeleteConfirmation as UserRequest::Delete);

#[cfg(test)]
client_method!(UserClient => fn user_count() -> usize as UserRequest::Count);
