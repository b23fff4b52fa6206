use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};
use crate::clients::UserClient;
use crate::domain::{NewUser, User, UserPatch};
use crate::store::{DeleteConfirmation, UpdateOutcome, UserStore};
use super::messages::{Response, UserRequest};

/// Sole owner of a `UserStore`.
///
/// The receive loop handles each message to completion before taking the
/// next one, so concurrent clients observe last-write-wins ordering.
pub struct UserActor {
    receiver: mpsc::Receiver<UserRequest>,
    store: UserStore,
}

impl UserActor {
    pub fn new(buffer_size: usize, store: UserStore) -> (Self, UserClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, store };
        (actor, UserClient::new(sender))
    }

    /// Runs until a `Shutdown` message arrives or every client is dropped.
    #[instrument(name = "user_actor", skip(self))]
    pub async fn run(mut self) {
        info!(user_count = self.store.len(), "UserActor starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                UserRequest::List { respond_to } => self.handle_list(respond_to),
                UserRequest::Get { id, respond_to } => self.handle_get(id, respond_to),
                UserRequest::CreateWithId { user, respond_to } => {
                    self.handle_create_with_id(user, respond_to)
                }
                UserRequest::CreateAutoId { new_user, respond_to } => {
                    self.handle_create_auto_id(new_user, respond_to)
                }
                UserRequest::Update { id, patch, respond_to } => {
                    self.handle_update(id, patch, respond_to)
                }
                UserRequest::Delete { id, respond_to } => self.handle_delete(id, respond_to),
                UserRequest::Shutdown => {
                    info!("UserActor shutting down");
                    break;
                }
                #[cfg(test)]
                UserRequest::Count { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.len()));
                }
            }
        }

        info!("UserActor stopped");
    }

    #[instrument(skip(self, respond_to))]
    fn handle_list(&self, respond_to: Response<Vec<User>>) {
        debug!("Processing list request");
        let users = self.store.list().to_vec();
        info!(user_count = users.len(), "Listed users");
        let _ = respond_to.send(Ok(users));
    }

    #[instrument(fields(user_id = %id), skip(self, id, respond_to))]
    fn handle_get(&self, id: String, respond_to: Response<User>) {
        debug!("Processing get request");
        let result = self.store.get_by_id(&id).cloned();
        match &result {
            Ok(user) => info!(user_name = %user.name, "User found"),
            Err(e) => warn!(error = %e, "User lookup rejected"),
        }
        let _ = respond_to.send(result);
    }

    #[instrument(fields(user_id = %user.id, user_name = %user.name), skip(self, user, respond_to))]
    fn handle_create_with_id(&mut self, user: User, respond_to: Response<User>) {
        debug!("Processing create request");
        let created = self.store.create_with_id(user);
        info!(user_count = self.store.len(), "User created");
        let _ = respond_to.send(Ok(created));
    }

    #[instrument(fields(user_name = %new_user.name), skip(self, new_user, respond_to))]
    fn handle_create_auto_id(&mut self, new_user: NewUser, respond_to: Response<User>) {
        debug!("Processing create without id request");
        let created = self.store.create_auto_id(new_user);
        info!(user_id = %created.id, "User created");
        let _ = respond_to.send(Ok(created));
    }

    #[instrument(fields(user_id = %id), skip(self, id, patch, respond_to))]
    fn handle_update(&mut self, id: String, patch: UserPatch, respond_to: Response<UpdateOutcome>) {
        debug!("Processing update request");
        let outcome = self.store.update_by_id(&id, patch);
        match &outcome {
            UpdateOutcome::Updated(user) => info!(new_id = %user.id, "User updated"),
            UpdateOutcome::Missing { .. } => warn!("User not found for update"),
        }
        let _ = respond_to.send(Ok(outcome));
    }

    #[instrument(fields(user_id = %id), skip(self, id, respond_to))]
    fn handle_delete(&mut self, id: String, respond_to: Response<DeleteConfirmation>) {
        debug!("Processing delete request");
        let result = self.store.delete_by_id(&id);
        match &result {
            Ok(_) => info!(user_count = self.store.len(), "User deleted"),
            Err(e) => warn!(error = %e, "Delete rejected"),
        }
        let _ = respond_to.send(result);
    }
}
