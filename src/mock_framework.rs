//! # Mock Framework
//!
//! Utilities for testing [`UserClient`] callers without a running actor.
//!
//! Use [`create_mock_client`] to get a client and a receiver, then use helpers
//! like [`expect_get`] or [`expect_update`] to assert what was sent and to
//! script the reply.

use tokio::sync::mpsc;
use crate::clients::UserClient;
use crate::domain::{NewUser, User, UserPatch};
use crate::store::{DeleteConfirmation, UpdateOutcome};
use crate::user_actor::{Response, UserRequest};

/// Creates a client whose requests land on the returned receiver.
pub fn create_mock_client(buffer_size: usize) -> (UserClient, mpsc::Receiver<UserRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (UserClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get(receiver: &mut mpsc::Receiver<UserRequest>) -> Option<(String, Response<User>)> {
    match receiver.recv().await {
        Some(UserRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a create-without-id request
pub async fn expect_create_auto_id(receiver: &mut mpsc::Receiver<UserRequest>) -> Option<(NewUser, Response<User>)> {
    match receiver.recv().await {
        Some(UserRequest::CreateAutoId { new_user, respond_to }) => Some((new_user, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update(
    receiver: &mut mpsc::Receiver<UserRequest>,
) -> Option<(String, UserPatch, Response<UpdateOutcome>)> {
    match receiver.recv().await {
        Some(UserRequest::Update { id, patch, respond_to }) => Some((id, patch, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request
pub async fn expect_delete(
    receiver: &mut mpsc::Receiver<UserRequest>,
) -> Option<(String, Response<DeleteConfirmation>)> {
    match receiver.recv().await {
        Some(UserRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::UserError;

    #[tokio::test]
    async fn test_mock_client_create() {
        let (client, mut receiver) = create_mock_client(10);

        let create_task = tokio::spawn(async move {
            client.create_user_without_id(NewUser::new("Test", "test@example.com")).await
        });

        let (payload, responder) = expect_create_auto_id(&mut receiver).await.expect("Expected create request");
        assert_eq!(payload.name, "Test");
        responder.send(Ok(payload.with_id("4"))).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result.map(|u| u.id), Ok("4".to_string()));
    }

    #[tokio::test]
    async fn test_mock_client_forwards_errors() {
        let (client, mut receiver) = create_mock_client(10);

        let get_task = tokio::spawn(async move { client.get_user("1".to_string()).await });

        let (id, responder) = expect_get(&mut receiver).await.expect("Expected get request");
        assert_eq!(id, "1");
        responder.send(Err(UserError::Forbidden)).unwrap();

        assert_eq!(get_task.await.unwrap(), Err(UserError::Forbidden));
    }

    #[tokio::test]
    async fn test_dropped_responder_reports_actor_dropped() {
        let (client, mut receiver) = create_mock_client(10);

        let delete_task = tokio::spawn(async move { client.delete_user("2".to_string()).await });

        let (id, responder) = expect_delete(&mut receiver).await.expect("Expected delete request");
        assert_eq!(id, "2");
        drop(responder);

        assert_eq!(
            delete_task.await.unwrap(),
            Err(UserError::ActorCommunication("Actor dropped".to_string()))
        );
    }
}
