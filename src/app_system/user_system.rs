use tracing::{error, info, instrument};
use crate::clients::UserClient;
use crate::config::SystemConfig;
use crate::store::{UserError, UserStore};
use crate::user_actor::UserActor;

/// Starts the user actor, hands out its client, and shuts it down.
pub struct UserSystem {
    pub user_client: UserClient,
    handle: tokio::task::JoinHandle<()>,
}

impl UserSystem {
    /// Starts the actor over a freshly seeded store.
    pub fn new(config: &SystemConfig) -> Self {
        Self::with_store(config, UserStore::seeded())
    }

    /// Starts the actor over a store the caller built.
    #[instrument(name = "user_system", skip(store), fields(user_count = store.len()))]
    pub fn with_store(config: &SystemConfig, store: UserStore) -> Self {
        info!("Starting user system");

        let (actor, user_client) = UserActor::new(config.buffer_size, store);
        let handle = tokio::spawn(actor.run());

        info!("User system started");
        Self { user_client, handle }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), UserError> {
        info!("Shutting down user system");

        if let Err(e) = self.user_client.shutdown().await {
            error!(error = %e, "Shutdown request failed");
        }

        if let Err(e) = self.handle.await {
            error!(error = ?e, "User actor task failed");
            return Err(UserError::ActorCommunication(format!("User actor task failed: {}", e)));
        }

        info!("User system shutdown complete");
        Ok(())
    }
}
