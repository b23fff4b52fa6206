mod app_system;
mod clients;
mod config;
mod domain;
mod store;
mod user_actor;

#[cfg(test)]
mod mock_framework;

use tracing::{error, info, Instrument};
use crate::app_system::{setup_tracing, UserSystem};
use crate::config::SystemConfig;
use crate::domain::{NewUser, UserPatch};

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = SystemConfig::default();
    setup_tracing(&config);

    info!("Starting user store");

    let system = UserSystem::new(&config);
    let client = &system.user_client;

    let users = client.list_users().await.map_err(|e| e.to_string())?;
    info!(users = %render(&users)?, "Seeded users");

    let span = tracing::info_span!("user_creation");
    let created = async {
        info!("Creating user without id");
        client
            .create_user_without_id(NewUser::new("Dana", "d@x.com"))
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;
    info!(user = %render(&created)?, "User created");

    match client.get_user("1".to_string()).await {
        Ok(user) => info!(user = %render(&user)?, "User fetched"),
        Err(e) => error!(error = %e, status = e.status_code(), "User lookup failed"),
    }

    let outcome = client
        .update_user("42".to_string(), UserPatch::name("Nobody"))
        .await
        .map_err(|e| e.to_string())?;
    info!(outcome = %render(&outcome)?, "Update answered");

    let confirmation = client
        .delete_user("2".to_string())
        .await
        .map_err(|e| e.to_string())?;
    info!(result = %render(&confirmation)?, "User deleted");

    let users = client.list_users().await.map_err(|e| e.to_string())?;
    info!(users = %render(&users)?, "Remaining users");

    system.shutdown().await.map_err(|e| e.to_string())?;

    info!("User store stopped");
    Ok(())
}

fn render<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| e.to_string())
}
