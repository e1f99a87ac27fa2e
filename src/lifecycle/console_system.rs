use crate::avatar::AvatarPool;
use crate::clients::UserClient;
use crate::config::ConsoleConfig;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Runs the user directory and owns everything the views need to talk to it.
///
/// Must be created inside a Tokio runtime.
pub struct ConsoleSystem {
    /// Client for the directory actor.
    pub client: UserClient,

    /// Settings the system was started with.
    pub config: ConsoleConfig,

    /// Stock avatars used when a local image is picked.
    pub pool: AvatarPool,

    handle: JoinHandle<()>,
}

impl ConsoleSystem {
    /// Seeds the directory with the demo users and spawns its actor.
    pub fn new(config: &ConsoleConfig) -> Self {
        let (actor, client) = crate::directory::new(config);
        info!(users = actor.len(), page_size = config.page_size, "Starting console");
        let handle = tokio::spawn(actor.run());

        Self {
            client,
            config: config.clone(),
            pool: AvatarPool::new(&config.avatar_base_url),
            handle,
        }
    }

    /// Drops the client and waits for the directory to stop.
    ///
    /// Clones of [`client`](Self::client) held elsewhere keep the directory
    /// alive, so drop them first. Returns `Err` if the actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down console...");
        drop(self.client);

        if let Err(e) = self.handle.await {
            error!("Directory task failed: {:?}", e);
            return Err(format!("Directory task failed: {:?}", e));
        }

        info!("Console shutdown complete.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::UserApi;
    use crate::model::UserId;

    #[tokio::test]
    async fn test_system_serves_seeded_directory() {
        let config = ConsoleConfig {
            page_size: 5,
            ..ConsoleConfig::default()
        };
        let system = ConsoleSystem::new(&config);

        let page = system.client.list(3).await.unwrap();
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.data.len(), 2);
        assert_eq!(system.client.get(UserId(1)).await.unwrap().first_name, "George");

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_pool_follows_config() {
        let config = ConsoleConfig {
            avatar_base_url: "https://cdn.example.com/faces/".to_string(),
            ..ConsoleConfig::default()
        };
        let system = ConsoleSystem::new(&config);
        assert_eq!(system.pool.url(1), Some("https://cdn.example.com/faces/1-image.jpg"));
        system.shutdown().await.unwrap();
    }
}
