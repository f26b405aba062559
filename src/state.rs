use std::sync::Arc;

use crate::config::Config;
use crate::db::Store;
use crate::services::{PostService, SeaOrmPostService, SeaOrmUserService, UserService};

/// Long-lived handles built once at startup and shared by every request.
#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<Config>,

    pub store: Store,

    pub user_service: Arc<dyn UserService>,

    pub post_service: Arc<dyn PostService>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_url,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        Ok(Self::with_store(config, store))
    }

    #[must_use]
    pub fn with_store(config: Config, store: Store) -> Self {
        let user_service = Arc::new(SeaOrmUserService::new(
            store.clone(),
            config.security.clone(),
        )) as Arc<dyn UserService + Send + Sync + 'static>;

        let post_service = Arc::new(SeaOrmPostService::new(store.clone()))
            as Arc<dyn PostService + Send + Sync + 'static>;

        Self {
            config: Arc::new(config),
            store,
            user_service,
            post_service,
        }
    }
}
