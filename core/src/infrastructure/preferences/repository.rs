use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{error, warn};

use crate::domain::{
    common::entities::app_errors::CoreError,
    preferences::{entities::Theme, ports::PreferenceRepository},
    storage::{ports::KeyValueStore, value_objects::THEME_KEY},
};

#[derive(Debug, Clone)]
pub struct KvPreferenceRepository<S> {
    store: S,
    mirror: Arc<RwLock<Theme>>,
}

impl<S: KeyValueStore> KvPreferenceRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            mirror: Arc::new(RwLock::new(Theme::default())),
        }
    }
}

impl<S: KeyValueStore> PreferenceRepository for KvPreferenceRepository<S> {
    async fn get_theme(&self) -> Result<Theme, CoreError> {
        match self.store.get(THEME_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str::<Theme>(&raw) {
                Ok(theme) => {
                    *self.mirror.write().await = theme;
                    Ok(theme)
                }
                Err(e) => {
                    warn!("Stored theme is unreadable: {}", e);
                    Ok(*self.mirror.read().await)
                }
            },
            Ok(None) => Ok(*self.mirror.read().await),
            Err(e) => {
                warn!("Preference storage unavailable: {}", e);
                Ok(*self.mirror.read().await)
            }
        }
    }

    async fn set_theme(&self, theme: Theme) -> Result<(), CoreError> {
        let raw = serde_json::to_string(&theme).map_err(|e| {
            error!("Failed to serialize theme: {}", e);
            CoreError::InternalServerError
        })?;

        *self.mirror.write().await = theme;

        if let Err(e) = self.store.set(THEME_KEY, raw).await {
            warn!("Preference storage unavailable, keeping theme in memory only: {}", e);
        }

        Ok(())
    }
}
