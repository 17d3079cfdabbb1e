use tracing::info;

use crate::domain::{
    common::{entities::app_errors::CoreError, ports::Clock, services::Service},
    customer::ports::CustomerRepository,
    preferences::{
        entities::Theme,
        ports::{PreferenceRepository, PreferenceService},
    },
};

impl<CR, PR, CL> PreferenceService for Service<CR, PR, CL>
where
    CR: CustomerRepository,
    PR: PreferenceRepository,
    CL: Clock,
{
    async fn get_theme(&self) -> Result<Theme, CoreError> {
        self.preference_repository.get_theme().await
    }

    async fn set_theme(&self, theme: Theme) -> Result<Theme, CoreError> {
        self.preference_repository.set_theme(theme).await?;
        info!(theme = theme.as_str(), "Theme updated");

        Ok(theme)
    }

    async fn toggle_theme(&self) -> Result<Theme, CoreError> {
        let _guard = self.write_lock.lock().await;

        let theme = self.preference_repository.get_theme().await?.toggled();
        self.preference_repository.set_theme(theme).await?;
        info!(theme = theme.as_str(), "Theme toggled");

        Ok(theme)
    }
}
