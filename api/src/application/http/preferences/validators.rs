use serde::{Deserialize, Serialize};
use subtrack_core::domain::preferences::entities::Theme;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateThemeValidator {
    pub theme: Theme,
}
