pub mod entities;
pub mod ports;
pub mod services;

pub use entities::Theme;
pub use ports::{PreferenceRepository, PreferenceService};
