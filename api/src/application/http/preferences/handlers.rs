pub mod get_theme;
pub mod toggle_theme;
pub mod update_theme;
