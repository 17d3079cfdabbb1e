/// Key holding the JSON-serialized customer collection.
pub const CUSTOMERS_KEY: &str = "customers";

/// Key holding the JSON-serialized theme preference.
pub const THEME_KEY: &str = "theme";
