//! Theme persistence settings.

use cookie::SameSite;
use time::Duration;

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_COOKIE_NAME: &str = "theme";
pub const DEFAULT_COOKIE_PATH: &str = "/";
pub const DEFAULT_COOKIE_LIFETIME_DAYS: i64 = 365;
pub const DEFAULT_DARK_CLASS: &str = "dark";
pub const DEFAULT_MEDIA_QUERY: &str = "(prefers-color-scheme: dark)";

/// Names and cookie attributes used by the theme backends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeConfig {
    /// `localStorage` key holding the explicit choice.
    pub storage_key: String,
    pub cookie_name: String,
    pub cookie_path: String,
    pub cookie_lifetime: Duration,
    pub cookie_same_site: SameSite,
    /// Class toggled on the document element while dark is active.
    pub dark_class: String,
    pub media_query: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            cookie_name: DEFAULT_COOKIE_NAME.to_owned(),
            cookie_path: DEFAULT_COOKIE_PATH.to_owned(),
            cookie_lifetime: Duration::days(DEFAULT_COOKIE_LIFETIME_DAYS),
            cookie_same_site: SameSite::Strict,
            dark_class: DEFAULT_DARK_CLASS.to_owned(),
            media_query: DEFAULT_MEDIA_QUERY.to_owned(),
        }
    }
}
