//! Website branding shown by the console shell.

use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "RBI";
pub const DEFAULT_LOGO: &str = "assets/images/gbixin.png";
pub const DEFAULT_LOGIN_DESC: &str = "RBI";

/// Branding record, read from the `website` configuration section at
/// start-up and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebsiteConfig {
    pub title: String,
    pub logo: String,
    pub login_image: String,
    pub login_desc: String,
}

impl Default for WebsiteConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            logo: DEFAULT_LOGO.to_string(),
            // The login screen reuses the logo.
            login_image: DEFAULT_LOGO.to_string(),
            login_desc: DEFAULT_LOGIN_DESC.to_string(),
        }
    }
}
