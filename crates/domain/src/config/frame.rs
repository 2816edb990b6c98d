use crate::frame::FrameDefaults;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FrameConfig {
    /// Title used when no tier produced one. Overridden by `FRAME_TITLE`.
    #[serde(default = "default_title")]
    pub default_title: String,

    /// Favicon used when no tier produced one.
    #[serde(default = "default_favicon")]
    pub default_favicon: String,

    /// Favicon the page scraper reports when the page links none.
    #[serde(default = "default_scraped_favicon")]
    pub scraped_favicon: String,
}

impl FrameConfig {
    pub fn defaults(&self) -> FrameDefaults {
        FrameDefaults {
            title: self.default_title.clone(),
            favicon: self.default_favicon.clone(),
        }
    }
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            default_title: default_title(),
            default_favicon: default_favicon(),
            scraped_favicon: default_scraped_favicon(),
        }
    }
}

fn default_title() -> String {
    "Brighella".to_string()
}

fn default_favicon() -> String {
    "https://fav.farm/🎭".to_string()
}

fn default_scraped_favicon() -> String {
    "https://fav.farm/📸".to_string()
}
