use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TemplateConfig {
    /// Masking page template, read from disk on every request
    #[serde(default = "default_path")]
    pub path: String,
}

fn default_path() -> String {
    "redirect.tmpl".to_string()
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}
