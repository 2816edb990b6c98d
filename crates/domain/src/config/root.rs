use super::{
    ConfigError, DnsConfig, FrameConfig, LoggingConfig, ServerConfig, TemplateConfig,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const PORT_ENV: &str = "PORT";
pub const FRAME_TITLE_ENV: &str = "FRAME_TITLE";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub dns: DnsConfig,

    #[serde(default)]
    pub frame: FrameConfig,

    #[serde(default)]
    pub template: TemplateConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values given on the command line; they win over file and environment.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    /// Defaults, then the optional TOML file, then the process environment,
    /// then CLI overrides.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        Self::load_with_env(path, overrides, |name| std::env::var(name).ok())
    }

    pub fn load_with_env<F>(
        path: Option<&str>,
        overrides: CliOverrides,
        env: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_env(env)?;
        config.apply_overrides(overrides);

        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Empty variables are treated as unset.
    pub fn apply_env<F>(&mut self, env: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = env(PORT_ENV).filter(|v| !v.is_empty()) {
            self.server.port = port.parse().map_err(|_| ConfigError::InvalidEnv {
                name: PORT_ENV,
                value: port.clone(),
            })?;
        }

        if let Some(title) = env(FRAME_TITLE_ENV).filter(|v| !v.is_empty()) {
            self.frame.default_title = title;
        }

        Ok(())
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind_address) = overrides.bind_address {
            self.server.bind_address = bind_address;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("server.port cannot be 0".into()));
        }

        if self.dns.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "dns.timeout_ms must be greater than 0".into(),
            ));
        }

        for (field, prefix) in [
            ("dns.target_prefix", &self.dns.target_prefix),
            ("dns.title_prefix", &self.dns.title_prefix),
            ("dns.favicon_prefix", &self.dns.favicon_prefix),
        ] {
            if prefix.is_empty() {
                return Err(ConfigError::Validation(format!("{field} cannot be empty")));
            }
        }

        if self.frame.default_title.is_empty()
            || self.frame.default_favicon.is_empty()
            || self.frame.scraped_favicon.is_empty()
        {
            return Err(ConfigError::Validation(
                "frame defaults cannot be empty".into(),
            ));
        }

        if self.template.path.is_empty() {
            return Err(ConfigError::Validation("template.path cannot be empty".into()));
        }

        Ok(())
    }
}
