use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::config::io::ConfigError;
use crate::core::display_mode::DisplayMode;

/// Webhook used when neither the config file nor the command line names one.
pub const DEFAULT_WEBHOOK_URL: &str = "https://hook.integromat.com/tu-webhook";

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Config {
    /// Endpoint that receives every submitted message
    pub webhook_url: Option<String>,
    /// Start in dark mode (defaults to on)
    pub dark_mode: Option<bool>,
}

pub fn path_display<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();

    #[cfg(unix)]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let home_path = PathBuf::from(home);
            if let Ok(relative) = path.strip_prefix(&home_path) {
                return format!("~/{}", relative.display());
            }
        }
    }

    path.display().to_string()
}

/// Checks that `url` is an absolute http(s) URL.
pub fn validate_webhook_url(url: &str) -> Result<(), ConfigError> {
    let parsed = reqwest::Url::parse(url.trim()).map_err(|err| ConfigError::InvalidWebhookUrl {
        url: url.to_string(),
        reason: err.to_string(),
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::InvalidWebhookUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}

fn parse_switch(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

impl Config {
    pub fn webhook_url(&self) -> &str {
        self.webhook_url.as_deref().unwrap_or(DEFAULT_WEBHOOK_URL)
    }

    pub fn display_mode(&self) -> DisplayMode {
        DisplayMode::from_dark(self.dark_mode.unwrap_or(true))
    }

    /// Sets a key as spelled on the command line (`webhook-url`, `dark-mode`).
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "webhook-url" => {
                validate_webhook_url(value)?;
                self.webhook_url = Some(value.trim().to_string());
            }
            "dark-mode" => self.dark_mode = Some(parse_switch(key, value)?),
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    pub fn unset(&mut self, key: &str) -> Result<(), ConfigError> {
        match key {
            "webhook-url" => self.webhook_url = None,
            "dark-mode" => self.dark_mode = None,
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }
}
