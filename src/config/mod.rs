//! Configuration management

use anyhow::{bail, Result};
use serde::Deserialize;

use crate::darkmode::DarkModeSettings;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub dark_mode: DarkModeSettings,
}

fn default_port() -> u16 {
    8080
}

/// Get config directory (DARKMODE_CONFIG_DIR, XDG_CONFIG_HOME or platform default)
pub fn get_config_dir() -> std::path::PathBuf {
    if let Ok(dir) = std::env::var("DARKMODE_CONFIG_DIR") {
        return std::path::PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home)
                .join("Library/Application Support/dark-mode-toggle");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return std::path::PathBuf::from(xdg).join("dark-mode-toggle");
        }
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home).join(".config/dark-mode-toggle");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return std::path::PathBuf::from(appdata).join("dark-mode-toggle");
        }
    }

    // Fallback to current directory
    std::path::PathBuf::from(".")
}

pub fn load_config() -> Result<Config> {
    let config_dir = get_config_dir();

    let mut builder = ::config::Config::builder()
        .set_default("port", default_port() as i64)?
        // Load from config file if it exists
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy()).required(false),
        )
        // Override with environment variables (DARKMODE_DARK_MODE__STORAGE_KEY, etc.)
        .add_source(
            ::config::Environment::with_prefix("DARKMODE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

    // Port precedence: DARKMODE_PORT > PORT > config > default
    if let Ok(port) = std::env::var("DARKMODE_PORT") {
        if let Ok(port_num) = port.parse::<u16>() {
            builder = builder.set_override("port", port_num as i64)?;
        }
    } else if let Ok(port) = std::env::var("PORT") {
        if let Ok(port_num) = port.parse::<u16>() {
            builder = builder.set_override("port", port_num as i64)?;
        }
    }

    let config: Config = builder.build()?.try_deserialize()?;
    validate_dark_mode(&config.dark_mode)?;
    Ok(config)
}

/// Key and class end up inside inline page scripts and a classList call.
fn validate_dark_mode(settings: &DarkModeSettings) -> Result<()> {
    if settings.storage_key.is_empty() || settings.storage_key.contains('<') {
        bail!("invalid dark_mode.storage_key: {:?}", settings.storage_key);
    }
    let class_ok = !settings.marker_class.is_empty()
        && settings
            .marker_class
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !class_ok {
        bail!("invalid dark_mode.marker_class: {:?}", settings.marker_class);
    }
    Ok(())
}
