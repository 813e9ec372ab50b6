//! Configuration constants and utilities for whisk
//!
//! Holds the endpoint defaults and loads the optional INI settings file that
//! tunes colors, the input pointer and the wire format.

use anyhow::{anyhow, Context, Result};
use ini::Ini;
use std::path::Path;
use std::time::Duration;

use crate::repl::display::{Display, DisplayColor};
use crate::repl::services::envelope::WireFormat;

/// Default protocol prefix for the MatchaDB endpoint
pub const DEFAULT_PROTOCOL: &str = "http://";

/// Default MatchaDB host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default MatchaDB port
pub const DEFAULT_PORT: &str = "11150";

/// Default marker rendered after every input prompt
pub const DEFAULT_POINTER: &str = ">";

/// Default settings file path for whisk
pub const DEFAULT_CONFIG_PATH: &str = "~/.whisk/config";

/// Environment variable name for overriding the settings file path
pub const CONFIG_PATH_ENV_VAR: &str = "WHISK_CONFIG_PATH";

/// Get the settings file path, checking environment variable first, then falling back to default
pub fn get_config_path() -> String {
    std::env::var_os(CONFIG_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string())
}

/// Settings read from the INI file. Every key is optional.
#[derive(Debug, Clone, PartialEq)]
pub struct WhiskConfig {
    pub display: Display,
    pub color_enabled: bool,
    pub pointer: String,
    pub wire_format: WireFormat,
    pub timeout: Option<Duration>,
}

impl Default for WhiskConfig {
    fn default() -> Self {
        Self {
            display: Display::default(),
            color_enabled: true,
            pointer: DEFAULT_POINTER.to_string(),
            wire_format: WireFormat::default(),
            timeout: None,
        }
    }
}

impl WhiskConfig {
    /// Load settings from `path` (tilde-expanded). A missing file yields defaults.
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path).into_owned();
        if !Path::new(&expanded).exists() {
            tracing::debug!("No settings file at '{}', using defaults", expanded);
            return Ok(Self::default());
        }

        tracing::debug!("Loading settings from '{}'", expanded);
        let ini = Ini::load_from_file(&expanded)
            .with_context(|| format!("Failed to read settings file '{expanded}'"))?;
        Self::from_ini(&ini)
    }

    fn from_ini(ini: &Ini) -> Result<Self> {
        let mut config = Self::default();

        if let Some(section) = ini.section(Some("display")) {
            let success = section.get("success").map(parse_color).transpose()?;
            let error = section.get("error").map(parse_color).transpose()?;
            let general = section.get("general").map(parse_color).transpose()?;
            config.display = config.display.configure(success, error, general);

            if let Some(flag) = section.get("color") {
                config.color_enabled = parse_bool(flag)?;
            }
        }

        if let Some(section) = ini.section(Some("input")) {
            if let Some(pointer) = section.get("pointer") {
                config.pointer = pointer.to_string();
            }
        }

        if let Some(section) = ini.section(Some("transport")) {
            if let Some(format) = section.get("wire_format") {
                config.wire_format = format.parse()?;
            }
            if let Some(secs) = section.get("timeout") {
                let secs: u64 = secs
                    .trim()
                    .parse()
                    .with_context(|| format!("Invalid timeout '{secs}'"))?;
                config.timeout = Some(Duration::from_secs(secs));
            }
        }

        Ok(config)
    }
}

fn parse_color(value: &str) -> Result<DisplayColor> {
    value.parse()
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        other => Err(anyhow!("Invalid boolean '{other}'")),
    }
}
