use crate::pager::DecodePolicy;
use crate::settings::{Settings, Theme};
use eyre::Result;
use serde_json;
use std::{fs, path::PathBuf};

#[derive(Debug, Clone)]
pub struct Config {
    pub settings: Settings,
    filepath: PathBuf,
}

impl Config {
    pub fn new() -> Result<Self> {
        let prefix = get_app_data_prefix()?;
        let filepath = prefix.join("configuration.json");

        if filepath.exists() {
            return Self::load_from(filepath);
        }

        // Save initial config if it doesn't exist
        let settings = Settings::default();
        let initial_config = serde_json::json!({ "Setting": settings });
        fs::create_dir_all(&prefix)?;
        fs::write(&filepath, serde_json::to_string_pretty(&initial_config)?)?;

        Ok(Self { settings, filepath })
    }

    /// Load configuration from a custom path. Unknown, missing, or invalid
    /// fields fall back to their defaults rather than failing the load.
    pub fn load_from(filepath: PathBuf) -> Result<Self> {
        let mut settings = Settings::default();

        if filepath.exists() {
            let config_str = fs::read_to_string(&filepath)?;
            if let Ok(user_config) = serde_json::from_str::<serde_json::Value>(&config_str) {
                if let Some(user_settings_map) =
                    user_config.get("Setting").and_then(|v| v.as_object())
                {
                    if let Some(val) = user_settings_map.get("theme")
                        && let Ok(theme) = serde_json::from_value::<Theme>(val.clone())
                    {
                        settings.theme = theme;
                    }
                    if let Some(val) = user_settings_map
                        .get("lines_per_page")
                        .and_then(|v| v.as_u64())
                        && Settings::valid_lines_per_page(val as usize)
                    {
                        settings.lines_per_page = val as usize;
                    }
                    if let Some(val) = user_settings_map.get("decode_policy")
                        && let Ok(policy) = serde_json::from_value::<DecodePolicy>(val.clone())
                    {
                        settings.decode_policy = policy;
                    }
                    if let Some(val) = user_settings_map
                        .get("show_progress_indicator")
                        .and_then(|v| v.as_bool())
                    {
                        settings.show_progress_indicator = val;
                    }
                }
            }
        }

        Ok(Self { settings, filepath })
    }

    /// Create a config that is not backed by a file, for fallback startup
    /// and tests.
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            filepath: PathBuf::new(),
        }
    }

    /// Get the configuration file path
    pub fn filepath(&self) -> &PathBuf {
        &self.filepath
    }

    /// Save current configuration to file. A config created without a
    /// backing file is left alone.
    pub fn save(&self) -> Result<()> {
        if self.filepath.as_os_str().is_empty() {
            return Ok(());
        }

        let config_json = serde_json::json!({ "Setting": self.settings });
        let config_str = serde_json::to_string_pretty(&config_json)?;

        if let Some(parent) = self.filepath.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.filepath, config_str)?;
        Ok(())
    }
}

pub fn get_app_data_prefix() -> Result<PathBuf> {
    if let Some(config_home) = std::env::var_os("XDG_CONFIG_HOME") {
        let path = PathBuf::from(config_home).join("folio");
        return Ok(path);
    } else if let Some(home) = std::env::var_os("HOME") {
        let path = PathBuf::from(home.clone()).join(".config").join("folio");
        if path.exists() {
            return Ok(path);
        } else {
            return Ok(PathBuf::from(home).join(".folio"));
        }
    } else if let Some(user_profile) = std::env::var_os("USERPROFILE") {
        return Ok(PathBuf::from(user_profile).join(".folio"));
    }

    Err(eyre::eyre!(
        "Could not determine application data directory"
    ))
}
