use std::path::Path;
use std::sync::Arc;
use std::sync::LazyLock;
use std::sync::RwLock;

use log::{error, info};

use super::file_settings::FileSettings;
use crate::models::ClashGeneral;

/// Settings structure to hold global configuration
#[derive(Debug, Clone)]
pub struct Settings {
    // Common settings
    pub log_level: String,
    pub default_config_name: String,
    pub fetch_timeout: u64,
    pub user_agent: String,
    pub update_interval: u32,
    pub proxy_subscription: String,

    // Server
    pub listen_address: String,
    pub listen_port: u16,

    // Generated config
    pub clash_general: ClashGeneral,
}

impl Default for Settings {
    fn default() -> Self {
        Settings::from(FileSettings::default())
    }
}

impl From<FileSettings> for Settings {
    fn from(file: FileSettings) -> Self {
        let mut listen_address = file.server.listen_address;
        if listen_address.trim().is_empty() {
            listen_address = "127.0.0.1".to_string();
        }

        Settings {
            log_level: file.common.log_level,
            default_config_name: file.common.default_config_name,
            fetch_timeout: file.common.fetch_timeout,
            user_agent: file.common.user_agent,
            update_interval: file.common.update_interval,
            proxy_subscription: file.common.proxy_subscription,
            listen_address,
            listen_port: file.server.listen_port,
            clash_general: file.clash,
        }
    }
}

impl Settings {
    /// Create a new settings instance with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current() -> Arc<Settings> {
        GLOBAL
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Parse settings from TOML or YAML content
    pub fn load_from_content(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let toml_err = match toml::from_str::<FileSettings>(content) {
            Ok(file) => return Ok(Settings::from(file)),
            Err(e) => e,
        };

        match serde_yaml::from_str::<Option<FileSettings>>(content) {
            Ok(file) => Ok(Settings::from(file.unwrap_or_default())),
            Err(yaml_err) => Err(format!(
                "settings are neither valid TOML ({}) nor valid YAML ({})",
                toml_err.message(),
                yaml_err
            )
            .into()),
        }
    }

    /// Load settings from a file on disk
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(Path::new(path))?;
        Settings::load_from_content(&content)
    }

    /// Listen address including the port
    pub fn bind_address(&self) -> String {
        if self.listen_address.contains(':') {
            self.listen_address.clone()
        } else {
            format!("{}:{}", self.listen_address, self.listen_port)
        }
    }
}

// Global settings instance
pub static GLOBAL: LazyLock<RwLock<Arc<Settings>>> =
    LazyLock::new(|| RwLock::new(Arc::new(Settings::new())));

fn replace_global(settings: Settings) {
    *GLOBAL
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner()) = Arc::new(settings);
}

/// Update settings directly from file path
pub fn update_settings_from_file(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    match Settings::load_from_file(path) {
        Ok(new_settings) => {
            info!("Loaded settings from '{}'", path);
            replace_global(new_settings);
            Ok(())
        }
        Err(err) => {
            error!("Failed to load configuration from '{}': {}", path, err);
            Err(err)
        }
    }
}

pub fn update_settings_from_content(content: &str) -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::load_from_content(content)?;
    replace_global(settings);
    Ok(())
}

/// Apply `--address`/`--port` overrides given on the command line
pub fn override_listen(address: Option<String>, port: Option<u16>) {
    let mut settings = (*Settings::current()).clone();
    if let Some(address) = address {
        settings.listen_address = address;
    }
    if let Some(port) = port {
        settings.listen_port = port;
    }
    replace_global(settings);
}
