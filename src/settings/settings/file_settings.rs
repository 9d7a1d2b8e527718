use serde::Deserialize;

use crate::models::ClashGeneral;

fn default_listen_address() -> String {
    "127.0.0.1".to_string()
}

fn default_listen_port() -> u16 {
    25500
}

fn default_info_log_level() -> String {
    "info".to_string()
}

fn default_config_name() -> String {
    "My Clash Config".to_string()
}

fn default_fetch_timeout() -> u64 {
    crate::utils::http::DEFAULT_TIMEOUT
}

fn default_user_agent() -> String {
    "clash-subconverter".to_string()
}

fn default_update_interval() -> u32 {
    24
}

/// `[common]` section
#[derive(Debug, Clone, Deserialize)]
pub struct CommonSettings {
    #[serde(default = "default_info_log_level")]
    pub log_level: String,
    #[serde(default = "default_config_name")]
    pub default_config_name: String,
    /// Seconds before a subscription fetch is abandoned
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Hours, sent to clients as `Profile-Update-Interval`
    #[serde(default = "default_update_interval")]
    pub update_interval: u32,
    /// Upstream proxy for subscription fetches, `NONE` or empty for direct
    #[serde(default)]
    pub proxy_subscription: String,
}

impl Default for CommonSettings {
    fn default() -> Self {
        Self {
            log_level: default_info_log_level(),
            default_config_name: default_config_name(),
            fetch_timeout: default_fetch_timeout(),
            user_agent: default_user_agent(),
            update_interval: default_update_interval(),
            proxy_subscription: String::new(),
        }
    }
}

/// `[server]` section
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_listen_address")]
    pub listen_address: String,
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            listen_address: default_listen_address(),
            listen_port: default_listen_port(),
        }
    }
}

/// On-disk layout of the settings file, shared by the TOML and YAML flavours
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileSettings {
    #[serde(default)]
    pub common: CommonSettings,
    #[serde(default)]
    pub server: ServerSettings,
    /// Overrides for the general block of every generated config
    #[serde(default)]
    pub clash: ClashGeneral,
}
