use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::proxy::Proxy;
use super::proxy_group_config::ProxyGroupConfigs;
use super::ruleset::RoutingRule;

fn default_true() -> bool {
    true
}

fn default_port() -> u16 {
    7890
}

fn default_socks_port() -> u16 {
    7891
}

fn default_mode() -> String {
    "rule".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_external_controller() -> String {
    "127.0.0.1:9090".to_string()
}

fn default_dns_listen() -> String {
    "0.0.0.0:53".to_string()
}

fn default_enhanced_mode() -> String {
    "fake-ip".to_string()
}

fn default_nameserver() -> Vec<String> {
    vec![
        "223.5.5.5".to_string(),
        "119.29.29.29".to_string(),
        "8.8.8.8".to_string(),
    ]
}

fn default_fallback() -> Vec<String> {
    vec!["8.8.8.8".to_string(), "1.1.1.1".to_string()]
}

/// Listener and mode settings written at the top of every generated config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ClashGeneral {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_socks_port")]
    pub socks_port: u16,
    #[serde(default = "default_true")]
    pub allow_lan: bool,
    #[serde(default = "default_mode")]
    pub mode: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_external_controller")]
    pub external_controller: String,
    #[serde(default)]
    pub dns: ClashDns,
}

impl Default for ClashGeneral {
    fn default() -> Self {
        Self {
            port: default_port(),
            socks_port: default_socks_port(),
            allow_lan: true,
            mode: default_mode(),
            log_level: default_log_level(),
            external_controller: default_external_controller(),
            dns: ClashDns::default(),
        }
    }
}

/// DNS configuration for Clash
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ClashDns {
    #[serde(default = "default_true")]
    pub enable: bool,
    #[serde(default = "default_dns_listen")]
    pub listen: String,
    #[serde(default = "default_enhanced_mode")]
    pub enhanced_mode: String,
    #[serde(default = "default_nameserver")]
    pub nameserver: Vec<String>,
    #[serde(default = "default_fallback")]
    pub fallback: Vec<String>,
}

impl Default for ClashDns {
    fn default() -> Self {
        Self {
            enable: true,
            listen: default_dns_listen(),
            enhanced_mode: default_enhanced_mode(),
            nameserver: default_nameserver(),
            fallback: default_fallback(),
        }
    }
}

/// A fully assembled configuration, ready to be serialized once and discarded.
#[derive(Debug, Clone)]
pub struct ConfigDocument {
    pub name: String,
    pub proxies: Vec<Proxy>,
    pub proxy_groups: ProxyGroupConfigs,
    pub rules: Vec<RoutingRule>,
    pub general: ClashGeneral,
    pub generated_at: DateTime<Utc>,
}

impl ConfigDocument {
    /// Names of all proxies, in input order
    pub fn proxy_names(&self) -> Vec<String> {
        self.proxies.iter().map(|p| p.name.clone()).collect()
    }
}
