use serde::Serialize;

use super::clash_output::ClashProxy;

/// Represents a proxy group in Clash configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ClashProxyGroup {
    #[serde(rename = "select")]
    Select { name: String, proxies: Vec<String> },
    #[serde(rename = "url-test")]
    UrlTest {
        name: String,
        proxies: Vec<String>,
        url: String,
        interval: u32,
    },
}

/// The structured part of a generated config, as returned to API callers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClashConfig {
    pub name: String,
    pub proxies: Vec<ClashProxy>,
    #[serde(rename = "proxy-groups")]
    pub proxy_groups: Vec<ClashProxyGroup>,
    pub rules: Vec<String>,
}
