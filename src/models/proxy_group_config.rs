/// Type of proxy group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProxyGroupType {
    Select,
    URLTest,
}

/// Configuration for a proxy group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyGroupConfig {
    /// Name of the proxy group
    pub name: String,
    /// Type of the proxy group
    pub group_type: ProxyGroupType,
    /// Member names, in order; proxies, other groups or `DIRECT`
    pub proxies: Vec<String>,
    /// URL for testing, url-test groups only
    pub url: String,
    /// Interval in seconds between tests, url-test groups only
    pub interval: u32,
}

impl ProxyGroupConfig {
    /// Create a selector group over the given members
    pub fn select(name: impl Into<String>, proxies: Vec<String>) -> Self {
        Self {
            name: name.into(),
            group_type: ProxyGroupType::Select,
            proxies,
            url: String::new(),
            interval: 0,
        }
    }

    /// Create a health-probing group that picks the fastest member
    pub fn url_test(
        name: impl Into<String>,
        proxies: Vec<String>,
        url: impl Into<String>,
        interval: u32,
    ) -> Self {
        Self {
            name: name.into(),
            group_type: ProxyGroupType::URLTest,
            proxies,
            url: url.into(),
            interval,
        }
    }
}

/// A collection of proxy group configurations
pub type ProxyGroupConfigs = Vec<ProxyGroupConfig>;
