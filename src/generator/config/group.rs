//! Group generation utilities
//!
//! Every generated config carries the same three policy groups.

use crate::models::{ProxyGroupConfig, ProxyGroupConfigs};

/// Manual selector, the default route for everything not matched earlier
pub const GROUP_NODE_SELECT: &str = "🚀 节点选择";
/// Latency-probing group over all proxies
pub const GROUP_AUTO_SELECT: &str = "♻️ 自动选择";
/// Direct-connection group used for domestic traffic
pub const GROUP_DIRECT: &str = "🎯 全球直连";
/// Clash built-in policy
pub const DIRECT: &str = "DIRECT";

pub const HEALTH_CHECK_URL: &str = "http://www.gstatic.com/generate_204";
pub const HEALTH_CHECK_INTERVAL: u32 = 300;

/// Build the selector, auto-test and direct groups for the given proxy names
///
/// # Arguments
///
/// * `proxy_names` - Names of every proxy, in document order
///
/// # Returns
///
/// The three groups, selector first
pub fn group_generate(proxy_names: &[String]) -> ProxyGroupConfigs {
    let mut selector_members = Vec::with_capacity(proxy_names.len() + 2);
    selector_members.push(GROUP_AUTO_SELECT.to_string());
    selector_members.push(GROUP_DIRECT.to_string());
    selector_members.extend(proxy_names.iter().cloned());

    vec![
        ProxyGroupConfig::select(GROUP_NODE_SELECT, selector_members),
        ProxyGroupConfig::url_test(
            GROUP_AUTO_SELECT,
            proxy_names.to_vec(),
            HEALTH_CHECK_URL,
            HEALTH_CHECK_INTERVAL,
        ),
        ProxyGroupConfig::select(GROUP_DIRECT, vec![DIRECT.to_string()]),
    ]
}
