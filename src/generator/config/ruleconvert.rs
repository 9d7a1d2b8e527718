use crate::generator::config::group::{DIRECT, GROUP_DIRECT, GROUP_NODE_SELECT};
use crate::models::{RoutingRule, RuleType};

const LAN_CIDRS: [&str; 4] = [
    "127.0.0.0/8",
    "172.16.0.0/12",
    "192.168.0.0/16",
    "10.0.0.0/8",
];

/// The fixed rule list: LAN direct, China via the direct group, the rest to the selector
pub fn default_rules() -> Vec<RoutingRule> {
    let mut rules = Vec::with_capacity(LAN_CIDRS.len() + 3);
    rules.push(RoutingRule::new(RuleType::DomainSuffix, "local", DIRECT));
    rules.extend(
        LAN_CIDRS
            .iter()
            .map(|cidr| RoutingRule::new(RuleType::IpCidr, *cidr, DIRECT)),
    );
    rules.push(RoutingRule::new(RuleType::GeoIp, "CN", GROUP_DIRECT));
    rules.push(RoutingRule::final_rule(GROUP_NODE_SELECT));
    rules
}

/// Render rules as Clash rule strings
pub fn ruleset_to_clash_str(rules: &[RoutingRule]) -> Vec<String> {
    rules.iter().map(|rule| rule.to_string()).collect()
}
