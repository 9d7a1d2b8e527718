use std::fmt;

/// Matcher kinds emitted in the generated rule list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleType {
    DomainSuffix,
    IpCidr,
    GeoIp,
    Match,
}

impl RuleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleType::DomainSuffix => "DOMAIN-SUFFIX",
            RuleType::IpCidr => "IP-CIDR",
            RuleType::GeoIp => "GEOIP",
            RuleType::Match => "MATCH",
        }
    }
}

/// A single routing rule. Clash evaluates rules top to bottom and stops at the first match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingRule {
    pub rule_type: RuleType,
    /// Empty for `MATCH`
    pub value: String,
    /// Policy group name or `DIRECT`
    pub target: String,
}

impl RoutingRule {
    pub fn new(rule_type: RuleType, value: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            rule_type,
            value: value.into(),
            target: target.into(),
        }
    }

    /// Catch-all rule sending everything left to `target`
    pub fn final_rule(target: impl Into<String>) -> Self {
        Self::new(RuleType::Match, "", target)
    }
}

impl fmt::Display for RoutingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rule_type == RuleType::Match {
            write!(f, "{},{}", self.rule_type.as_str(), self.target)
        } else {
            write!(
                f,
                "{},{},{}",
                self.rule_type.as_str(),
                self.value,
                self.target
            )
        }
    }
}
