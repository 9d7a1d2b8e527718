use chrono::{DateTime, SecondsFormat, Utc};
use log::error;
use serde::Serialize;

use crate::generator::config::group::group_generate;
use crate::generator::config::ruleconvert::{default_rules, ruleset_to_clash_str};
use crate::generator::exports::proxy_to_clash::{group_to_clash_group, proxy_to_clash_proxy};
use crate::models::{ClashGeneral, ConfigDocument, Proxy};

/// Indentation of a list item, and of its continuation lines
const ITEM_PREFIX: &str = "  - ";
const CONTINUATION: &str = "\n    ";

/// Assemble proxies into a document with default listener settings, stamped now
pub fn assemble(records: Vec<Proxy>, name: &str) -> ConfigDocument {
    assemble_with(records, name, ClashGeneral::default(), Utc::now())
}

/// Assemble proxies into a document
///
/// Groups and rules are fixed; only the member lists follow `records`.
/// Nothing here touches I/O, so the same inputs always give the same document.
pub fn assemble_with(
    records: Vec<Proxy>,
    name: &str,
    general: ClashGeneral,
    generated_at: DateTime<Utc>,
) -> ConfigDocument {
    let mut doc = ConfigDocument {
        name: name.to_string(),
        proxies: records,
        proxy_groups: Vec::new(),
        rules: default_rules(),
        general,
        generated_at,
    };
    doc.proxy_groups = group_generate(&doc.proxy_names());
    doc
}

/// Render one list entry as pretty JSON, which Clash reads as YAML flow syntax
fn render_item<T: Serialize>(item: &T) -> String {
    match serde_json::to_string_pretty(item) {
        Ok(json) => format!("{}{}", ITEM_PREFIX, json.replace('\n', CONTINUATION)),
        Err(e) => {
            error!("Failed to render config entry: {}", e);
            String::new()
        }
    }
}

fn render_section(key: &str, items: Vec<String>) -> String {
    if items.is_empty() {
        return format!("{}: []", key);
    }
    format!("{}:\n{}", key, items.join("\n"))
}

/// A name spanning several lines would end the header comment early
fn single_line(s: &str) -> String {
    s.replace(['\r', '\n'], " ")
}

/// Serialize a document to Clash YAML text
pub fn serialize(doc: &ConfigDocument) -> String {
    let general = match serde_yaml::to_string(&doc.general) {
        Ok(yaml) => yaml,
        Err(e) => {
            error!("Failed to render general settings: {}", e);
            String::new()
        }
    };

    let proxies = doc
        .proxies
        .iter()
        .map(|node| render_item(&proxy_to_clash_proxy(node)))
        .collect();
    let groups = doc
        .proxy_groups
        .iter()
        .map(|group| render_item(&group_to_clash_group(group)))
        .collect();
    let rules = ruleset_to_clash_str(&doc.rules)
        .into_iter()
        .map(|rule| format!("{}{}", ITEM_PREFIX, rule))
        .collect();

    format!(
        "# Clash configuration\n# Name: {}\n# Generated at: {}\n\n{}\n\n{}\n\n{}\n\n{}\n",
        single_line(&doc.name),
        doc.generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        general.trim_end(),
        render_section("proxies", proxies),
        render_section("proxy-groups", groups),
        render_section("rules", rules),
    )
}
