use log::{error, info};
use serde::Deserialize;
use thiserror::Error;

use crate::generator::{assemble_with, document_to_clash_config, serialize, ClashConfig};
use crate::models::ClashGeneral;
use crate::parser::normalize;
use crate::settings::Settings;
use crate::utils::base64::{base64_decode, base64_encode};
use crate::utils::http::{web_get_async, ProxyConfig};
use crate::utils::string::non_blank;
use crate::utils::url::{is_link, url_decode, url_encode};

/// Errors surfaced to whoever asked for a conversion
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Please provide a subscription URL or proxy links")]
    InputMissing,
    #[error("No supported proxy nodes found")]
    EmptyResult,
    #[error("Failed to fetch subscription: {0}")]
    Fetch(String),
    #[error("Invalid subscription link: {0}")]
    InvalidShareLink(String),
}

/// Body of a conversion request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConvertRequest {
    /// An http(s) subscription URL, a single share link, or a whole subscription body
    #[serde(rename = "subscriptionUrl", default)]
    pub subscription_url: Option<String>,
    #[serde(rename = "configName", default)]
    pub config_name: Option<String>,
}

/// Everything one conversion produces
#[derive(Debug, Clone)]
pub struct ConvertResult {
    pub config: ClashConfig,
    pub yaml: String,
    pub share_url: String,
    pub node_count: usize,
}

/// Share link pointing at `/clash/<segment>` under `origin`
pub fn build_share_link(origin: &str, yaml: &str) -> String {
    format!(
        "{}/clash/{}",
        origin.trim_end_matches('/'),
        url_encode(&base64_encode(yaml))
    )
}

/// Recover the document embedded in a share link path segment
///
/// The segment may arrive already percent-decoded; decoding again is harmless
/// since Base64 text never contains `%`.
pub fn decode_share_segment(segment: &str) -> Result<String, ConvertError> {
    let encoded = url_decode(segment.trim());
    if encoded.is_empty() {
        return Err(ConvertError::InvalidShareLink("empty segment".to_string()));
    }
    base64_decode(&encoded)
        .ok_or_else(|| ConvertError::InvalidShareLink("not a Base64 document".to_string()))
}

/// Convert an already fetched subscription body
pub fn convert_body(
    body: &str,
    name: &str,
    general: &ClashGeneral,
    origin: &str,
) -> Result<ConvertResult, ConvertError> {
    let proxies = normalize(body)?;
    let node_count = proxies.len();

    let doc = assemble_with(proxies, name, general.clone(), chrono::Utc::now());
    let yaml = serialize(&doc);
    let share_url = build_share_link(origin, &yaml);
    info!("Generated config '{}' with {} nodes", name, node_count);

    Ok(ConvertResult {
        config: document_to_clash_config(&doc),
        yaml,
        share_url,
        node_count,
    })
}

/// Resolve the request source to a subscription body, fetching http(s) URLs
pub async fn fetch_source(source: &str, proxy_config: &ProxyConfig) -> Result<String, ConvertError> {
    if !is_link(source) {
        return Ok(source.to_string());
    }

    info!("Fetching subscription: {}", source);
    web_get_async(source, proxy_config).await.map_err(|e| {
        error!("Fetching {} failed: {}", source, e);
        ConvertError::Fetch(e)
    })
}

/// Run a full conversion request against the given settings
pub async fn convert(
    request: &ConvertRequest,
    origin: &str,
    settings: &Settings,
) -> Result<ConvertResult, ConvertError> {
    let source =
        non_blank(request.subscription_url.as_deref()).ok_or(ConvertError::InputMissing)?;
    let name = non_blank(request.config_name.as_deref())
        .unwrap_or(settings.default_config_name.as_str());

    let body = fetch_source(source, &ProxyConfig::from_settings(settings)).await?;
    convert_body(&body, name, &settings.clash_general, origin)
}
