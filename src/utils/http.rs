use std::time::Duration;

use log::debug;
use reqwest::{Client, Proxy, StatusCode};

use crate::settings::Settings;

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_TIMEOUT: u64 = 15;

/// How subscription fetches reach the network
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    /// Upstream proxy, e.g. `http://127.0.0.1:8080`
    pub proxy: Option<String>,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        ProxyConfig {
            proxy: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT),
            user_agent: "clash-subconverter".to_string(),
        }
    }
}

impl ProxyConfig {
    /// Build the fetch options from the current settings
    pub fn from_settings(settings: &Settings) -> Self {
        ProxyConfig {
            proxy: parse_proxy(&settings.proxy_subscription),
            timeout: Duration::from_secs(settings.fetch_timeout),
            user_agent: settings.user_agent.clone(),
        }
    }
}

/// `NONE` and the empty string both mean a direct connection
pub fn parse_proxy(proxy_str: &str) -> Option<String> {
    let proxy_str = proxy_str.trim();
    if proxy_str.is_empty() || proxy_str.eq_ignore_ascii_case("NONE") {
        None
    } else {
        Some(proxy_str.to_string())
    }
}

/// Makes an HTTP GET request to the specified URL
///
/// # Arguments
/// * `url` - The URL to request
/// * `proxy_config` - Timeout, user agent and optional upstream proxy
///
/// # Returns
/// * `Ok(String)` - The response body as a string
/// * `Err(String)` - Error message if the request failed
pub async fn web_get_async(url: &str, proxy_config: &ProxyConfig) -> Result<String, String> {
    let mut client_builder = Client::builder()
        .timeout(proxy_config.timeout)
        .user_agent(proxy_config.user_agent.as_str());

    if let Some(proxy) = &proxy_config.proxy {
        match Proxy::all(proxy) {
            Ok(proxy) => {
                client_builder = client_builder.proxy(proxy);
            }
            Err(e) => {
                return Err(format!("Failed to set proxy: {}", e));
            }
        }
    }

    let client = match client_builder.build() {
        Ok(client) => client,
        Err(e) => {
            return Err(format!("Failed to build HTTP client: {}", e));
        }
    };

    debug!("Fetching subscription from {}", url);
    let response = match client.get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            return Err(format!("Failed to send request: {}", e));
        }
    };

    if response.status() != StatusCode::OK {
        return Err(format!("HTTP error: {}", response.status()));
    }

    match response.text().await {
        Ok(body) => Ok(body),
        Err(e) => Err(format!("Failed to read response body: {}", e)),
    }
}
