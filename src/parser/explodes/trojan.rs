use url::Url;

use crate::models::{default_remark, Proxy, ProxyKind};
use crate::parser::types::DecodeError;
use crate::utils::url::url_decode;

use super::{link_port, link_remark};

/// Parse a Trojan link into a Proxy object
///
/// Format: `trojan://password@server:port?sni=host#remark`
pub fn explode_trojan(trojan: &str) -> Result<Proxy, DecodeError> {
    let url = Url::parse(trojan).map_err(|e| DecodeError::MalformedUri(e.to_string()))?;

    let server = url
        .host_str()
        .filter(|h| !h.is_empty())
        .ok_or(DecodeError::MissingField("server"))?
        .to_string();
    let port = link_port(&url)?;

    let password = url_decode(url.username());

    let sni = url
        .query_pairs()
        .find(|(key, _)| key == "sni")
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| server.clone());

    let name = link_remark(&url).unwrap_or_else(|| default_remark(&server, port));

    Ok(Proxy {
        name,
        server,
        port,
        kind: ProxyKind::Trojan { password, sni },
    })
}
