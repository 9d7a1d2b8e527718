use crate::models::{Proxy, ProxyType};
use crate::parser::types::DecodeError;

/// Decoder signature shared by every supported protocol
pub type Decoder = fn(&str) -> Result<Proxy, DecodeError>;

/// Scheme prefixes with a decoder; anything else is rejected by [`explode`].
const DECODERS: &[(ProxyType, Decoder)] = &[
    (ProxyType::VMess, super::vmess::explode_vmess),
    (ProxyType::Shadowsocks, super::ss::explode_ss),
    (ProxyType::Trojan, super::trojan::explode_trojan),
];

/// Look up the decoder for a link type
pub fn decoder_for(proxy_type: ProxyType) -> Option<Decoder> {
    DECODERS
        .iter()
        .find(|(t, _)| *t == proxy_type)
        .map(|(_, decoder)| *decoder)
}

/// Explode a proxy link into a Proxy object
///
/// This function detects the type of proxy link and calls the appropriate parser.
/// Records that come back without a name or server are rejected here, so callers
/// only ever see complete proxies.
pub fn explode(link: &str) -> Result<Proxy, DecodeError> {
    let link = link.trim();

    let proxy_type = ProxyType::from_link(link);
    let decoder = decoder_for(proxy_type).ok_or(DecodeError::Unsupported(proxy_type))?;

    let node = decoder(link)?;
    if !node.is_complete() {
        let field = if node.server.is_empty() { "server" } else { "name" };
        return Err(DecodeError::MissingField(field));
    }
    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explode_dispatches_by_scheme() {
        let node = explode("trojan://secret@example.com:443#T").unwrap();
        assert_eq!(node.proxy_type(), ProxyType::Trojan);

        let node = explode("  ss://YWVzLTI1Ni1nY206cGFzczEyMw==@example.com:8388#S \r").unwrap();
        assert_eq!(node.proxy_type(), ProxyType::Shadowsocks);
        assert_eq!(node.name, "S");
    }

    #[test]
    fn test_explode_rejects_unsupported() {
        assert_eq!(
            explode("vless://skip-me@x:1"),
            Err(DecodeError::Unsupported(ProxyType::Vless))
        );
        assert_eq!(
            explode("hysteria2://pw@x:1"),
            Err(DecodeError::Unsupported(ProxyType::Unknown))
        );
        assert_eq!(
            explode("plain text"),
            Err(DecodeError::Unsupported(ProxyType::Unknown))
        );
    }

    #[test]
    fn test_decoder_table() {
        assert!(decoder_for(ProxyType::VMess).is_some());
        assert!(decoder_for(ProxyType::Shadowsocks).is_some());
        assert!(decoder_for(ProxyType::Trojan).is_some());
        assert!(decoder_for(ProxyType::Vless).is_none());
        assert!(decoder_for(ProxyType::Unknown).is_none());
    }
}
