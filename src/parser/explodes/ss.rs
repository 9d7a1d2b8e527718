use url::Url;

use crate::models::{default_remark, Proxy, ProxyKind, SS_DEFAULT_CIPHER};
use crate::parser::types::DecodeError;
use crate::utils::base64::base64_decode;
use crate::utils::url::url_decode;

use super::{link_port, link_remark};

/// Split `method:password` at the first colon; text without a colon is a bare password
fn split_method_password(secret: &str) -> (String, String) {
    match secret.split_once(':') {
        Some((method, password)) => (method.to_string(), password.to_string()),
        None => (SS_DEFAULT_CIPHER.to_string(), secret.to_string()),
    }
}

/// Parse a Shadowsocks link into a Proxy object
///
/// Format (SIP002): `ss://BASE64(method:password)@server:port#remark`.
/// Providers also emit the user info unencoded, and sometimes without a method.
pub fn explode_ss(ss: &str) -> Result<Proxy, DecodeError> {
    let url = Url::parse(ss).map_err(|e| DecodeError::MalformedUri(e.to_string()))?;

    let server = url
        .host_str()
        .filter(|h| !h.is_empty())
        .ok_or(DecodeError::MissingField("server"))?
        .to_string();
    let port = link_port(&url)?;

    // The URL parser splits plain `method:password` user info in two
    let user_info = match url.password() {
        Some(password) => format!("{}:{}", url_decode(url.username()), url_decode(password)),
        None => url_decode(url.username()),
    };
    let (cipher, password) = match base64_decode(&user_info) {
        Some(decoded) => split_method_password(&decoded),
        None => split_method_password(&user_info),
    };

    let name = link_remark(&url).unwrap_or_else(|| default_remark(&server, port));

    Ok(Proxy {
        name,
        server,
        port,
        kind: ProxyKind::Shadowsocks { cipher, password },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProxyType;

    fn ss_fields(node: &Proxy) -> (&str, &str) {
        match &node.kind {
            ProxyKind::Shadowsocks { cipher, password } => (cipher, password),
            other => panic!("expected shadowsocks, got {:?}", other),
        }
    }

    #[test]
    fn test_explode_ss_sip002_format() {
        let node = explode_ss("ss://YWVzLTI1Ni1nY206cGFzczEyMw==@example.com:8388#MyNode").unwrap();

        assert_eq!(node.proxy_type(), ProxyType::Shadowsocks);
        assert_eq!(node.name, "MyNode");
        assert_eq!(node.server, "example.com");
        assert_eq!(node.port, 8388);
        assert_eq!(ss_fields(&node), ("aes-256-gcm", "pass123"));
    }

    #[test]
    fn test_explode_ss_password_with_colon() {
        // chacha20-ietf-poly1305:pa:ss
        let node =
            explode_ss("ss://Y2hhY2hhMjAtaWV0Zi1wb2x5MTMwNTpwYTpzcw==@1.2.3.4:443").unwrap();
        assert_eq!(ss_fields(&node), ("chacha20-ietf-poly1305", "pa:ss"));
        assert_eq!(node.name, "1.2.3.4:443");
    }

    #[test]
    fn test_explode_ss_plain_user_info() {
        let node = explode_ss("ss://rc4-md5:secret@example.com:8388").unwrap();
        assert_eq!(ss_fields(&node), ("rc4-md5", "secret"));
    }

    #[test]
    fn test_explode_ss_password_only_falls_back_to_default_cipher() {
        let node = explode_ss("ss://justapassword!@example.com:8388").unwrap();
        assert_eq!(ss_fields(&node), ("aes-256-gcm", "justapassword!"));

        // base64 of "onlypassword", no colon once decoded
        let node = explode_ss("ss://b25seXBhc3N3b3Jk@example.com:8388").unwrap();
        assert_eq!(ss_fields(&node), ("aes-256-gcm", "onlypassword"));
    }

    #[test]
    fn test_explode_ss_percent_encoded_fragment() {
        let node = explode_ss(
            "ss://YWVzLTI1Ni1nY206cGFzczEyMw==@example.com:8388#%E9%A6%99%E6%B8%AF%2001",
        )
        .unwrap();
        assert_eq!(node.name, "香港 01");
    }

    #[test]
    fn test_explode_ss_empty_fragment_uses_address() {
        let node = explode_ss("ss://YWVzLTI1Ni1nY206cGFzczEyMw==@example.com:8388#").unwrap();
        assert_eq!(node.name, "example.com:8388");
    }

    #[test]
    fn test_explode_ss_invalid_url() {
        assert!(matches!(
            explode_ss("ss://"),
            Err(DecodeError::MissingField(_)) | Err(DecodeError::MalformedUri(_))
        ));
        assert!(matches!(
            explode_ss("ss://YWVz@example.com:notaport"),
            Err(DecodeError::MalformedUri(_))
        ));
    }

    #[test]
    fn test_explode_ss_missing_port() {
        assert_eq!(
            explode_ss("ss://YWVzLTI1Ni1nY206cGFzczEyMw==@example.com#x"),
            Err(DecodeError::MissingField("port"))
        );
    }
}
